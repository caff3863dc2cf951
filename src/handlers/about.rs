use crate::catalogue::Catalogue;
use crate::error::Result;
use colored::Colorize;

pub fn handle_about() -> Result<()> {
    let catalogue = Catalogue::shared()?;

    println!("🛡  {} v{}", "armory".bold(), env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(60));
    println!("  {}", env!("CARGO_PKG_DESCRIPTION"));
    println!("  Repository: {}", env!("CARGO_PKG_REPOSITORY").cyan());
    println!("  Catalogue: {} tools in {} categories", catalogue.len(), catalogue.categories().len());
    println!();
    println!("  Upgrade with: cargo install armory-cli --force");

    Ok(())
}
