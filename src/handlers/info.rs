use crate::catalogue::{Catalogue, ToolRecord};
use crate::error::{Result, SelectionError};
use colored::Colorize;

pub fn handle_info(target: String) -> Result<()> {
    let catalogue = Catalogue::shared()?;

    let record: &ToolRecord = if let Ok(index) = target.trim().parse::<usize>() {
        catalogue.get(index)
    } else {
        catalogue.find(&target)
    }
    .ok_or_else(|| SelectionError::UnknownSelection(target.clone()))?;

    println!("📦 {}", record.name.bold());
    println!("{}", "=".repeat(60));
    println!("  Category: {}", record.category);
    if let Some(description) = &record.description {
        println!("  Description: {}", description);
    }
    if let Some(homepage) = &record.homepage {
        println!("  Homepage: {}", homepage.cyan());
    }
    println!("  Install steps:");
    for step in &record.steps {
        println!("    $ {}", step.dimmed());
    }

    Ok(())
}
