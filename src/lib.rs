//! # Armory CLI
//!
//! A Rust-based command-line installer for curated security tooling. The
//! catalogue is a static, ordered list of tools; installing one shells out
//! to the host package manager and git, running each tool's install steps
//! in order and reporting a per-tool result.
//!
//! ## Features
//!
//! - **Static Catalogue**: embedded, validated at startup, immutable after load
//! - **Batch Installs**: by index, name, category, or everything at once
//! - **Tool Isolation**: one failed install never aborts the rest of a batch
//! - **Interactive Menu**: numbered menu mirroring the classic installer flow
//!
//! ## Example
//!
//! ```rust,no_run
//! use armory_cli::catalogue::Catalogue;
//! use armory_cli::installer::{InstallOptions, Installer, ShellRunner};
//! use armory_cli::selection::Selection;
//!
//! # fn main() -> armory_cli::Result<()> {
//! let catalogue = Catalogue::load()?;
//! let runner = ShellRunner;
//! let installer = Installer::new(&runner, InstallOptions::default());
//! let report = installer.install(&Selection::parse("nmap"), &catalogue)?;
//! println!("{} installed", report.succeeded());
//! # Ok(())
//! # }
//! ```

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod installer;
pub mod menu;
pub mod selection;

// Re-export commonly used types and functions
pub use catalogue::{Catalogue, ToolRecord};
pub use error::{ArmoryError, Result};
pub use installer::{BatchReport, InstallOutcome, Installer};
pub use selection::Selection;

use cli::Commands;
use config::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &Config, quiet: bool) -> Result<()> {
    match command {
        Commands::Install {
            target,
            category,
            dry_run,
            yes,
        } => handlers::handle_install(target, category, dry_run, yes, config, quiet),
        Commands::List { category, format } => handlers::handle_list(category, format),
        Commands::Categories { format } => handlers::handle_categories(format),
        Commands::Info { target } => handlers::handle_info(target),
        Commands::Setup { dry_run, yes } => handlers::handle_setup(dry_run, yes, config, quiet),
        Commands::Menu => menu::run_menu(config, quiet),
        Commands::About => handlers::handle_about(),
    }
}
