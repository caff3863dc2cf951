//! Interactive menu mirroring the classic numbered installer flow.
//!
//! Loops until the user exits. Cancellation (Esc / Ctrl-C at a prompt)
//! returns to the main menu rather than killing the process.

use crate::catalogue::{Catalogue, ToolRecord};
use crate::config::Config;
use crate::error::Result;
use crate::handlers;
use crate::installer::{InstallOptions, Installer, ShellRunner};
use crate::selection::Selection;
use colored::Colorize;
use inquire::{Confirm, InquireError, Select};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    InstallAll,
    PickTool,
    BrowseCategories,
    Setup,
    About,
    Exit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::InstallAll => "[0] Install all tools",
            MenuChoice::PickTool => "[1] Pick a tool to install",
            MenuChoice::BrowseCategories => "[2] Browse by category",
            MenuChoice::Setup => "[3] Environment setup",
            MenuChoice::About => "[4] About",
            MenuChoice::Exit => "[x] Exit",
        };
        write!(f, "{}", label)
    }
}

/// Wrapper for displaying tool options in the selection menu
struct ToolOption<'a> {
    index: usize,
    record: &'a ToolRecord,
}

impl fmt::Display for ToolOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.index,
            self.record.name.cyan(),
            format!("({})", self.record.category).dimmed()
        )
    }
}

pub fn run_menu(config: &Config, quiet: bool) -> Result<()> {
    let catalogue = Catalogue::shared()?;

    println!("🛡  {} v{}", "armory".bold(), env!("CARGO_PKG_VERSION"));
    println!("{} tools available\n", catalogue.len());

    loop {
        let choices = vec![
            MenuChoice::InstallAll,
            MenuChoice::PickTool,
            MenuChoice::BrowseCategories,
            MenuChoice::Setup,
            MenuChoice::About,
            MenuChoice::Exit,
        ];

        let choice = match Select::new("What do you want to do?", choices).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                println!("Bye.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("{} {}", "⚠".yellow(), e);
                continue;
            }
        };

        let result = match choice {
            MenuChoice::InstallAll => install(&Selection::All, catalogue, config, quiet),
            MenuChoice::PickTool => pick_tool(catalogue, config, quiet),
            MenuChoice::BrowseCategories => browse_categories(catalogue, config, quiet),
            MenuChoice::Setup => handlers::run_setup(false, false, config, quiet).map(|_| ()),
            MenuChoice::About => handlers::handle_about(),
            MenuChoice::Exit => {
                println!("Bye.");
                return Ok(());
            }
        };

        // Report and re-prompt; only a broken catalogue would be fatal here
        if let Err(e) = result {
            eprintln!("{} {}", "⚠".yellow(), e);
        }
        println!();
    }
}

fn pick_tool(catalogue: &Catalogue, config: &Config, quiet: bool) -> Result<()> {
    let options: Vec<ToolOption> = catalogue
        .iter()
        .enumerate()
        .map(|(index, record)| ToolOption { index, record })
        .collect();

    match Select::new("Which tool?", options).prompt() {
        Ok(option) => install(&Selection::Index(option.index), catalogue, config, quiet),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(()),
        Err(e) => {
            eprintln!("{} {}", "⚠".yellow(), e);
            Ok(())
        }
    }
}

fn browse_categories(catalogue: &Catalogue, config: &Config, quiet: bool) -> Result<()> {
    let categories: Vec<String> = catalogue
        .categories()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let category = match Select::new("Which category?", categories).prompt() {
        Ok(category) => category,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => return Ok(()),
        Err(e) => {
            eprintln!("{} {}", "⚠".yellow(), e);
            return Ok(());
        }
    };

    for record in catalogue.by_category(&category) {
        println!("  • {}", record.name);
    }

    let confirmed = Confirm::new(&format!("Install every {} tool?", category))
        .with_default(false)
        .prompt()
        .unwrap_or(false);
    if confirmed {
        return install(&Selection::Category(category), catalogue, config, quiet);
    }
    Ok(())
}

fn install(
    selection: &Selection,
    catalogue: &Catalogue,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let options = InstallOptions {
        dry_run: false,
        continue_on_failure: config.install.continue_on_failure,
        shell: config.install.shell.clone(),
        no_progress: quiet,
    };
    let runner = ShellRunner;
    let installer = Installer::new(&runner, options);

    let report = installer.install(selection, catalogue)?;
    println!(
        "\n{} {} installed, {} failed, {} skipped",
        "Summary:".bold(),
        report.succeeded().to_string().green(),
        report.failed().to_string().red(),
        report.skipped().to_string().yellow(),
    );
    Ok(())
}
