use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::error::Result;
use crate::installer::{InstallOptions, Installer, ShellRunner};
use crate::selection::Selection;
use colored::Colorize;
use inquire::Confirm;
use std::process;

pub fn handle_install(
    target: Option<String>,
    category: Option<String>,
    dry_run: bool,
    yes: bool,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let catalogue = Catalogue::shared()?;

    let selection = match (target, category) {
        (_, Some(category)) => Selection::Category(category),
        (Some(target), None) => Selection::parse(&target),
        // clap enforces one of the two
        (None, None) => unreachable!("install requires a target or --category"),
    };

    // Resolve up front so nothing is spawned for an unknown selection
    let matched = selection.resolve(catalogue)?;

    if !dry_run && !yes && !config.install.assume_yes {
        let prompt = format!("Install {} tool(s)?", matched.len());
        let confirmed = Confirm::new(&prompt).with_default(false).prompt().unwrap_or(false);
        if !confirmed {
            println!("Installation cancelled.");
            return Ok(());
        }
    }

    let options = InstallOptions {
        dry_run,
        continue_on_failure: config.install.continue_on_failure,
        shell: config.install.shell.clone(),
        no_progress: quiet,
    };
    let runner = ShellRunner;
    let installer = Installer::new(&runner, options);

    let report = installer.install(&selection, catalogue)?;

    println!(
        "\n{} {} installed, {} failed, {} skipped",
        "Summary:".bold(),
        report.succeeded().to_string().green(),
        report.failed().to_string().red(),
        report.skipped().to_string().yellow(),
    );

    // Non-interactive contract: propagate the last failed step's exit code
    if let Some(code) = report.last_failure_code() {
        process::exit(code);
    }

    Ok(())
}
