use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::error::Result;
use crate::installer::{BatchReport, InstallOptions, Installer, ShellRunner};
use colored::Colorize;
use inquire::Confirm;
use std::process;

/// CLI entry point: a failed prerequisite step exits the process with that
/// step's code. The menu calls [`run_setup`] directly and keeps looping.
pub fn handle_setup(dry_run: bool, yes: bool, config: &Config, quiet: bool) -> Result<()> {
    if let Some(report) = run_setup(dry_run, yes, config, quiet)?
        && let Some(code) = report.last_failure_code()
    {
        process::exit(code);
    }
    Ok(())
}

/// Run the catalogue's prerequisite steps (package index refresh, git, curl).
///
/// Returns the batch report (`None` when there was nothing to do or the user
/// declined); failures are reported but never terminate the process here.
pub fn run_setup(
    dry_run: bool,
    yes: bool,
    config: &Config,
    quiet: bool,
) -> Result<Option<BatchReport>> {
    let catalogue = Catalogue::shared()?;

    if catalogue.prerequisites().is_empty() {
        println!("Nothing to set up: the catalogue declares no prerequisites.");
        return Ok(None);
    }

    if !dry_run && !yes && !config.install.assume_yes {
        let confirmed = Confirm::new("Install environment prerequisites?")
            .with_default(false)
            .prompt()
            .unwrap_or(false);
        if !confirmed {
            println!("Setup cancelled.");
            return Ok(None);
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

    let report = installer.setup(catalogue);

    if let Some(code) = report.last_failure_code() {
        eprintln!("{} setup failed (exit code {})", "❌".red(), code);
    } else if !dry_run {
        println!("{} environment ready", "✅".green());
    }
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::InstallConfig;

    /// A failing prerequisite step must surface in the report, not kill the
    /// calling process; the interactive menu relies on regaining control.
    #[test]
    fn run_setup_returns_the_failure_report() {
        let config = Config {
            install: InstallConfig {
                // `false` ignores its arguments and exits 1, so no
                // prerequisite command actually runs
                shell: "false".to_string(),
                assume_yes: true,
                continue_on_failure: true,
            },
            ..Config::default()
        };

        let report = run_setup(false, true, &config, true).unwrap().unwrap();
        assert_eq!(report.last_failure_code(), Some(1));
    }
}
