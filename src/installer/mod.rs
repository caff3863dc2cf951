//! # Install Driver
//!
//! Takes the tools matched by a selection and runs each record's install
//! steps in order through the host shell. Steps of a single tool are
//! fail-fast; tools of a batch are isolated from each other, so one broken
//! install does not stop the rest of an `install all` run.

pub mod runner;

pub use runner::{CommandRunner, ShellRunner, StepStatus};

use crate::catalogue::{Catalogue, ToolRecord};
use crate::error::Result;
use crate::selection::Selection;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

/// Per-tool result of an install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every step exited 0
    Success,
    /// A step exited non-zero; later steps of this tool did not run
    Failed(i32),
    /// Nothing was executed for this tool
    Skipped(String),
}

/// One tool's entry in the batch report
#[derive(Debug, Clone)]
pub struct ToolReport {
    pub name: String,
    pub outcome: InstallOutcome,
}

/// Results for a whole install run, in attempt order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub reports: Vec<ToolReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == InstallOutcome::Success)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, InstallOutcome::Failed(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, InstallOutcome::Skipped(_)))
            .count()
    }

    /// Exit code of the last failed external command, if any failed.
    pub fn last_failure_code(&self) -> Option<i32> {
        self.reports.iter().rev().find_map(|r| match r.outcome {
            InstallOutcome::Failed(code) => Some(code),
            _ => None,
        })
    }
}

/// Knobs for one install run
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Print the steps without spawning anything
    pub dry_run: bool,
    /// Keep going with the remaining tools after one fails
    pub continue_on_failure: bool,
    /// Shell used to execute steps
    pub shell: String,
    /// Suppress the progress bar (quiet mode, tests)
    pub no_progress: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            continue_on_failure: true,
            shell: "sh".to_string(),
            no_progress: false,
        }
    }
}

/// The catalogue-driven batch installer
pub struct Installer<'a, R: CommandRunner> {
    runner: &'a R,
    options: InstallOptions,
}

impl<'a, R: CommandRunner> Installer<'a, R> {
    pub fn new(runner: &'a R, options: InstallOptions) -> Self {
        Self { runner, options }
    }

    /// Install everything the selection matches, in catalogue order.
    ///
    /// Resolution happens before anything is spawned, so an unknown
    /// selection never launches a subprocess.
    pub fn install(&self, selection: &Selection, catalogue: &Catalogue) -> Result<BatchReport> {
        let matched = selection.resolve(catalogue)?;
        Ok(self.run_batch(&matched))
    }

    /// Run the catalogue's environment prerequisite steps.
    pub fn setup(&self, catalogue: &Catalogue) -> BatchReport {
        let record = ToolRecord {
            name: "prerequisites".to_string(),
            category: "setup".to_string(),
            homepage: None,
            description: Some("package index refresh, git, curl".to_string()),
            steps: catalogue.prerequisites().to_vec(),
        };
        self.run_batch(&[&record])
    }

    fn run_batch(&self, tools: &[&ToolRecord]) -> BatchReport {
        let mut report = BatchReport::default();
        let progress = self.batch_progress(tools.len());
        let mut abort_remainder = false;

        for record in tools {
            if let Some(bar) = &progress {
                bar.set_message(record.name.clone());
            }

            let outcome = if abort_remainder {
                InstallOutcome::Skipped("aborted after earlier failure".to_string())
            } else {
                self.install_tool(record)
            };

            match &outcome {
                InstallOutcome::Success => {
                    info!("installed {}", record.name);
                    println!("{} {} installed", "✅".green(), record.name.bold());
                }
                InstallOutcome::Failed(code) => {
                    warn!("install of {} failed with exit code {}", record.name, code);
                    println!(
                        "{} {} failed (exit code {})",
                        "❌".red(),
                        record.name.bold(),
                        code
                    );
                    if !self.options.continue_on_failure {
                        abort_remainder = true;
                    }
                }
                InstallOutcome::Skipped(reason) => {
                    println!("{} {} skipped: {}", "⏭".yellow(), record.name.bold(), reason);
                }
            }

            report.reports.push(ToolReport {
                name: record.name.clone(),
                outcome,
            });
            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }
        report
    }

    /// Run one tool's steps in order, stopping at the first failure.
    fn install_tool(&self, record: &ToolRecord) -> InstallOutcome {
        if self.options.dry_run {
            println!("\n📦 {} (dry run)", record.name.bold());
            for step in &record.steps {
                println!("   $ {}", step.dimmed());
            }
            return InstallOutcome::Skipped("dry run".to_string());
        }

        println!("\n📦 Installing {}...", record.name.bold());

        for (position, step) in record.steps.iter().enumerate() {
            println!("   $ {}", step.dimmed());
            match self.runner.run(&self.options.shell, step) {
                Ok(StepStatus::Success) => {}
                Ok(StepStatus::Failed(code)) => {
                    warn!(
                        "step {}/{} of {} exited with code {}",
                        position + 1,
                        record.steps.len(),
                        record.name,
                        code
                    );
                    return InstallOutcome::Failed(code);
                }
                Ok(StepStatus::Interrupted) => {
                    warn!("step {}/{} of {} was interrupted", position + 1, record.steps.len(), record.name);
                    // Conventional exit code for death-by-SIGINT
                    return InstallOutcome::Failed(130);
                }
                Err(e) => {
                    warn!(
                        "step {}/{} of {} could not be spawned: {}",
                        position + 1,
                        record.steps.len(),
                        record.name,
                        e
                    );
                    // Shell convention for a command that could not run;
                    // earlier steps may already have executed, so this is a
                    // failure, not a skip
                    return InstallOutcome::Failed(127);
                }
            }
        }

        InstallOutcome::Success
    }

    fn batch_progress(&self, total: usize) -> Option<ProgressBar> {
        if self.options.no_progress || self.options.dry_run || total < 2 {
            return None;
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("🛠  {msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("▰▱"),
        );
        Some(bar)
    }
}

#[cfg(test)]
mod tests {
    use super::runner::testing::RecordingRunner;
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::from_toml(
            r#"
                [prerequisites]
                steps = ["apt-get update"]

                [[tools]]
                name = "nmap"
                category = "information_gathering"
                steps = ["apt install nmap"]

                [[tools]]
                name = "sqlmap"
                category = "exploitation"
                steps = ["git clone sqlmap-repo"]

                [[tools]]
                name = "wifite"
                category = "wireless"
                steps = ["git clone wifite-repo", "pip3 install -r wifite/requirements.txt"]
            "#,
        )
        .unwrap()
    }

    fn options() -> InstallOptions {
        InstallOptions {
            no_progress: true,
            ..InstallOptions::default()
        }
    }

    #[test]
    fn install_all_attempts_every_tool_in_order() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new();
        let installer = Installer::new(&runner, options());

        let report = installer.install(&Selection::All, &catalogue).unwrap();

        let names: Vec<_> = report.reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["nmap", "sqlmap", "wifite"]);
        assert_eq!(report.succeeded(), 3);
        assert_eq!(
            runner.executed.borrow().as_slice(),
            [
                "apt install nmap",
                "git clone sqlmap-repo",
                "git clone wifite-repo",
                "pip3 install -r wifite/requirements.txt",
            ]
        );
    }

    #[test]
    fn failed_step_stops_that_tool_but_not_the_batch() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new().failing_on("git clone wifite-repo", 128);
        let installer = Installer::new(&runner, options());

        let report = installer.install(&Selection::All, &catalogue).unwrap();

        assert_eq!(report.reports[2].outcome, InstallOutcome::Failed(128));
        // The second wifite step never ran
        assert!(
            !runner
                .executed
                .borrow()
                .contains(&"pip3 install -r wifite/requirements.txt".to_string())
        );
        // Earlier tools were unaffected
        assert_eq!(report.reports[0].outcome, InstallOutcome::Success);
        assert_eq!(report.reports[1].outcome, InstallOutcome::Success);
    }

    #[test]
    fn first_tool_failure_does_not_abort_later_tools() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new().failing_on("apt install nmap", 1);
        let installer = Installer::new(&runner, options());

        let report = installer.install(&Selection::All, &catalogue).unwrap();

        assert_eq!(report.reports[0].outcome, InstallOutcome::Failed(1));
        assert_eq!(report.reports[1].outcome, InstallOutcome::Success);
        assert_eq!(report.last_failure_code(), Some(1));
    }

    #[test]
    fn abort_on_failure_skips_the_remainder() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new().failing_on("apt install nmap", 2);
        let installer = Installer::new(
            &runner,
            InstallOptions {
                continue_on_failure: false,
                no_progress: true,
                ..InstallOptions::default()
            },
        );

        let report = installer.install(&Selection::All, &catalogue).unwrap();

        assert!(matches!(report.reports[1].outcome, InstallOutcome::Skipped(_)));
        assert!(matches!(report.reports[2].outcome, InstallOutcome::Skipped(_)));
        assert_eq!(runner.executed.borrow().len(), 1);
    }

    #[test]
    fn spawn_failure_mid_tool_is_a_failure_not_a_skip() {
        let catalogue = catalogue();
        let runner =
            RecordingRunner::new().erroring_on("pip3 install -r wifite/requirements.txt");
        let installer = Installer::new(&runner, options());

        let report = installer.install(&Selection::All, &catalogue).unwrap();

        // The first wifite step already ran, so the tool is failed, and the
        // failure surfaces in the batch exit code
        assert_eq!(report.reports[2].outcome, InstallOutcome::Failed(127));
        assert_eq!(report.last_failure_code(), Some(127));
        assert!(
            runner
                .executed
                .borrow()
                .contains(&"git clone wifite-repo".to_string())
        );
    }

    #[test]
    fn unknown_selection_launches_no_subprocess() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new();
        let installer = Installer::new(&runner, options());

        let result = installer.install(&Selection::Index(99), &catalogue);

        assert!(result.is_err());
        assert!(runner.executed.borrow().is_empty());
    }

    #[test]
    fn dry_run_spawns_nothing_and_reports_skipped() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new();
        let installer = Installer::new(
            &runner,
            InstallOptions {
                dry_run: true,
                no_progress: true,
                ..InstallOptions::default()
            },
        );

        let report = installer.install(&Selection::All, &catalogue).unwrap();

        assert!(runner.executed.borrow().is_empty());
        assert_eq!(report.skipped(), 3);
    }

    #[test]
    fn setup_runs_prerequisite_steps() {
        let catalogue = catalogue();
        let runner = RecordingRunner::new();
        let installer = Installer::new(&runner, options());

        let report = installer.setup(&catalogue);

        assert_eq!(report.succeeded(), 1);
        assert_eq!(runner.executed.borrow().as_slice(), ["apt-get update"]);
    }
}
