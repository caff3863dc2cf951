use crate::error::{InstallError, Result};
use log::debug;
use std::process::{Command, Stdio};

/// Result of one install step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The command exited with status 0
    Success,
    /// The command exited with a non-zero code
    Failed(i32),
    /// The command was terminated by a signal
    Interrupted,
}

/// Seam between the install driver and the host system.
///
/// The production implementation shells out; tests substitute a recording
/// fake so batch semantics can be asserted without touching the machine.
pub trait CommandRunner {
    fn run(&self, shell: &str, command: &str) -> Result<StepStatus>;
}

/// Runs install steps through the host shell, streaming output to the user
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, shell: &str, command: &str) -> Result<StepStatus> {
        debug!("executing install step: {} -c {:?}", shell, command);

        let status = Command::new(shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| InstallError::Spawn(e.to_string()))?;

        if status.success() {
            Ok(StepStatus::Success)
        } else {
            match status.code() {
                Some(code) => Ok(StepStatus::Failed(code)),
                // Killed by a signal (e.g. the user hit Ctrl-C mid-step)
                None => Ok(StepStatus::Interrupted),
            }
        }
    }
}
