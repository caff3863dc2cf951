use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Install behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Shell used to execute install steps
    pub shell: String,
    /// Skip confirmation prompts
    pub assume_yes: bool,
    /// Keep installing the remaining tools of a batch after one fails
    pub continue_on_failure: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            assume_yes: false,
            continue_on_failure: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
