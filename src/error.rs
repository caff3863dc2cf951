//! Error types for the Armory CLI.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArmoryError>;

/// Top-level error for the CLI
#[derive(Debug, Error)]
pub enum ArmoryError {
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("Installation error: {0}")]
    Install(#[from] InstallError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed catalogue data, fatal at startup
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("malformed catalogue: entry {index} has no name")]
    MissingName { index: usize },

    #[error("malformed catalogue: tool '{name}' has zero install steps")]
    EmptySteps { name: String },

    #[error("malformed catalogue: duplicate tool name '{name}'")]
    DuplicateName { name: String },

    #[error("malformed catalogue: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure while running a tool's install steps, reported per tool.
///
/// A step that runs and exits non-zero is not an error at this level; the
/// driver records it as a `Failed(exit_code)` outcome for that tool.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to spawn install step: {0}")]
    Spawn(String),
}

/// User input that matches nothing in the catalogue
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("unknown selection '{0}': no catalogue entry matches")]
    UnknownSelection(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    ParsingFailed(String),
}
