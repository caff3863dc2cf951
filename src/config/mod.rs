pub mod types;

pub use types::Config;

use crate::error::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".armory.toml";

/// Get the global config file path (~/.armory.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (cwd/.armory.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
/// Checks an explicit path first, then the local config, then the global one.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return parse_file(path);
    }

    if let Ok(cwd) = std::env::current_dir() {
        let local = local_config_path(&cwd);
        if local.exists() {
            return Ok(parse_or_default(&local));
        }
    }

    if let Some(global) = global_config_path()
        && global.exists()
    {
        return Ok(parse_or_default(&global));
    }

    Ok(Config::default())
}

fn parse_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)
        .map_err(|e| crate::error::ConfigError::ParsingFailed(e.to_string()))?;
    Ok(config)
}

/// Parse a discovered config file, falling back to defaults on bad content.
fn parse_or_default(path: &Path) -> Config {
    match parse_file(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".armory.toml");
        fs::write(
            &path,
            r#"
                [install]
                shell = "bash"
                assume_yes = true
                continue_on_failure = false
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.install.shell, "bash");
        assert!(config.install.assume_yes);
        assert!(!config.install.continue_on_failure);
        assert!(config.output.color);
    }

    #[test]
    fn partial_config_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".armory.toml");
        fs::write(&path, "[install]\nshell = \"bash\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.install.shell, "bash");
        assert!(!config.install.assume_yes);
        assert!(config.install.continue_on_failure);
    }

    #[test]
    fn malformed_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".armory.toml");
        fs::write(&path, "not valid toml [").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn defaults_apply_when_nothing_is_found() {
        let config = Config::default();
        assert_eq!(config.install.shell, "sh");
        assert!(!config.install.assume_yes);
        assert!(config.install.continue_on_failure);
    }
}
