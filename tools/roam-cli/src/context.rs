//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use roam_core::RoamConfig;
use tracing::debug;

use crate::output::Output;

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["roam.toml", ".roam.toml", "roam.json"];

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ROAM_CONFIG";

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded configuration (defaults when no file was found).
    pub config: RoamConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from `--config`, `ROAM_CONFIG`, or the nearest config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let explicit = config_path
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let (config, config_path) = match explicit {
            Some(path) => {
                let config = RoamConfig::load(&path)
                    .with_context(|| format!("Failed to load config file: {}", path.display()))?;
                (config, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => {
                    let config = RoamConfig::load(&path)
                        .with_context(|| format!("Failed to load config file: {}", path.display()))?;
                    (config, Some(path))
                }
                None => (RoamConfig::default(), None),
            },
        };

        debug!(config = ?config_path, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }
}

/// Find a config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("roam.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join("roam.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("roam.toml"), "").unwrap();
        std::fs::write(nested.join(".roam.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(nested.join(".roam.toml")));
    }
}
