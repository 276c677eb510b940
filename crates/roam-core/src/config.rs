//! Tunables for ranking, slugs and exports.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::RoamError;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoamConfig {
    /// Ranking configuration.
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Slug configuration.
    #[serde(default)]
    pub slug: SlugConfig,

    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

impl RoamConfig {
    /// Load config from a TOML or JSON file (chosen by extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RoamError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config: RoamConfig = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RoamError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), RoamError> {
        if !self.ranking.band_width.is_finite() || self.ranking.band_width <= 0.0 {
            return Err(RoamError::InvalidConfig(format!(
                "ranking.band_width must be a positive number, got {}",
                self.ranking.band_width
            )));
        }
        if self.slug.max_len == 0 {
            return Err(RoamError::InvalidConfig("slug.max_len must be at least 1".to_string()));
        }
        if self.slug.fragment_len == 0 {
            return Err(RoamError::InvalidConfig(
                "slug.fragment_len must be at least 1".to_string(),
            ));
        }
        if self.export.date_format.trim().is_empty() {
            return Err(RoamError::InvalidConfig(
                "export.date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.export.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(RoamError::InvalidConfig(format!(
                "export.date_format is not a valid format string: {}",
                self.export.date_format
            )));
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Ranking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Width of a proximity band, in distance-function units.
    #[serde(default = "default_band_width")]
    pub band_width: f64,
}

pub(crate) fn default_band_width() -> f64 {
    10.0
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            band_width: default_band_width(),
        }
    }
}

/// Slug configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugConfig {
    /// Maximum slug length in characters, before the id suffix.
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Number of id characters appended to detail paths.
    #[serde(default = "default_fragment_len")]
    pub fragment_len: usize,
}

pub(crate) fn default_max_len() -> usize {
    100
}

pub(crate) fn default_fragment_len() -> usize {
    8
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            fragment_len: default_fragment_len(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// `chrono` format string for dates in exported files.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// Generate a commented default config file.
pub fn generate_default_config() -> String {
    r#"# Roam configuration

[ranking]
# Listings whose distance from the viewer falls in the same band are ordered
# by rating first. Units follow the distance function (kilometres by default).
band_width = 10.0

[slug]
max_len = 100
fragment_len = 8

[export]
date_format = "%Y-%m-%d"
"#
    .to_string()
}
