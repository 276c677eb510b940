//! Roam error types.

use thiserror::Error;

/// Errors raised by the parsing and configuration surfaces.
///
/// Ranking and slug operations never fail; missing data falls back to
/// neutral defaults instead.
#[derive(Error, Debug)]
pub enum RoamError {
    /// Listing kind not recognised.
    #[error("Unknown listing kind: {0}")]
    UnknownListingKind(String),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// TOML write error.
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
