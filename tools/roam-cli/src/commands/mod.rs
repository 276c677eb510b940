//! CLI command implementations.

pub mod config;
pub mod export;
pub mod rank;
pub mod slug;

use clap::{Args, Subcommand};

/// Arguments for the rank command.
#[derive(Args)]
pub struct RankArgs {
    /// JSON file with `items`, and optionally `ratings` and `bookings`.
    #[arg(short, long)]
    pub input: String,

    /// Viewer latitude in degrees.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Viewer longitude in degrees.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Override the proximity band width (km).
    #[arg(long)]
    pub band_width: Option<f64>,

    /// Show only the first N listings.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the slug command.
#[derive(Args)]
pub struct SlugArgs {
    #[command(subcommand)]
    pub command: SlugCommand,
}

#[derive(Subcommand)]
pub enum SlugCommand {
    /// Generate a slug from a name and location.
    Generate {
        /// Listing name.
        name: String,
        /// Listing location.
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Build a detail path for a listing.
    Path {
        /// Listing kind (hotel, adventure, trip, event).
        kind: String,
        /// Listing id.
        id: String,
        /// Listing name.
        name: String,
        /// Listing location.
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Recover a listing id from a path segment.
    Extract {
        /// Path segment, or a full detail path.
        segment: String,
    },
}

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// JSON file with an array of bookings.
    #[arg(short, long)]
    pub input: String,

    /// Output file path (default: derived from the listing name and date).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Listing name used for the default file name.
    #[arg(long)]
    pub listing: Option<String>,

    /// Write CSV to stdout instead of a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Overwrite without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
