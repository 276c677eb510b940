//! Listing ranking and slug routing for the Roam travel marketplace.
//!
//! This crate holds the pure, synchronous pieces of the marketplace that sit
//! between the data-access layer and the presentation layer:
//!
//! - **Catalog**: Listings (hotels, adventure places, trips, events), rating
//!   summaries, booked-slot counts
//! - **Ranking**: Availability- and proximity-aware display order for listings
//! - **Slug**: Human-readable detail paths and best-effort id recovery
//! - **Export**: Booking tables as CSV for hosts
//!
//! # Example
//!
//! ```rust,ignore
//! use roam_core::prelude::*;
//!
//! let items: Vec<RatedItem> = fetch_listings();
//! let ratings = RatingIndex::from_reviews(fetch_reviews());
//!
//! let ranked = Ranker::new(ratings)
//!     .with_position(Position::new(-4.04, 39.66))
//!     .with_distance(Haversine)
//!     .rank(&items);
//!
//! let path = create_detail_path("hotel", ranked[0].id.as_str(), &ranked[0].name, None);
//! assert_eq!(extract_id_from_slug(path.rsplit('/').next().unwrap()).len(), 8);
//! ```

pub mod config;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod export;
pub mod geo;
pub mod ranking;
pub mod slug;

pub use config::RoamConfig;
pub use error::RoamError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ExportConfig, RankingConfig, RoamConfig, SlugConfig};
    pub use crate::error::RoamError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{BookingStats, ListingKind, RatedItem, RatingIndex, RatingSummary};

    // Geo
    pub use crate::geo::{DistanceFn, Haversine, Position};

    // Ranking
    pub use crate::ranking::{rank, RankContext, Ranker};

    // Slug
    pub use crate::slug::{
        create_detail_path, detail_path_for, extract_id_from_slug, generate_slug, SlugCodec,
    };

    // Export
    pub use crate::export::{export_bookings_csv, export_file_name, BookingRecord};
}
