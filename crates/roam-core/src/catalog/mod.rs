//! Listing catalog module.
//!
//! Contains the listing shape the ranking consumes, plus the rating and
//! booking aggregates keyed by listing id.

mod booking;
mod listing;
mod rating;

pub use booking::BookingStats;
pub use listing::{ListingKind, RatedItem};
pub use rating::{RatingIndex, RatingSummary};
