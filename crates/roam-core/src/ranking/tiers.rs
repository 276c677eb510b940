//! Tie-break tiers.
//!
//! Each tier looks at a pair of candidates and either decides their order or
//! returns `None` to defer to the next tier. [`compare`] chains them in
//! priority order.

use std::cmp::Ordering;

use crate::catalog::{RatedItem, RatingSummary};

/// Per-item facts resolved once before sorting.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub item: &'a RatedItem,
    pub rating: RatingSummary,
    /// Tickets left; `None` unless booking stats were supplied and the item
    /// tracks tickets.
    pub remaining: Option<i64>,
    /// Distance from the viewer; `None` unless a viewer position and distance
    /// function were supplied and the item has coordinates.
    pub distance: Option<f64>,
}

/// A partial comparator over two candidates.
pub type Tier = fn(&Candidate<'_>, &Candidate<'_>, f64) -> Option<Ordering>;

/// Tiers in priority order.
pub const TIERS: [Tier; 5] = [flexible_date, availability, proximity, rating, review_count];

/// Run the tiers left to right; the first opinion wins.
pub fn compare(a: &Candidate<'_>, b: &Candidate<'_>, band_width: f64) -> Ordering {
    TIERS
        .iter()
        .find_map(|tier| tier(a, b, band_width))
        .unwrap_or(Ordering::Equal)
}

fn decided(ordering: Ordering) -> Option<Ordering> {
    match ordering {
        Ordering::Equal => None,
        other => Some(other),
    }
}

/// Flexible or custom-date listings first.
pub fn flexible_date(a: &Candidate<'_>, b: &Candidate<'_>, _band_width: f64) -> Option<Ordering> {
    // true sorts first
    decided(b.item.is_flexible().cmp(&a.item.is_flexible()))
}

/// Listings with tickets left before sold-out ones.
///
/// Only decides when both sides track tickets and exactly one is sold out.
pub fn availability(a: &Candidate<'_>, b: &Candidate<'_>, _band_width: f64) -> Option<Ordering> {
    let (left_a, left_b) = (a.remaining?, b.remaining?);
    let (open_a, open_b) = (left_a > 0, left_b > 0);
    decided(open_b.cmp(&open_a))
}

/// Nearby listings first, with rating deciding inside a distance band.
///
/// Listings with a distance come before listings without. When both are in
/// the same band, rating then review count decide, and raw distance is the
/// last word. Different bands order by band.
pub fn proximity(a: &Candidate<'_>, b: &Candidate<'_>, band_width: f64) -> Option<Ordering> {
    let (dist_a, dist_b) = match (a.distance, b.distance) {
        (Some(da), Some(db)) => (da, db),
        (Some(_), None) => return Some(Ordering::Less),
        (None, Some(_)) => return Some(Ordering::Greater),
        (None, None) => return None,
    };

    let band_a = band(dist_a, band_width);
    let band_b = band(dist_b, band_width);

    if band_a != band_b {
        return decided(band_a.total_cmp(&band_b));
    }

    rating(a, b, band_width)
        .or_else(|| review_count(a, b, band_width))
        .or_else(|| dist_a.partial_cmp(&dist_b).and_then(decided))
}

fn band(distance: f64, band_width: f64) -> f64 {
    (distance / band_width).floor()
}

/// Higher average rating first.
pub fn rating(a: &Candidate<'_>, b: &Candidate<'_>, _band_width: f64) -> Option<Ordering> {
    b.rating
        .average
        .partial_cmp(&a.rating.average)
        .and_then(decided)
}

/// More reviews first.
pub fn review_count(a: &Candidate<'_>, b: &Candidate<'_>, _band_width: f64) -> Option<Ordering> {
    decided(b.rating.count.cmp(&a.rating.count))
}
