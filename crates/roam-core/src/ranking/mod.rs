//! Display ordering for listings.
//!
//! Listings are ordered by a cascade of tie-break tiers (see [`tiers`]):
//!
//! 1. Flexible or custom-date listings first
//! 2. Listings with tickets left before sold-out ones
//! 3. Nearby listings first, rating deciding within a distance band
//! 4. Higher average rating first
//! 5. More reviews first
//!
//! Tiers 2 and 3 only take part when booking stats, or a viewer position
//! and distance function, are supplied. The sort is stable, so listings that
//! tie on every tier keep their input order.
//!
//! Because tier 2 only applies to pairs that both track tickets, the
//! cascade is not transitive for every input (a sold-out listing can beat an
//! untracked one on distance, which beats an open one, which beats the
//! sold-out one). The result is still deterministic: the same input always
//! yields the same order.

pub mod tiers;

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::{BookingStats, RatedItem, RatingIndex};
use crate::config::{default_band_width, RankingConfig};
use crate::geo::{DistanceFn, Position};

use tiers::Candidate;

/// Inputs the ranking reads besides the listings themselves.
#[derive(Clone, Copy)]
pub struct RankContext<'a> {
    pub ratings: &'a RatingIndex,
    pub position: Option<Position>,
    pub distance: Option<&'a dyn DistanceFn>,
    pub bookings: Option<&'a BookingStats>,
    pub band_width: f64,
}

impl<'a> RankContext<'a> {
    /// Context with ratings only; no proximity or availability tiers.
    pub fn new(ratings: &'a RatingIndex) -> Self {
        Self {
            ratings,
            position: None,
            distance: None,
            bookings: None,
            band_width: default_band_width(),
        }
    }

    pub fn with_proximity(mut self, position: Position, distance: &'a dyn DistanceFn) -> Self {
        self.position = Some(position);
        self.distance = Some(distance);
        self
    }

    pub fn with_bookings(mut self, bookings: &'a BookingStats) -> Self {
        self.bookings = Some(bookings);
        self
    }

    pub fn with_band_width(mut self, band_width: f64) -> Self {
        self.band_width = band_width;
        self
    }

    fn effective_band_width(&self) -> f64 {
        if self.band_width.is_finite() && self.band_width > 0.0 {
            self.band_width
        } else {
            default_band_width()
        }
    }

    fn candidate<'i>(&self, item: &'i RatedItem) -> Candidate<'i> {
        let distance = match (self.position, self.distance, item.coordinates()) {
            (Some(viewer), Some(distance_fn), Some(at)) => {
                Some(distance_fn.distance(viewer, at)).filter(|d| !d.is_nan())
            }
            _ => None,
        };

        Candidate {
            item,
            rating: self.ratings.get(&item.id),
            remaining: self.bookings.and_then(|stats| stats.remaining(item)),
            distance,
        }
    }
}

/// Order `items` for display.
///
/// Returns a new vector holding exactly the input items; `items` is left
/// untouched.
pub fn rank(items: &[RatedItem], ctx: &RankContext<'_>) -> Vec<RatedItem> {
    let band_width = ctx.effective_band_width();

    debug!(
        items = items.len(),
        proximity = ctx.position.is_some() && ctx.distance.is_some(),
        availability = ctx.bookings.is_some(),
        band_width,
        "ranking listings"
    );

    let candidates: Vec<Candidate<'_>> = items.iter().map(|item| ctx.candidate(item)).collect();
    let sorted = merge_sort(&candidates, &|a, b| tiers::compare(a, b, band_width));

    sorted.into_iter().map(|c| c.item.clone()).collect()
}

/// Stable top-down merge sort.
///
/// `slice::sort_by` may panic when the comparison is not a total order,
/// which the tier cascade does not guarantee.
fn merge_sort<T: Copy>(items: &[T], compare: &impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    let left = merge_sort(left, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // right wins only when strictly smaller, so ties keep input order
        if compare(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Owned ranking setup for callers that rank repeatedly.
pub struct Ranker {
    ratings: RatingIndex,
    position: Option<Position>,
    distance: Option<Box<dyn DistanceFn + Send + Sync>>,
    bookings: Option<BookingStats>,
    band_width: f64,
}

impl Ranker {
    pub fn new(ratings: RatingIndex) -> Self {
        Self {
            ratings,
            position: None,
            distance: None,
            bookings: None,
            band_width: default_band_width(),
        }
    }

    /// Apply ranking tunables from config.
    pub fn with_config(mut self, config: &RankingConfig) -> Self {
        self.band_width = config.band_width;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_distance(mut self, distance: impl DistanceFn + Send + Sync + 'static) -> Self {
        self.distance = Some(Box::new(distance));
        self
    }

    pub fn with_bookings(mut self, bookings: BookingStats) -> Self {
        self.bookings = Some(bookings);
        self
    }

    pub fn with_band_width(mut self, band_width: f64) -> Self {
        self.band_width = band_width;
        self
    }

    /// Borrowed context over this ranker's data.
    pub fn context(&self) -> RankContext<'_> {
        RankContext {
            ratings: &self.ratings,
            position: self.position,
            distance: self
                .distance
                .as_deref()
                .map(|d| d as &dyn DistanceFn),
            bookings: self.bookings.as_ref(),
            band_width: self.band_width,
        }
    }

    pub fn rank(&self, items: &[RatedItem]) -> Vec<RatedItem> {
        rank(items, &self.context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RatingSummary;
    use crate::geo::Haversine;

    fn ids(items: &[RatedItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    /// Distance along the equator in degrees of longitude, for readable fixtures.
    fn lon_distance(a: Position, b: Position) -> f64 {
        (a.longitude - b.longitude).abs()
    }

    #[test]
    fn test_rank_by_rating_then_count() {
        let items = vec![RatedItem::new("a"), RatedItem::new("b"), RatedItem::new("c")];
        let ratings: RatingIndex = vec![
            ("a", RatingSummary::new(4.0, 10)),
            ("b", RatingSummary::new(4.8, 2)),
            ("c", RatingSummary::new(4.0, 30)),
        ]
        .into_iter()
        .collect();

        let ranked = rank(&items, &RankContext::new(&ratings));
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_unrated_items_sort_last_and_keep_order() {
        let items = vec![RatedItem::new("x"), RatedItem::new("rated"), RatedItem::new("y")];
        let ratings: RatingIndex = vec![("rated", RatingSummary::new(1.0, 1))].into_iter().collect();

        let ranked = rank(&items, &RankContext::new(&ratings));
        assert_eq!(ids(&ranked), vec!["rated", "x", "y"]);
    }

    #[test]
    fn test_flexible_beats_rating() {
        let items = vec![RatedItem::new("fixed"), RatedItem::new("flex").with_flexible_date()];
        let ratings: RatingIndex = vec![("fixed", RatingSummary::new(5.0, 100))].into_iter().collect();

        let ranked = rank(&items, &RankContext::new(&ratings));
        assert_eq!(ids(&ranked), vec!["flex", "fixed"]);
    }

    #[test]
    fn test_bookings_ignored_without_stats() {
        let items = vec![
            RatedItem::new("a").with_tickets(0),
            RatedItem::new("b").with_tickets(10),
        ];
        let ratings: RatingIndex = vec![("a", RatingSummary::new(5.0, 1))].into_iter().collect();

        let ranked = rank(&items, &RankContext::new(&ratings));
        assert_eq!(ids(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_proximity_needs_position_and_distance() {
        let items = vec![
            RatedItem::new("far").with_coordinates(0.0, 50.0),
            RatedItem::new("near").with_coordinates(0.0, 1.0),
        ];
        let ratings = RatingIndex::new();

        let ranked = rank(&items, &RankContext::new(&ratings));
        assert_eq!(ids(&ranked), vec!["far", "near"]);

        let ctx = RankContext::new(&ratings).with_proximity(Position::new(0.0, 0.0), &lon_distance);
        let ranked = rank(&items, &ctx);
        assert_eq!(ids(&ranked), vec!["near", "far"]);
    }

    #[test]
    fn test_nan_distance_counts_as_unlocated() {
        let items = vec![
            RatedItem::new("nan").with_coordinates(0.0, f64::NAN),
            RatedItem::new("ok").with_coordinates(0.0, 30.0),
        ];
        let ratings = RatingIndex::new();
        let ctx = RankContext::new(&ratings).with_proximity(Position::new(0.0, 0.0), &lon_distance);

        assert_eq!(ids(&rank(&items, &ctx)), vec!["ok", "nan"]);
    }

    #[test]
    fn test_custom_band_width() {
        let items = vec![
            RatedItem::new("close").with_coordinates(0.0, 4.0),
            RatedItem::new("good").with_coordinates(0.0, 14.0),
        ];
        let ratings: RatingIndex = vec![("good", RatingSummary::new(5.0, 5))].into_iter().collect();

        let ctx = RankContext::new(&ratings).with_proximity(Position::new(0.0, 0.0), &lon_distance);
        assert_eq!(ids(&rank(&items, &ctx)), vec!["close", "good"]);

        let ctx = ctx.with_band_width(20.0);
        assert_eq!(ids(&rank(&items, &ctx)), vec!["good", "close"]);
    }

    #[test]
    fn test_invalid_band_width_uses_default() {
        let ratings = RatingIndex::new();
        let ctx = RankContext::new(&ratings).with_band_width(-1.0);
        assert_eq!(ctx.effective_band_width(), 10.0);
    }

    #[test]
    fn test_input_untouched() {
        let items = vec![RatedItem::new("a"), RatedItem::new("b").with_flexible_date()];
        let before = items.clone();
        let ratings = RatingIndex::new();

        let _ = rank(&items, &RankContext::new(&ratings));
        assert_eq!(items, before);
    }

    #[test]
    fn test_ranker_builder() {
        let ratings: RatingIndex = vec![("b", RatingSummary::new(3.0, 1))].into_iter().collect();
        let mut bookings = BookingStats::new();
        bookings.insert("b", 4);

        let ranker = Ranker::new(ratings)
            .with_position(Position::new(-1.29, 36.82))
            .with_distance(Haversine)
            .with_bookings(bookings)
            .with_config(&RankingConfig::default());

        let items = vec![
            RatedItem::new("a").with_tickets(2),
            RatedItem::new("b").with_tickets(4),
        ];
        assert_eq!(ids(&ranker.rank(&items)), vec!["a", "b"]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let sorted = merge_sort(&pairs, &|x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_cyclic_tiers_are_deterministic() {
        // t1 beats t2 on tickets, t2 beats h2 on band, h2 beats t1 on location
        let items = vec![
            RatedItem::new("t1").with_tickets(3),
            RatedItem::new("t2").with_tickets(5).with_coordinates(0.0, 8.0),
            RatedItem::new("h2").with_coordinates(0.0, 25.0),
        ];
        let ratings = RatingIndex::new();
        let mut bookings = BookingStats::new();
        bookings.insert("t2", 5);

        let ctx = RankContext::new(&ratings)
            .with_bookings(&bookings)
            .with_proximity(Position::new(0.0, 0.0), &lon_distance);

        let first = rank(&items, &ctx);
        let second = rank(&items, &ctx);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let ratings = RatingIndex::new();
        assert!(rank(&[], &RankContext::new(&ratings)).is_empty());
    }
}
