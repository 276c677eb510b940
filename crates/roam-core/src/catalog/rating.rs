//! Aggregate review ratings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::ListingId;

/// Average rating and number of reviews for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean score, one decimal place.
    #[serde(default)]
    pub average: f64,
    /// Number of reviews.
    #[serde(default)]
    pub count: u64,
}

impl RatingSummary {
    pub fn new(average: f64, count: u64) -> Self {
        Self { average, count }
    }

    /// Summarise raw review scores, rounding the mean to one decimal place.
    pub fn from_ratings(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Self {
            average: round_one_decimal(mean),
            count: scores.len() as u64,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rating summaries keyed by listing id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingIndex {
    summaries: HashMap<ListingId, RatingSummary>,
}

impl RatingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate `(listing, score)` pairs into per-listing summaries.
    pub fn from_reviews<I, K>(reviews: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<ListingId>,
    {
        let mut scores: HashMap<ListingId, Vec<f64>> = HashMap::new();
        for (id, score) in reviews {
            scores.entry(id.into()).or_default().push(score);
        }

        let summaries = scores
            .into_iter()
            .map(|(id, s)| (id, RatingSummary::from_ratings(&s)))
            .collect();

        Self { summaries }
    }

    pub fn insert(&mut self, id: impl Into<ListingId>, summary: RatingSummary) {
        self.summaries.insert(id.into(), summary);
    }

    /// Summary for `id`, or 0 / 0 when the listing has no reviews.
    pub fn get(&self, id: &ListingId) -> RatingSummary {
        self.summaries.get(id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl<K: Into<ListingId>> FromIterator<(K, RatingSummary)> for RatingIndex {
    fn from_iter<T: IntoIterator<Item = (K, RatingSummary)>>(iter: T) -> Self {
        Self {
            summaries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rounding() {
        let s = RatingSummary::from_ratings(&[5.0, 4.0, 4.0]);
        assert_eq!(s.average, 4.3);
        assert_eq!(s.count, 3);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(RatingSummary::from_ratings(&[]), RatingSummary::new(0.0, 0));
    }

    #[test]
    fn test_index_from_reviews() {
        let index = RatingIndex::from_reviews(vec![("a", 5.0), ("b", 2.0), ("a", 4.0)]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&"a".into()), RatingSummary::new(4.5, 2));
        assert_eq!(index.get(&"b".into()), RatingSummary::new(2.0, 1));
    }

    #[test]
    fn test_missing_listing_is_neutral() {
        let index = RatingIndex::new();
        assert_eq!(index.get(&"nope".into()), RatingSummary::default());
    }

    #[test]
    fn test_index_deserializes_from_map() {
        let index: RatingIndex =
            serde_json::from_str(r#"{"a": {"average": 4.2, "count": 7}, "b": {}}"#).unwrap();
        assert_eq!(index.get(&"a".into()), RatingSummary::new(4.2, 7));
        assert_eq!(index.get(&"b".into()), RatingSummary::default());
    }
}
