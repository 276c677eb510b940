//! Booked-slot counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::RatedItem;
use crate::ids::ListingId;

/// Booked slots per listing, used to derive remaining availability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingStats {
    booked: HashMap<ListingId, i64>,
}

impl BookingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ListingId>, booked_slots: i64) {
        self.booked.insert(id.into(), booked_slots);
    }

    /// Record additional booked slots for a listing.
    pub fn add(&mut self, id: impl Into<ListingId>, slots: i64) {
        *self.booked.entry(id.into()).or_insert(0) += slots;
    }

    /// Booked slots, 0 when the listing has none recorded.
    pub fn booked(&self, id: &ListingId) -> i64 {
        self.booked.get(id).copied().unwrap_or(0)
    }

    /// Tickets left, or `None` when the listing doesn't track tickets.
    pub fn remaining(&self, item: &RatedItem) -> Option<i64> {
        item.available_tickets
            .map(|tickets| tickets - self.booked(&item.id))
    }

    /// No tickets left. Untracked listings are never sold out.
    pub fn is_sold_out(&self, item: &RatedItem) -> bool {
        self.remaining(item).map(|left| left <= 0).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.booked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty()
    }
}

impl<K: Into<ListingId>> FromIterator<(K, i64)> for BookingStats {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        let mut stats = Self::new();
        for (id, slots) in iter {
            stats.add(id, slots);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let stats: BookingStats = vec![("a", 5), ("b", 1)].into_iter().collect();

        let a = RatedItem::new("a").with_tickets(5);
        let b = RatedItem::new("b").with_tickets(3);
        let c = RatedItem::new("c").with_tickets(2);

        assert_eq!(stats.remaining(&a), Some(0));
        assert_eq!(stats.remaining(&b), Some(2));
        assert_eq!(stats.remaining(&c), Some(2));
        assert!(stats.is_sold_out(&a));
        assert!(!stats.is_sold_out(&b));
    }

    #[test]
    fn test_untracked_listing() {
        let stats = BookingStats::new();
        let item = RatedItem::new("x");
        assert_eq!(stats.remaining(&item), None);
        assert!(!stats.is_sold_out(&item));
    }

    #[test]
    fn test_add_accumulates() {
        let mut stats = BookingStats::new();
        stats.add("a", 2);
        stats.add("a", 3);
        assert_eq!(stats.booked(&"a".into()), 5);
        assert_eq!(stats.booked(&"b".into()), 0);
    }

    #[test]
    fn test_overbooked_is_sold_out() {
        let mut stats = BookingStats::new();
        stats.insert("a", 7);
        let a = RatedItem::new("a").with_tickets(5);
        assert_eq!(stats.remaining(&a), Some(-2));
        assert!(stats.is_sold_out(&a));
    }
}
