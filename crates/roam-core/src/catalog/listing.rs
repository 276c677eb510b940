//! Listing types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoamError;
use crate::geo::Position;
use crate::ids::ListingId;
use crate::slug;

/// Kind of bookable listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// Hotel or other accommodation.
    Hotel,
    /// Campsite or adventure place.
    Adventure,
    /// Guided trip.
    Trip,
    /// Ticketed event.
    Event,
}

impl ListingKind {
    /// Path segment used in detail URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Hotel => "hotel",
            ListingKind::Adventure => "adventure",
            ListingKind::Trip => "trip",
            ListingKind::Event => "event",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ListingKind::Hotel => "Hotel",
            ListingKind::Adventure => "Adventure Place",
            ListingKind::Trip => "Trip",
            ListingKind::Event => "Event",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingKind {
    type Err = RoamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hotel" | "hotels" => Ok(ListingKind::Hotel),
            "adventure" | "adventures" | "campsite" | "campsites" => Ok(ListingKind::Adventure),
            "trip" | "trips" => Ok(ListingKind::Trip),
            "event" | "events" => Ok(ListingKind::Event),
            _ => Err(RoamError::UnknownListingKind(s.to_string())),
        }
    }
}

/// A listing as seen by the ranking.
///
/// Every field except the id is optional on the wire; absent flags read as
/// "fixed dates" and absent coordinates drop the item out of proximity
/// ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub id: ListingId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ListingKind>,
    #[serde(default)]
    pub is_flexible_date: bool,
    #[serde(default)]
    pub is_custom_date: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_tickets: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl RatedItem {
    /// Create a bare item with only an id.
    pub fn new(id: impl Into<ListingId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location: None,
            kind: None,
            is_flexible_date: false,
            is_custom_date: false,
            available_tickets: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_kind(mut self, kind: ListingKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_flexible_date(mut self) -> Self {
        self.is_flexible_date = true;
        self
    }

    pub fn with_custom_date(mut self) -> Self {
        self.is_custom_date = true;
        self
    }

    pub fn with_tickets(mut self, tickets: i64) -> Self {
        self.available_tickets = Some(tickets);
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Not tied to fixed calendar dates.
    pub fn is_flexible(&self) -> bool {
        self.is_flexible_date || self.is_custom_date
    }

    /// Position, only when both coordinates are present.
    pub fn coordinates(&self) -> Option<Position> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Position::new(lat, lon)),
            _ => None,
        }
    }

    /// Detail page path, when the listing kind is known.
    pub fn detail_path(&self) -> Option<String> {
        self.kind.map(|kind| {
            slug::detail_path_for(kind, self.id.as_str(), &self.name, self.location.as_deref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("hotel".parse::<ListingKind>().unwrap(), ListingKind::Hotel);
        assert_eq!("Campsite".parse::<ListingKind>().unwrap(), ListingKind::Adventure);
        assert_eq!("events".parse::<ListingKind>().unwrap(), ListingKind::Event);
        assert!(matches!(
            "castle".parse::<ListingKind>(),
            Err(RoamError::UnknownListingKind(_))
        ));
    }

    #[test]
    fn test_flexible_flags() {
        assert!(!RatedItem::new("a").is_flexible());
        assert!(RatedItem::new("a").with_flexible_date().is_flexible());
        assert!(RatedItem::new("a").with_custom_date().is_flexible());
    }

    #[test]
    fn test_coordinates_need_both() {
        let mut item = RatedItem::new("a");
        item.latitude = Some(1.0);
        assert!(item.coordinates().is_none());

        let item = item.with_coordinates(1.0, 2.0);
        assert_eq!(item.coordinates(), Some(Position::new(1.0, 2.0)));
    }

    #[test]
    fn test_deserialize_sparse_item() {
        let item: RatedItem = serde_json::from_str(r#"{"id": "x1", "available_tickets": 4}"#).unwrap();
        assert_eq!(item.id.as_str(), "x1");
        assert_eq!(item.available_tickets, Some(4));
        assert!(!item.is_flexible());
        assert!(item.coordinates().is_none());
    }

    #[test]
    fn test_detail_path() {
        let item = RatedItem::new("abcdef1234567890")
            .with_name("Ocean View")
            .with_location("Mombasa")
            .with_kind(ListingKind::Hotel);
        assert_eq!(
            item.detail_path().as_deref(),
            Some("/hotel/ocean-view-mombasa-abcdef12")
        );
        assert!(RatedItem::new("abc").detail_path().is_none());
    }
}
