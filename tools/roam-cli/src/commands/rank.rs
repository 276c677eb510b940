//! Listing ranking command.

use std::fs;

use anyhow::{Context as _, Result};
use roam_core::prelude::*;
use serde::{Deserialize, Serialize};

use super::RankArgs;
use crate::context::Context;
use crate::output::{format_distance, truncate};

/// Input fixture: listings plus optional aggregates.
#[derive(Debug, Deserialize)]
pub struct RankInput {
    pub items: Vec<RatedItem>,
    #[serde(default)]
    pub ratings: RatingIndex,
    #[serde(default)]
    pub bookings: Option<BookingStats>,
}

/// One ranked row, as printed.
#[derive(Debug, Serialize)]
struct RankedRow {
    position: usize,
    id: String,
    name: String,
    rating: f64,
    reviews: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

/// Run the rank command.
pub fn run(args: RankArgs, ctx: &Context) -> Result<()> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input))?;
    let input: RankInput = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input file: {}", args.input))?;

    ctx.output.debug(&format!(
        "{} listings, {} rated, bookings {}",
        input.items.len(),
        input.ratings.len(),
        if input.bookings.is_some() { "supplied" } else { "absent" }
    ));

    let viewer = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Position::new(lat, lon)),
        _ => None,
    };
    let band_width = args.band_width.unwrap_or(ctx.config.ranking.band_width);

    let mut rank_ctx = RankContext::new(&input.ratings).with_band_width(band_width);
    if let Some(viewer) = viewer {
        rank_ctx = rank_ctx.with_proximity(viewer, &Haversine);
    }
    if let Some(ref bookings) = input.bookings {
        rank_ctx = rank_ctx.with_bookings(bookings);
    }

    let mut ranked = rank(&input.items, &rank_ctx);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    let codec = SlugCodec::new(&ctx.config.slug);
    let rows: Vec<RankedRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let summary = input.ratings.get(&item.id);
            RankedRow {
                position: i + 1,
                id: item.id.to_string(),
                name: item.name.clone(),
                rating: summary.average,
                reviews: summary.count,
                distance_km: viewer
                    .zip(item.coordinates())
                    .map(|(from, to)| Haversine.distance(from, to)),
                remaining: input.bookings.as_ref().and_then(|b| b.remaining(item)),
                path: item.kind.map(|kind| {
                    codec.detail_path(kind.as_str(), item.id.as_str(), &item.name, item.location.as_deref())
                }),
            }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("Ranked listings ({})", rows.len()));
    let widths = [4, 12, 28, 6, 7, 10, 6];
    ctx.output.table_row(
        &["#", "ID", "NAME", "RATING", "REVIEWS", "DISTANCE", "LEFT"],
        &widths,
    );
    for row in &rows {
        let position = row.position.to_string();
        let id = truncate(&row.id, widths[1]);
        let name = truncate(&row.name, widths[2]);
        let rating = format!("{:.1}", row.rating);
        let reviews = row.reviews.to_string();
        let distance = format_distance(row.distance_km);
        let remaining = row
            .remaining
            .map(|r| r.max(0).to_string())
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                position.as_str(),
                id.as_str(),
                name.as_str(),
                rating.as_str(),
                reviews.as_str(),
                distance.as_str(),
                remaining.as_str(),
            ],
            &widths,
        );
    }

    if viewer.is_none() {
        ctx.output.debug("No --lat/--lon given; proximity ordering disabled");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_input() {
        let input: RankInput = serde_json::from_str(r#"{"items": [{"id": "a"}, {"id": "b"}]}"#).unwrap();
        assert_eq!(input.items.len(), 2);
        assert!(input.ratings.is_empty());
        assert!(input.bookings.is_none());
    }

    #[test]
    fn test_parse_full_input() {
        let input: RankInput = serde_json::from_str(
            r#"{
                "items": [{"id": "a", "name": "Camp", "kind": "adventure", "available_tickets": 4}],
                "ratings": {"a": {"average": 4.5, "count": 2}},
                "bookings": {"a": 4}
            }"#,
        )
        .unwrap();
        let bookings = input.bookings.unwrap();
        assert!(bookings.is_sold_out(&input.items[0]));
        assert_eq!(input.ratings.get(&"a".into()).count, 2);
        assert_eq!(input.items[0].kind, Some(ListingKind::Adventure));
    }
}
