//! Booking exports for hosts.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExportConfig;
use crate::ids::BookingId;
use crate::slug::generate_slug;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 11] = [
    "Booking ID",
    "Listing",
    "Guest",
    "Email",
    "Phone",
    "Slots",
    "Amount",
    "Status",
    "Payment",
    "Visit Date",
    "Booked At",
];

/// One booking row as a host sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub listing_name: String,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: Option<String>,
    /// Booked slots (guests or tickets).
    pub slots: u32,
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub visit_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Render bookings as CSV, header row first.
pub fn export_bookings_csv(records: &[BookingRecord], config: &ExportConfig) -> String {
    debug!(rows = records.len(), "exporting bookings");

    let mut out = String::new();
    push_row(&mut out, CSV_HEADERS.iter().map(|h| h.to_string()));

    for record in records {
        let fields = [
            record.id.to_string(),
            record.listing_name.clone(),
            record.guest_name.clone(),
            record.guest_email.clone(),
            record.guest_phone.clone().unwrap_or_default(),
            record.slots.to_string(),
            format!("{:.2}", record.total_amount),
            record.status.clone(),
            record.payment_status.clone().unwrap_or_default(),
            record
                .visit_date
                .map(|d| render(d.format(&config.date_format)))
                .unwrap_or_default(),
            render(record.created_at.format(&config.date_format)),
        ];
        push_row(&mut out, fields);
    }

    out
}

fn push_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let escaped: Vec<String> = fields.into_iter().map(|f| escape_field(&f)).collect();
    let _ = writeln!(out, "{}", escaped.join(","));
}

// Invalid format strings render as an empty cell.
fn render(value: impl std::fmt::Display) -> String {
    let mut s = String::new();
    if write!(s, "{}", value).is_err() {
        s.clear();
    }
    s
}

/// Quote a field if it contains a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// File name for a listing's export, e.g. `bookings-ocean-view-2024-03-01.csv`.
pub fn export_file_name(listing_name: &str, date: NaiveDate) -> String {
    let slug = generate_slug(listing_name, None);
    let date = date.format("%Y-%m-%d");
    if slug.is_empty() {
        format!("bookings-{}.csv", date)
    } else {
        format!("bookings-{}-{}.csv", slug, date)
    }
}
