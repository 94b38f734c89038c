use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::Booking;

pub const CSV_HEADERS: [&str; 8] = [
    "Booking ID",
    "Customer",
    "Car",
    "Start Date",
    "End Date",
    "Days",
    "Amount",
    "Status",
];

fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%-d %b %Y").to_string()
}

/// Renders bookings as CSV, one row each, after the header row. Fields with
/// commas, quotes or newlines are quoted.
pub fn bookings_to_csv(bookings: &[Booking]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADERS)
        .context("failed to write CSV header")?;

    for booking in bookings {
        writer
            .write_record([
                booking.booking_code.clone(),
                booking.customer.name.clone(),
                booking.car.label(),
                format_date(&booking.start_date),
                format_date(&booking.end_date),
                booking.days.to_string(),
                booking.amount.to_string(),
                booking.status.as_str().to_string(),
            ])
            .with_context(|| format!("failed to write CSV row for {}", booking.booking_code))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("bookings_export_{}.csv", date.format("%Y-%m-%d"))
}
