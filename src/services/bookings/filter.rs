use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::models::{Booking, BookingStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn parse(s: &str) -> Self {
        match s {
            "today" => DateRange::Today,
            "week" => DateRange::Week,
            "month" => DateRange::Month,
            _ => DateRange::All,
        }
    }

    /// Midnight at the start of the window containing `today`. Weeks start on
    /// Sunday, months on the 1st.
    pub fn window_start(&self, today: NaiveDate) -> Option<NaiveDateTime> {
        let day = match self {
            DateRange::All => return None,
            DateRange::Today => today,
            DateRange::Week => {
                today - Duration::days(today.weekday().num_days_from_sunday() as i64)
            }
            DateRange::Month => NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?,
        };
        Some(day.and_time(NaiveTime::MIN))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
    /// Keep input order.
    Input,
}

impl SortBy {
    pub fn parse(s: &str) -> Self {
        match s {
            "newest" => SortBy::Newest,
            "oldest" => SortBy::Oldest,
            "highest" => SortBy::Highest,
            "lowest" => SortBy::Lowest,
            _ => SortBy::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    /// `None` keeps every status.
    pub status: Option<BookingStatus>,
    pub date_range: DateRange,
    pub sort_by: SortBy,
}

impl FilterConfig {
    /// Lenient construction from query parameters: unrecognised values pass
    /// everything through.
    pub fn from_params(
        status: Option<&str>,
        date_range: Option<&str>,
        sort_by: Option<&str>,
    ) -> Self {
        Self {
            status: status.and_then(BookingStatus::parse),
            date_range: date_range.map(DateRange::parse).unwrap_or_default(),
            sort_by: sort_by.map(SortBy::parse).unwrap_or_default(),
        }
    }
}

/// Copies `bookings`, keeps the ones matching `config` and orders them.
/// `today` anchors the date-range windows. The sort is stable.
pub fn apply_filters(bookings: &[Booking], config: &FilterConfig, today: NaiveDate) -> Vec<Booking> {
    let window_start = config.date_range.window_start(today);

    let mut result: Vec<Booking> = bookings
        .iter()
        .filter(|b| config.status.map_or(true, |status| b.status == status))
        .filter(|b| window_start.map_or(true, |start| reaches_into(b, start)))
        .cloned()
        .collect();

    match config.sort_by {
        SortBy::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => result.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Highest => result.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortBy::Lowest => result.sort_by(|a, b| a.amount.cmp(&b.amount)),
        SortBy::Input => {}
    }

    tracing::debug!(
        kept = result.len(),
        of = bookings.len(),
        ?config,
        "filtered bookings"
    );
    result
}

fn reaches_into(booking: &Booking, start: NaiveDateTime) -> bool {
    booking.start_date >= start || (booking.end_date >= start && booking.start_date < start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::bookings::fixtures::{booking, dt, spanning};

    fn today() -> NaiveDate {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    fn ids(bookings: &[Booking]) -> Vec<u64> {
        bookings.iter().map(|b| b.id).collect()
    }

    fn amounts(bookings: &[Booking]) -> Vec<u64> {
        bookings.iter().map(|b| b.amount).collect()
    }

    #[test]
    fn test_highest_orders_amounts_descending() {
        let input = vec![
            booking(1, BookingStatus::Pending, 500),
            booking(2, BookingStatus::Pending, 100),
            booking(3, BookingStatus::Pending, 300),
        ];
        let config = FilterConfig::from_params(None, None, Some("highest"));
        assert_eq!(amounts(&apply_filters(&input, &config, today())), vec![500, 300, 100]);
    }

    #[test]
    fn test_highest_reversed_equals_lowest() {
        let input = vec![
            booking(1, BookingStatus::Pending, 700),
            booking(2, BookingStatus::Completed, 200),
            booking(3, BookingStatus::Cancelled, 900),
            booking(4, BookingStatus::Pending, 400),
        ];
        let highest = FilterConfig::from_params(None, None, Some("highest"));
        let lowest = FilterConfig::from_params(None, None, Some("lowest"));
        let mut reversed = apply_filters(&input, &highest, today());
        reversed.reverse();
        assert_eq!(ids(&reversed), ids(&apply_filters(&input, &lowest, today())));
    }

    #[test]
    fn test_newest_and_oldest() {
        let input = vec![
            booking(2, BookingStatus::Pending, 1),
            booking(3, BookingStatus::Pending, 1),
            booking(1, BookingStatus::Pending, 1),
        ];
        let newest = apply_filters(&input, &FilterConfig::default(), today());
        assert_eq!(ids(&newest), vec![3, 2, 1]);
        let oldest = FilterConfig::from_params(None, None, Some("oldest"));
        assert_eq!(ids(&apply_filters(&input, &oldest, today())), vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            booking(5, BookingStatus::Pending, 100),
            booking(2, BookingStatus::Pending, 100),
            booking(9, BookingStatus::Pending, 100),
        ];
        let config = FilterConfig::from_params(None, None, Some("lowest"));
        assert_eq!(ids(&apply_filters(&input, &config, today())), vec![5, 2, 9]);
    }

    #[test]
    fn test_status_filter() {
        let input = vec![
            booking(1, BookingStatus::Completed, 1),
            booking(2, BookingStatus::Pending, 1),
            booking(3, BookingStatus::Completed, 1),
        ];
        let config = FilterConfig::from_params(Some("completed"), None, Some("oldest"));
        assert_eq!(ids(&apply_filters(&input, &config, today())), vec![1, 3]);
    }

    #[test]
    fn test_all_keeps_every_id_and_source_untouched() {
        let input = vec![
            booking(1, BookingStatus::Completed, 30),
            booking(2, BookingStatus::Pending, 10),
            booking(3, BookingStatus::Cancelled, 20),
        ];
        let snapshot = input.clone();
        let config = FilterConfig::from_params(Some("all"), Some("all"), Some("lowest"));
        let mut out = ids(&apply_filters(&input, &config, today()));
        out.sort();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let config = FilterConfig::from_params(Some("archived"), Some("decade"), Some("random"));
        assert_eq!(config.status, None);
        assert_eq!(config.date_range, DateRange::All);
        assert_eq!(config.sort_by, SortBy::Input);

        let input = vec![
            booking(3, BookingStatus::Pending, 1),
            booking(1, BookingStatus::Cancelled, 1),
        ];
        assert_eq!(ids(&apply_filters(&input, &config, today())), vec![3, 1]);
    }

    #[test]
    fn test_window_starts() {
        assert_eq!(
            DateRange::Today.window_start(today()),
            Some(dt("2025-03-12 00:00"))
        );
        assert_eq!(
            DateRange::Week.window_start(today()),
            Some(dt("2025-03-09 00:00"))
        );
        assert_eq!(
            DateRange::Month.window_start(today()),
            Some(dt("2025-03-01 00:00"))
        );
        assert_eq!(DateRange::All.window_start(today()), None);

        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(
            DateRange::Week.window_start(sunday),
            Some(dt("2025-03-09 00:00"))
        );
    }

    #[test]
    fn test_date_range_keeps_overlapping_intervals() {
        let input = vec![
            // Ended before the week began.
            spanning(1, "2025-03-01 10:00", "2025-03-05 10:00"),
            // Started before the week, still running.
            spanning(2, "2025-03-07 10:00", "2025-03-10 10:00"),
            // Starts inside the week.
            spanning(3, "2025-03-11 10:00", "2025-03-13 10:00"),
            // Starts in the future.
            spanning(4, "2025-03-20 10:00", "2025-03-22 10:00"),
        ];
        let week = FilterConfig::from_params(None, Some("week"), Some("oldest"));
        assert_eq!(ids(&apply_filters(&input, &week, today())), vec![2, 3, 4]);

        let day = FilterConfig::from_params(None, Some("today"), Some("oldest"));
        assert_eq!(ids(&apply_filters(&input, &day, today())), vec![3, 4]);

        let month = FilterConfig::from_params(None, Some("month"), Some("oldest"));
        assert_eq!(ids(&apply_filters(&input, &month, today())), vec![1, 2, 3, 4]);
    }
}
