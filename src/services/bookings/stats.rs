use serde::Serialize;

use crate::models::{Booking, BookingStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Sum of `amount` over completed bookings only.
    pub revenue: u64,
}

pub fn compute_stats(bookings: &[Booking]) -> BookingStats {
    bookings
        .iter()
        .fold(BookingStats::default(), |mut stats, booking| {
            stats.total += 1;
            match booking.status {
                BookingStatus::Completed => {
                    stats.completed += 1;
                    stats.revenue += booking.amount;
                }
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
            }
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::bookings::fixtures::booking;

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_stats(&[]), BookingStats::default());
    }

    #[test]
    fn test_revenue_counts_completed_only() {
        let bookings = vec![
            booking(1, BookingStatus::Completed, 500),
            booking(2, BookingStatus::Pending, 100),
            booking(3, BookingStatus::Completed, 300),
            booking(4, BookingStatus::Cancelled, 9000),
        ];
        let stats = compute_stats(&bookings);
        assert_eq!(stats.revenue, 800);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total, stats.completed + stats.pending + stats.cancelled);
    }
}
