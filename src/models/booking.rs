use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Snapshot of the rented vehicle taken when the booking was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub number_plate: String,
    pub rate: u64,
}

impl Vehicle {
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.number_plate)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: u64,
    pub booking_code: String,
    pub car: Vehicle,
    pub customer: Customer,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub days: u32,
    pub amount: u64,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
    pub created_at: NaiveDateTime,
}

impl Booking {
    /// Builds a booking, deriving `days` and `amount` from the car rate.
    /// Neither is recomputed afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        booking_code: String,
        car: Vehicle,
        customer: Customer,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        status: BookingStatus,
        payment_method: PaymentMethod,
        created_at: NaiveDateTime,
    ) -> Self {
        let days = (end_date - start_date).num_days().max(0) as u32;
        let amount = car.rate * days as u64;
        Self {
            id,
            booking_code,
            car,
            customer,
            start_date,
            end_date,
            days,
            amount,
            status,
            payment_method,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Completed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Completed,
        BookingStatus::Pending,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Completed => "completed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(BookingStatus::Completed),
            "pending" => Some(BookingStatus::Pending),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    MobileMoney,
    Card,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn corolla() -> Vehicle {
        Vehicle {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            number_plate: "KDD 123A".to_string(),
            rate: 7500,
        }
    }

    #[test]
    fn test_new_derives_days_and_amount() {
        let booking = Booking::new(
            1,
            "BK-1000".to_string(),
            corolla(),
            Customer {
                name: "John Kamau".to_string(),
                email: "john.k@example.com".to_string(),
                phone: "+254 712 345 678".to_string(),
            },
            dt("2025-03-01 10:00"),
            dt("2025-03-04 10:00"),
            BookingStatus::Pending,
            PaymentMethod::MobileMoney,
            dt("2025-02-25 08:00"),
        );
        assert_eq!(booking.days, 3);
        assert_eq!(booking.amount, 22_500);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(BookingStatus::parse("completed"), Some(BookingStatus::Completed));
        assert_eq!(BookingStatus::parse("all"), None);
        assert_eq!(BookingStatus::parse("Completed"), None);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_value(PaymentMethod::MobileMoney).unwrap();
        assert_eq!(json, "mobile-money");
        let json = serde_json::to_value(BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "cancelled");
        assert_eq!(corolla().label(), "Toyota Corolla (KDD 123A)");
    }
}
