use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::store::BookingSource;
use crate::models::{Booking, BookingStatus, Customer, PaymentMethod, Vehicle};

const FLEET: [(&str, &str, &str, u64); 5] = [
    ("Toyota", "Corolla", "KDD 123A", 7500),
    ("Honda", "Civic", "KCE 456B", 8000),
    ("Mazda", "CX-5", "KBZ 789C", 12000),
    ("Nissan", "X-Trail", "KDG 234D", 15000),
    ("Suzuki", "Swift", "KCA 567E", 6000),
];

const CUSTOMERS: [(&str, &str, &str); 5] = [
    ("John Kamau", "john.k@example.com", "+254 712 345 678"),
    ("Mary Wanjiku", "mary.w@example.com", "+254 723 456 789"),
    ("David Omondi", "david.o@example.com", "+254 734 567 890"),
    ("Esther Nyambura", "esther.n@example.com", "+254 745 678 901"),
    ("Michael Wafula", "michael.w@example.com", "+254 756 789 012"),
];

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Generates `count` plausible bookings started within the 30 days before
/// `now`, each lasting 1 to 14 days.
pub fn generate_bookings<R: Rng + ?Sized>(count: usize, now: NaiveDateTime, rng: &mut R) -> Vec<Booking> {
    (0..count)
        .map(|i| {
            let (make, model, plate, rate) = FLEET[rng.gen_range(0..FLEET.len())];
            let (name, email, phone) = CUSTOMERS[rng.gen_range(0..CUSTOMERS.len())];
            let status = BookingStatus::ALL[rng.gen_range(0..BookingStatus::ALL.len())];

            let start_date = now - Duration::milliseconds(rng.gen_range(0..30 * DAY_MS));
            let days: i64 = rng.gen_range(1..=14);
            let end_date = start_date + Duration::days(days);
            let created_at = start_date - Duration::milliseconds(rng.gen_range(0..10 * DAY_MS));

            let payment_method = if rng.gen_bool(0.5) {
                PaymentMethod::MobileMoney
            } else {
                PaymentMethod::Card
            };

            Booking::new(
                i as u64 + 1,
                format!("BK-{}", 1000 + i),
                Vehicle {
                    make: make.to_string(),
                    model: model.to_string(),
                    number_plate: plate.to_string(),
                    rate,
                },
                Customer {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                },
                start_date,
                end_date,
                status,
                payment_method,
                created_at,
            )
        })
        .collect()
}

/// Stands in for the remote bookings API until one exists.
pub struct MockBookingSource {
    count: usize,
    seed: Option<u64>,
}

impl MockBookingSource {
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    pub fn seeded(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed: Some(seed),
        }
    }
}

#[async_trait]
impl BookingSource for MockBookingSource {
    async fn fetch(&self) -> anyhow::Result<Vec<Booking>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let now = chrono::Local::now().naive_local();
        Ok(generate_bookings(self.count, now, &mut rng))
    }
}
