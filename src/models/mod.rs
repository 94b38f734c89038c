pub mod booking;
pub mod car;
pub mod hotel;

pub use booking::{Booking, BookingStatus, Customer, PaymentMethod, Vehicle};
pub use car::{Car, CarDraft, CarStatus};
pub use hotel::{Hotel, HotelDraft, HotelSortField, HotelStatus};
