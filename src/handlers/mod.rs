pub mod auth;
pub mod bookings;
pub mod cars;
pub mod dashboard;
pub mod health;
pub mod hotels;
pub mod payments;
