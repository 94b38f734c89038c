pub mod auth;
pub mod bookings;
pub mod crud;
pub mod geocoding;
pub mod payments;
pub mod validation;
