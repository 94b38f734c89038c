use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::models::{Car, Hotel};
use crate::services::auth::{AuthVerifier, SessionRegistry};
use crate::services::bookings::{BookingSource, BookingStore, LoadHandle};
use crate::services::crud::CrudPanel;
use crate::services::geocoding::Geocoder;
use crate::services::payments::PaymentGateway;

pub struct AppState {
    pub config: AppConfig,
    pub bookings: Arc<BookingStore>,
    pub booking_source: Arc<dyn BookingSource>,
    pub loader: Mutex<Option<LoadHandle>>,
    pub cars: Mutex<CrudPanel<Car>>,
    pub hotels: Mutex<CrudPanel<Hotel>>,
    pub auth: Box<dyn AuthVerifier>,
    pub sessions: SessionRegistry,
    pub geocoder: Box<dyn Geocoder>,
    pub payments: Box<dyn PaymentGateway>,
}

impl AppState {
    /// Starts a fresh booking load, cancelling any load still in flight.
    pub fn reload_bookings(&self) {
        let mut loader = self.loader.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = loader.take() {
            previous.cancel();
        }
        *loader = Some(
            self.bookings
                .spawn_load(Arc::clone(&self.booking_source), self.config.mock_latency),
        );
    }

    /// Cancels the in-flight booking load, if any.
    pub fn shutdown(&self) {
        if let Some(handle) = self.loader.lock().unwrap_or_else(|p| p.into_inner()).take() {
            handle.cancel();
        }
    }
}
