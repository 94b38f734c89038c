use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::handlers::auth::check_auth;
use crate::handlers::bookings::{loaded_bookings, today};
use crate::models::Booking;
use crate::services::bookings::{apply_filters, compute_stats, BookingStats, FilterConfig};
use crate::state::AppState;

const RECENT_BOOKINGS: usize = 5;

#[derive(Serialize)]
pub struct DashboardResponse {
    stats: BookingStats,
    cars: usize,
    hotels: usize,
    recent_bookings: Vec<Booking>,
}

// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, AppError> {
    check_auth(&headers, &state)?;

    let bookings = loaded_bookings(&state)?;
    let mut recent = apply_filters(&bookings, &FilterConfig::default(), today());
    recent.truncate(RECENT_BOOKINGS);

    let cars = state.cars.lock().unwrap_or_else(|p| p.into_inner()).items().len();
    let hotels = state.hotels.lock().unwrap_or_else(|p| p.into_inner()).items().len();

    Ok(Json(DashboardResponse {
        stats: compute_stats(&bookings),
        cars,
        hotels,
        recent_bookings: recent,
    }))
}
