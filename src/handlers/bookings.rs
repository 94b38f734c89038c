use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::handlers::auth::check_auth;
use crate::models::Booking;
use crate::services::bookings::export::{bookings_to_csv, export_filename};
use crate::services::bookings::paginate::{clamp_page, total_pages};
use crate::services::bookings::{
    apply_filters, compute_stats, paginate, BookingStats, FilterConfig, LoadState, Page, PAGE_SIZE,
};
use crate::state::AppState;

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Current booking snapshot, or the reason there isn't one yet.
pub(crate) fn loaded_bookings(state: &AppState) -> Result<Arc<Vec<Booking>>, AppError> {
    match state.bookings.snapshot() {
        LoadState::Ready(bookings) => Ok(bookings),
        LoadState::Loading => Err(AppError::NotReady),
        LoadState::Failed(message) => Err(AppError::Internal(message)),
    }
}

#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub date_range: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<usize>,
}

impl BookingsQuery {
    fn filter_config(&self) -> FilterConfig {
        FilterConfig::from_params(
            self.status.as_deref(),
            self.date_range.as_deref(),
            self.sort_by.as_deref(),
        )
    }
}

// GET /api/bookings
#[derive(Serialize)]
pub struct BookingsResponse {
    stats: BookingStats,
    filters: FilterConfig,
    #[serde(flatten)]
    page: Page<Booking>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, AppError> {
    check_auth(&headers, &state)?;

    let bookings = loaded_bookings(&state)?;
    let filters = query.filter_config();
    let filtered = apply_filters(&bookings, &filters, today());

    let pages = total_pages(filtered.len(), PAGE_SIZE);
    let page = clamp_page(query.page.unwrap_or(1), pages);

    Ok(Json(BookingsResponse {
        stats: compute_stats(&bookings),
        filters,
        page: paginate(&filtered, page, PAGE_SIZE),
    }))
}

// GET /api/bookings/stats
pub async fn booking_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<BookingStats>, AppError> {
    check_auth(&headers, &state)?;
    let bookings = loaded_bookings(&state)?;
    Ok(Json(compute_stats(&bookings)))
}

// GET /api/bookings/export
pub async fn export_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Response, AppError> {
    check_auth(&headers, &state)?;

    let bookings = loaded_bookings(&state)?;
    let filtered = apply_filters(&bookings, &query.filter_config(), today());
    let csv = bookings_to_csv(&filtered).map_err(|e| {
        tracing::error!(error = %e, "failed to export bookings");
        AppError::Internal("failed to export bookings".to_string())
    })?;

    let filename = export_filename(today());
    tracing::info!(rows = filtered.len(), %filename, "exported bookings");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                &format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

// POST /api/bookings/reload
pub async fn reload_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state)?;
    state.reload_bookings();
    Ok(Json(serde_json::json!({"ok": true, "loading": true})))
}
