use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::auth::check_auth;
use crate::handlers::cars::DeleteQuery;
use crate::models::hotel::sort_hotels;
use crate::models::{Hotel, HotelDraft, HotelSortField};
use crate::services::crud::{CrudAction, Entity};
use crate::services::geocoding::{kenya_query, GeoPoint};
use crate::state::AppState;

/// Queries this short are not worth sending to the geocoder.
const MIN_GEOCODE_QUERY: usize = 4;

#[derive(Deserialize)]
pub struct HotelsQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

// GET /api/hotels
pub async fn list_hotels(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<HotelsQuery>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    check_auth(&headers, &state)?;

    let panel = state.hotels.lock().unwrap_or_else(|p| p.into_inner());
    let view = panel.apply(CrudAction::Search(query.search.unwrap_or_default()))?;
    let mut hotels = view.visible();

    let field = query
        .sort
        .as_deref()
        .map(HotelSortField::parse)
        .unwrap_or_default();
    let descending = query.dir.as_deref() == Some("desc");
    sort_hotels(&mut hotels, field, descending);

    Ok(Json(hotels.into_iter().cloned().collect()))
}

/// Fills in coordinates for drafts that have none. Lookup failures and empty
/// results leave the draft as it was.
async fn locate(state: &AppState, mut draft: HotelDraft) -> HotelDraft {
    if !draft.needs_coordinates() {
        return draft;
    }

    match state.geocoder.lookup(&kenya_query(&draft.location)).await {
        Ok(Some(point)) => {
            draft.lat = point.lat;
            draft.lng = point.lng;
        }
        Ok(None) => {
            tracing::debug!(location = %draft.location, "no geocoding match");
        }
        Err(e) => {
            tracing::warn!(error = %e, location = %draft.location, "geocoding failed");
        }
    }
    draft
}

// POST /api/hotels
pub async fn create_hotel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<HotelDraft>,
) -> Result<(StatusCode, Json<Hotel>), AppError> {
    check_auth(&headers, &state)?;

    Hotel::validate(&draft)?;
    let draft = locate(&state, draft).await;

    let mut panel = state.hotels.lock().unwrap_or_else(|p| p.into_inner());
    let next = panel.apply(CrudAction::Add(draft))?;
    let hotel = next
        .items()
        .last()
        .cloned()
        .ok_or_else(|| AppError::Internal("hotel was not added".to_string()))?;
    *panel = next;

    tracing::info!(id = hotel.id, name = %hotel.name, "hotel added");
    Ok((StatusCode::CREATED, Json(hotel)))
}

// PUT /api/hotels/:id
pub async fn update_hotel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(draft): Json<HotelDraft>,
) -> Result<Json<Hotel>, AppError> {
    check_auth(&headers, &state)?;

    Hotel::validate(&draft)?;
    let draft = locate(&state, draft).await;

    let mut panel = state.hotels.lock().unwrap_or_else(|p| p.into_inner());
    let next = panel
        .apply(CrudAction::BeginEdit(id))?
        .apply(CrudAction::SubmitEdit(draft))?;
    let hotel = next
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no record with id {id}")))?;
    *panel = next;

    tracing::info!(id, "hotel updated");
    Ok(Json(hotel))
}

// DELETE /api/hotels/:id?confirm=true
pub async fn delete_hotel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state)?;

    let mut panel = state.hotels.lock().unwrap_or_else(|p| p.into_inner());
    let requested = panel.apply(CrudAction::RequestDelete(id))?;
    if !query.confirm.unwrap_or(false) {
        return Err(AppError::ConfirmationRequired(
            "Are you sure you want to delete this hotel?".to_string(),
        ));
    }
    *panel = requested.apply(CrudAction::ConfirmDelete)?;

    tracing::info!(id, "hotel deleted");
    Ok(Json(serde_json::json!({"ok": true})))
}

// GET /api/geocode?q=
#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub q: Option<String>,
}

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<Option<GeoPoint>>, AppError> {
    check_auth(&headers, &state)?;

    let text = query.q.unwrap_or_default();
    if text.trim().chars().count() < MIN_GEOCODE_QUERY {
        return Ok(Json(None));
    }

    let point = state.geocoder.lookup(&kenya_query(&text)).await.map_err(|e| {
        tracing::warn!(error = %e, "geocoding lookup failed");
        AppError::Geocoding("location lookup failed".to_string())
    })?;
    Ok(Json(point))
}
