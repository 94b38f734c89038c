use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::auth::check_auth;
use crate::models::{Car, CarDraft};
use crate::services::crud::CrudAction;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CarsQuery {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub confirm: Option<bool>,
}

// GET /api/cars
pub async fn list_cars(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CarsQuery>,
) -> Result<Json<Vec<Car>>, AppError> {
    check_auth(&headers, &state)?;

    let panel = state.cars.lock().unwrap_or_else(|p| p.into_inner());
    let view = panel.apply(CrudAction::Search(query.search.unwrap_or_default()))?;
    Ok(Json(view.visible().into_iter().cloned().collect()))
}

// POST /api/cars
pub async fn create_car(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<CarDraft>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    check_auth(&headers, &state)?;

    let mut panel = state.cars.lock().unwrap_or_else(|p| p.into_inner());
    let next = panel.apply(CrudAction::Add(draft))?;
    let car = next
        .items()
        .last()
        .cloned()
        .ok_or_else(|| AppError::Internal("car was not added".to_string()))?;
    *panel = next;

    tracing::info!(id = car.id, plate = %car.number_plate, "car added");
    Ok((StatusCode::CREATED, Json(car)))
}

// PUT /api/cars/:id
pub async fn update_car(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(draft): Json<CarDraft>,
) -> Result<Json<Car>, AppError> {
    check_auth(&headers, &state)?;

    let mut panel = state.cars.lock().unwrap_or_else(|p| p.into_inner());
    let next = panel
        .apply(CrudAction::BeginEdit(id))?
        .apply(CrudAction::SubmitEdit(draft))?;
    let car = next
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no record with id {id}")))?;
    *panel = next;

    tracing::info!(id, "car updated");
    Ok(Json(car))
}

// DELETE /api/cars/:id?confirm=true
pub async fn delete_car(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state)?;

    let mut panel = state.cars.lock().unwrap_or_else(|p| p.into_inner());
    let requested = panel.apply(CrudAction::RequestDelete(id))?;
    if !query.confirm.unwrap_or(false) {
        return Err(AppError::ConfirmationRequired(
            "Are you sure you want to delete this car?".to_string(),
        ));
    }
    *panel = requested.apply(CrudAction::ConfirmDelete)?;

    tracing::info!(id, "car deleted");
    Ok(Json(serde_json::json!({"ok": true})))
}
