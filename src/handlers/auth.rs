use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

fn bearer_token(headers: &HeaderMap) -> &str {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    auth.strip_prefix("Bearer ").unwrap_or("")
}

pub fn check_auth(headers: &HeaderMap, state: &AppState) -> Result<(), AppError> {
    let token = bearer_token(headers);
    if token.is_empty() || !state.sessions.is_valid(token) {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// POST /api/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    token: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !state.auth.verify(body.email.trim(), &body.password) {
        tracing::warn!(email = %body.email, "rejected login");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(email = %body.email, "admin logged in");
    Ok(Json(LoginResponse {
        token: state.sessions.issue(),
    }))
}

// POST /api/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state)?;
    state.sessions.revoke(bearer_token(&headers));
    Ok(Json(serde_json::json!({"ok": true})))
}
