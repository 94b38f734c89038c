use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::handlers::auth::check_auth;
use crate::services::payments::{PaymentOutcome, PaymentRequest};
use crate::state::AppState;

pub const PAYMENT_SUCCESS: &str = "Payment successful!";
pub const PAYMENT_REJECTED: &str = "Payment failed. Please try again.";
pub const PAYMENT_ERROR: &str = "An error occurred. Please try again.";

#[derive(Serialize)]
pub struct PaymentResponse {
    message: &'static str,
}

// POST /api/payments/mpesa
pub async fn mpesa_payment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    check_auth(&headers, &state)?;
    body.validate()?;

    match state.payments.submit(&body).await {
        Ok(PaymentOutcome::Accepted) => {
            tracing::info!(amount = body.amount, "M-Pesa payment accepted");
            Ok(Json(PaymentResponse {
                message: PAYMENT_SUCCESS,
            }))
        }
        Ok(PaymentOutcome::Rejected(status)) => {
            tracing::warn!(status, "M-Pesa payment rejected by gateway");
            Err(AppError::Payment(PAYMENT_REJECTED.to_string()))
        }
        Err(e) => {
            tracing::error!(error = %e, "M-Pesa payment request failed");
            Err(AppError::Payment(PAYMENT_ERROR.to_string()))
        }
    }
}
