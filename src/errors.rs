use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("bookings are still loading")]
    NotReady,

    #[error("geocoding error: {0}")]
    Geocoding(String),

    #[error("{0}")]
    Payment(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConfirmationRequired(_) => StatusCode::PRECONDITION_REQUIRED,
            AppError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Geocoding(_) => StatusCode::BAD_GATEWAY,
            AppError::Payment(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Rejections raised by the CRUD panels. The panel state is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid Kenyan number plate format (e.g., KDD 123A), got {0:?}")]
    InvalidPlate(String),

    #[error("Please fill in all required fields ({0} is missing)")]
    MissingField(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("no record with id {0}")]
    UnknownId(u64),

    #[error("no record is being edited")]
    NotEditing,

    #[error("no deletion is awaiting confirmation")]
    NothingToDelete,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownId(_) => AppError::NotFound(err.to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }
}
