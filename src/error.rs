//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Input record errors
    MissingFeature(String),
    InvalidValue(String),

    // Encoder errors
    UnknownCategory(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingFeature(name) => {
                (StatusCode::BAD_REQUEST, format!("Missing value for feature '{}'", name))
            }
            AppError::InvalidValue(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::UnknownCategory(label) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Category '{}' is not known to the encoder", label),
            ),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<crate::model::encoder::UnknownLabel> for AppError {
    fn from(err: crate::model::encoder::UnknownLabel) -> Self {
        AppError::UnknownCategory(err.0)
    }
}
