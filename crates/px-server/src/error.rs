use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use px_core::error::ConvertError;
use serde_json::json;
use thiserror::Error;

/// Request-layer errors, mapped to `{"error", "message"}` JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please upload an image file using the \"image\" field")]
    MissingImage,

    #[error("Width must be an integer")]
    WidthNotInteger,

    #[error("Width must be between {min} and {max}")]
    WidthOutOfRange { min: u32, max: u32 },

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("Malformed multipart upload: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::MissingImage => (StatusCode::BAD_REQUEST, "No image file provided"),
            ApiError::WidthNotInteger | ApiError::WidthOutOfRange { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid width")
            }
            ApiError::Convert(ConvertError::Internal(_)) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
            ApiError::Convert(_) => (StatusCode::BAD_REQUEST, "Image conversion failed"),
            ApiError::Upload(_) => (StatusCode::BAD_REQUEST, "Malformed upload"),
        };

        let body = Json(json!({
            "error": error,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
