use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

/// Standardized API error response body
#[derive(Serialize)]
struct ApiErrorBody {
    error: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        // Full detail stays in the log; the caller only sees a generic 500.
        tracing::error!(error = %self, "request handler failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorBody {
                error: "Internal Server Error",
            }),
        )
            .into_response()
    }
}
