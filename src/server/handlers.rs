use crate::error::ServerError;
use crate::server::router::AppState;
use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::warn;

/// Liveness probe. Deliberately does not touch the database pool.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Catch-all API stub: answers success without inspecting the path suffix
/// or body. Real endpoints replace this route as they land; any error a
/// future body produces surfaces as a generic 500 via [`ServerError`].
pub async fn api_stub() -> Result<Json<Value>, ServerError> {
    Ok(Json(json!({ "success": true })))
}

/// Final catch-all: delegate to the SSR renderer when one is wired in,
/// otherwise serve the `index.html` resolved during bootstrap.
pub async fn spa_fallback(State(state): State<AppState>, req: Request<Body>) -> Response {
    if let Some(ssr) = &state.ssr {
        return ssr.render(req).await;
    }

    let Some(index) = &state.index else {
        return not_found();
    };
    match tokio::fs::read(index).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            warn!(path = %index.display(), error = %e, "startup-resolved index is no longer readable");
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
