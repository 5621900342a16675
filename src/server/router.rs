use crate::config::Config;
use crate::db::Database;
use crate::server::handlers::{api_stub, health, spa_fallback};
use crate::server::ssr::SsrHandler;
use axum::Router;
use axum::routing::{get, post};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::warn;

/// Owned, injected request-path state. The database handle lives here for
/// future data routes; nothing dispatches on it today except tests.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub index: Option<PathBuf>,
    pub ssr: Option<Arc<dyn SsrHandler>>,
}

impl AppState {
    pub fn new(db: Database, index: Option<PathBuf>) -> Self {
        Self {
            db,
            index,
            ssr: None,
        }
    }

    pub fn with_ssr(mut self, ssr: Arc<dyn SsrHandler>) -> Self {
        self.ssr = Some(ssr);
        self
    }
}

/// Build the application router. Registration order is the dispatch order:
/// explicit routes first, then the layered static roots, then the SPA
/// catch-all.
pub fn app_router(state: AppState, cfg: &Config) -> Router {
    let spa = get(spa_fallback).with_state(state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .route("/api/{*rest}", post(api_stub));

    // A miss in the first static root falls through to the next, and
    // finally to the SPA handler.
    let router = match cfg.static_roots.as_slice() {
        [] => router.fallback_service(spa),
        [root] => router.fallback_service(ServeDir::new(root).fallback(spa)),
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                warn!(
                    ignored = rest.len(),
                    "more than two static roots configured, extras are ignored"
                );
            }
            router.fallback_service(
                ServeDir::new(first).fallback(ServeDir::new(second).fallback(spa)),
            )
        }
    };

    router.with_state(state)
}
