//! One-time startup sequence: filesystem and database state are guaranteed
//! before the listener binds, so readiness implies a live schema. Any
//! failure here is fatal to the process.

use crate::config::Config;
use crate::db::Database;
use crate::error::ServerError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Everything the request path needs from startup, handed to the router as
/// owned state instead of a module-level global.
pub struct BootState {
    pub db: Database,
    pub index: Option<PathBuf>,
}

/// Create `path` (with parents) if it does not exist yet.
pub async fn ensure_dir(path: &Path) -> Result<(), ServerError> {
    if !fs::try_exists(path).await? {
        fs::create_dir_all(path).await?;
        debug!(path = %path.display(), "created directory");
    }
    Ok(())
}

/// Create an empty file at `path` if it does not exist yet. SQLite refuses
/// to open a pool on a missing file unless told to create it, so existence
/// is guaranteed up front.
pub async fn ensure_file(path: &Path) -> Result<(), ServerError> {
    if !fs::try_exists(path).await? {
        fs::File::create(path).await?;
        debug!(path = %path.display(), "created empty database file");
    }
    Ok(())
}

/// First existing candidate wins. Resolved once here; the catch-all route
/// never re-probes the filesystem for it.
pub async fn resolve_index(candidates: &[PathBuf]) -> Option<PathBuf> {
    for candidate in candidates {
        if fs::try_exists(candidate).await.unwrap_or(false) {
            return Some(candidate.clone());
        }
    }
    None
}

pub async fn bootstrap(cfg: &Config) -> Result<BootState, ServerError> {
    ensure_dir(&cfg.data_dir).await?;

    let db_path = cfg.db_path();
    ensure_file(&db_path).await?;

    let db = Database::open(&db_path).await?;
    db.init_schema().await?;
    info!(path = %db_path.display(), "database ready");

    let index = resolve_index(&cfg.index_candidates).await;
    match &index {
        Some(p) => info!(path = %p.display(), "resolved SPA index"),
        None => info!("no index.html among candidate paths, catch-all will 404"),
    }

    Ok(BootState { db, index })
}
