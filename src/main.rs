use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &boltd::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        port = cfg.port,
        data_dir = %cfg.data_dir.display(),
        db_file = %cfg.db_file,
        static_roots = ?cfg.static_roots,
        loglevel = %cfg.loglevel
    );

    // Fail fast: the server's one job is a ready database, so nothing binds
    // until bootstrap has finished.
    let boot = match boltd::bootstrap::bootstrap(cfg).await {
        Ok(boot) => boot,
        Err(e) => {
            error!(error = %e, "bootstrap failed");
            std::process::exit(1);
        }
    };

    let state = boltd::server::AppState::new(boot.db, boot.index);
    let app = boltd::server::app_router(state, cfg);

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
