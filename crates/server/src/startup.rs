use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{store::seaorm::SeaOrmStore, Ready};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`), falling back to the environment.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: connect storage, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    let backend = Arc::new(SeaOrmStore::new(db));
    if !backend.ready().await {
        warn!(schema = %cfg.database.schema, "database not answering yet; readiness will report Failure");
    }

    let state = AppState::new(backend).with_legacy_reset_content(cfg.server.legacy_reset_content);
    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting wisdom server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
