use std::{net::SocketAddr, time::Duration};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

/// Resolve the listen address from the validated configuration.
fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.bind_addr().parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only by process exit");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: open the pool, serve until Ctrl+C, then close the pool.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }

    let state = AppState::with_database(db.clone(), AppState::system_clock());
    let request_timeout = Duration::from_secs(cfg.server.request_timeout_secs);
    let app: Router = routes::build_router(state, request_timeout);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("database pool closed");
    Ok(())
}
