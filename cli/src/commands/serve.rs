use rigscan_common::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::commands::build_service;
use crate::http::{self, AppState};
use crate::terminal::print;

pub async fn serve(cfg: ServerConfig) -> anyhow::Result<()> {
    print::header("starting server");

    let state = AppState::new(build_service(cfg.demo), cfg.default_base.clone());
    let app = http::router(state);

    let listener = TcpListener::bind(cfg.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    info!("Default scan base is {}", cfg.default_base);
    if cfg.demo {
        warn!("Demo mode: 127.0.0.1 is always reported online");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
