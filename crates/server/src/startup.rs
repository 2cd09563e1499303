use axum::http::HeaderValue;
use configs::{AppConfig, CorsConfig};
use service::runtime;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

use crate::routes::{self, AppState};

/// `*` allows everything; otherwise only the listed origins, with credentials.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cfg.allows_any() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|e| anyhow::anyhow!("invalid cors origin {o:?}: {e}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Public entry: load configuration and run the HTTP server until a shutdown signal.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;
    run_with_config(cfg).await
}

/// Open the store, serve until shutdown, then close the store.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let cors = build_cors(&cfg.cors)?;
    let services = runtime::bootstrap(&cfg).await?;
    let static_dir = runtime::static_dir(&cfg).await;

    let app = routes::build_router(AppState::new(services.clone()), cors, static_dir.as_deref());

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, static_dir = ?static_dir, "petstore api listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = services.close().await {
        error!(error = %e, "failed to close store");
    }
    info!("server stopped");
    served?;
    Ok(())
}
