use std::time::Duration;

use configs::StoreConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open a pooled connection for a `postgres://` store URL.
pub async fn connect_with_config(cfg: &StoreConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    tracing::info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "postgres pool connected"
    );
    Ok(db)
}

/// Connect using `DATABASE_URL`; used by tests that need a live Postgres.
pub async fn connect_from_env() -> anyhow::Result<DatabaseConnection> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL is not set"))?;
    let cfg = StoreConfig { url, ..StoreConfig::default() };
    connect_with_config(&cfg).await
}
