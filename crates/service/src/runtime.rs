//! Runtime environment helpers
//!
//! Opens the configured store and resolves the optional frontend directory
//! before the HTTP layer starts.

use std::path::PathBuf;

use configs::AppConfig;
use tracing::info;

use crate::{errors::ServiceError, storage, AppServices};

/// Open the store and wire every service onto it.
pub async fn bootstrap(cfg: &AppConfig) -> Result<AppServices, ServiceError> {
    let store = storage::open(&cfg.store).await?;
    info!("services ready");
    Ok(AppServices::new(store))
}

/// The configured frontend directory, if it exists.
pub async fn static_dir(cfg: &AppConfig) -> Option<PathBuf> {
    let dir = PathBuf::from(cfg.web.static_dir.as_deref()?);
    common::env::check_static_dir(&dir).await.then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_with_file_store() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("petstore_rt_{}", uuid::Uuid::new_v4()));
        let mut cfg = AppConfig::default();
        cfg.store.url = format!("file://{}", dir.display());

        let app = bootstrap(&cfg).await?;
        assert!(app.appointments.list().await?.is_empty());
        assert!(dir.is_dir());

        assert_eq!(static_dir(&cfg).await, None);
        cfg.web.static_dir = Some(dir.join("missing").display().to_string());
        assert_eq!(static_dir(&cfg).await, None);
        cfg.web.static_dir = Some(dir.display().to_string());
        assert_eq!(static_dir(&cfg).await, Some(dir.clone()));

        app.close().await?;
        let _ = tokio::fs::remove_dir_all(dir).await;
        Ok(())
    }
}
