//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Warn when the optional static frontend directory is missing.
/// Returns whether the directory can be served.
pub async fn check_static_dir(static_dir: &Path) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(static_dir = %static_dir.display(), "frontend assets directory not found; static assets disabled");
            false
        }
    }
}

/// Ensure the data directory of a file-backed store exists.
pub async fn ensure_data_dir(data_dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    Ok(())
}
