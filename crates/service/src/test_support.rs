#![cfg(test)]
use std::{path::PathBuf, sync::Arc};

use crate::storage::{DocumentStore, JsonFileStore};

/// Fresh file-backed store in its own temp directory; callers remove the dir.
pub async fn temp_store() -> Result<(Arc<dyn DocumentStore>, PathBuf), anyhow::Error> {
    let dir = std::env::temp_dir().join(format!("petstore_store_{}", uuid::Uuid::new_v4()));
    let store: Arc<dyn DocumentStore> = JsonFileStore::open(&dir).await?;
    Ok((store, dir))
}
