use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::{debug, info};

use super::{document_id, Document, DocumentStore, Filter};
use crate::errors::ServiceError;

/// JSON file-backed document store.
///
/// Each collection is persisted as `<dir>/<collection>.json`, an array of
/// documents in insertion order. Everything is loaded on open and the whole
/// collection file is rewritten (temp file + rename) on every write.
pub struct JsonFileStore {
    dir: PathBuf,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl JsonFileStore {
    /// Open the store rooted at `dir`, creating the directory if missing.
    pub async fn open<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = dir.into();
        common::env::ensure_data_dir(&dir).await.map_err(ServiceError::db)?;

        let mut collections = HashMap::new();
        let mut entries = fs::read_dir(&dir).await.map_err(ServiceError::db)?;
        while let Some(entry) = entries.next_entry().await.map_err(ServiceError::db)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            let bytes = fs::read(&path).await.map_err(ServiceError::db)?;
            let docs: Vec<Document> = serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Db(format!("corrupt collection file {}: {e}", path.display())))?;
            debug!(collection = %name, count = docs.len(), "collection loaded");
            collections.insert(name, docs);
        }

        info!(dir = %dir.display(), collections = collections.len(), "json file store loaded");
        Ok(Arc::new(Self { dir, collections: RwLock::new(collections) }))
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf, ServiceError> {
        let valid = !collection.is_empty()
            && collection.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ServiceError::Db(format!("invalid collection name: {collection:?}")));
        }
        Ok(self.dir.join(format!("{collection}.json")))
    }

    async fn persist(&self, collection: &str, docs: &[Document]) -> Result<(), ServiceError> {
        let path = self.collection_path(collection)?;
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_vec(docs).map_err(ServiceError::db)?;
        fs::write(&tmp, data).await.map_err(ServiceError::db)?;
        fs::rename(&tmp, &path).await.map_err(ServiceError::db)?;
        Ok(())
    }

    /// Append `docs` and persist; memory is rolled back if the write fails.
    async fn append(&self, collection: &str, docs: Vec<Document>) -> Result<(), ServiceError> {
        self.collection_path(collection)?;
        for doc in &docs {
            document_id(doc)?;
        }
        let added = docs.len();
        let mut map = self.collections.write().await;
        let entries = map.entry(collection.to_string()).or_default();
        let before = entries.len();
        entries.extend(docs);
        if let Err(e) = self.persist(collection, entries).await {
            entries.truncate(before);
            return Err(e);
        }
        debug!(collection, added, total = entries.len(), "documents appended");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), ServiceError> {
        self.append(collection, vec![doc]).await
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), ServiceError> {
        if docs.is_empty() {
            return Ok(());
        }
        self.append(collection, docs).await
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Document>, ServiceError> {
        let map = self.collections.read().await;
        Ok(map
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.matches(d))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_one(&self, collection: &str, filter: &Filter, set: Document) -> Result<u64, ServiceError> {
        let mut map = self.collections.write().await;
        let Some(entries) = map.get_mut(collection) else { return Ok(0) };
        let Some(pos) = entries.iter().position(|d| filter.matches(d)) else { return Ok(0) };

        let previous = entries[pos].clone();
        for (field, value) in set {
            entries[pos].insert(field, value);
        }
        if let Err(e) = self.persist(collection, entries).await {
            entries[pos] = previous;
            return Err(e);
        }
        Ok(1)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError> {
        let map = self.collections.read().await;
        Ok(map
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count() as u64)
            .unwrap_or(0))
    }

    async fn close(&self) -> Result<(), ServiceError> {
        info!(dir = %self.dir.display(), "json file store closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(v: Value) -> Document {
        v.as_object().cloned().unwrap()
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("json_file_store_{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_file_store_crud_persists() -> Result<(), anyhow::Error> {
        let dir = temp_dir();
        let store = JsonFileStore::open(&dir).await?;

        // initially empty
        assert_eq!(store.count("things", &Filter::all()).await?, 0);

        store.insert_one("things", doc(json!({"id": "a", "kind": "x", "n": 1}))).await?;
        store
            .insert_many(
                "things",
                vec![doc(json!({"id": "b", "kind": "y"})), doc(json!({"id": "c", "kind": "x"}))],
            )
            .await?;

        let xs = store.find("things", &Filter::all().eq("kind", "x"), 10).await?;
        let ids: Vec<&str> = xs.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        // limit keeps insertion order
        let first = store.find("things", &Filter::all(), 1).await?;
        assert_eq!(first[0]["id"], "a");

        let matched = store
            .update_one("things", &Filter::by_id("a"), doc(json!({"kind": "z"})))
            .await?;
        assert_eq!(matched, 1);
        let missing = store
            .update_one("things", &Filter::by_id("nope"), doc(json!({"kind": "z"})))
            .await?;
        assert_eq!(missing, 0);

        // reload from disk
        let reloaded = JsonFileStore::open(&dir).await?;
        let a = reloaded.find_one("things", &Filter::by_id("a")).await?.unwrap();
        assert_eq!(a["kind"], "z");
        assert_eq!(a["n"], 1);
        assert_eq!(reloaded.count("things", &Filter::all()).await?, 3);

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn rejects_documents_without_id_and_bad_names() -> Result<(), anyhow::Error> {
        let dir = temp_dir();
        let store = JsonFileStore::open(&dir).await?;
        assert!(store.insert_one("things", doc(json!({"kind": "x"}))).await.is_err());
        assert!(store.insert_one("../escape", doc(json!({"id": "1"}))).await.is_err());
        assert_eq!(store.count("things", &Filter::all()).await?, 0);
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_fails_open() -> Result<(), anyhow::Error> {
        let dir = temp_dir();
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join("products.json"), b"{not json").await?;
        assert!(JsonFileStore::open(&dir).await.is_err());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
