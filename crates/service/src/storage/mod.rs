//! Storage abstractions for service layer
//!
//! A [`DocumentStore`] keeps loosely typed JSON documents grouped in named
//! collections. Two backends exist: JSON files on disk and a SeaORM-managed
//! Postgres table. [`collection::Collection`] layers typed records on top.

use std::sync::Arc;

use async_trait::async_trait;
use configs::{StoreConfig, StoreKind};
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::ServiceError;

pub mod collection;
pub mod json_file_store;
pub mod seaorm_store;

pub use collection::Collection;
pub use json_file_store::JsonFileStore;
pub use seaorm_store::SeaOrmStore;

/// A stored document: a JSON object with at least a string `id`.
pub type Document = Map<String, Value>;

/// Conjunction of field equality tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: &str) -> Self {
        Self::all().eq("id", id)
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.clauses.push((field.to_string(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The id when this filter is exactly `id == <string>`.
    pub fn id_only(&self) -> Option<&str> {
        match self.clauses.as_slice() {
            [(field, Value::String(id))] if field == "id" => Some(id),
            _ => None,
        }
    }

    /// The clauses as one JSON object, for containment queries.
    /// A field given twice keeps its last value.
    pub fn as_document(&self) -> Document {
        self.clauses.iter().cloned().collect()
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }
}

/// Collection-scoped document operations.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), ServiceError>;

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), ServiceError>;

    /// Matching documents in insertion order, at most `limit` of them.
    async fn find(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Document>, ServiceError>;

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, ServiceError> {
        Ok(self.find(collection, filter, 1).await?.into_iter().next())
    }

    /// Overwrite the fields in `set` on the first matching document.
    /// Returns how many documents matched (0 or 1).
    async fn update_one(&self, collection: &str, filter: &Filter, set: Document) -> Result<u64, ServiceError>;

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError>;

    /// Release connections or handles. Called once when the server stops.
    async fn close(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// The `id` field every stored document carries.
pub(crate) fn document_id(doc: &Document) -> Result<String, ServiceError> {
    doc.get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ServiceError::Db("document has no string id".into()))
}

/// Open the store selected by the URL scheme in `cfg`.
pub async fn open(cfg: &StoreConfig) -> Result<Arc<dyn DocumentStore>, ServiceError> {
    let kind = cfg.kind().map_err(ServiceError::db)?;
    match kind {
        StoreKind::File => {
            let dir = cfg
                .file_path()
                .ok_or_else(|| ServiceError::Db("file store url has no directory".into()))?;
            let store: Arc<dyn DocumentStore> = JsonFileStore::open(dir).await?;
            info!(backend = "file", dir, "document store opened");
            Ok(store)
        }
        StoreKind::Postgres => {
            let store: Arc<dyn DocumentStore> = Arc::new(SeaOrmStore::connect(cfg).await?);
            info!(backend = "postgres", "document store opened");
            Ok(store)
        }
    }
}
