use std::{marker::PhantomData, sync::Arc};

use models::{errors::ModelError, Record};
use serde_json::Value;

use super::{Document, DocumentStore, Filter};
use crate::errors::ServiceError;

/// Typed view over one collection of a [`DocumentStore`].
pub struct Collection<E> {
    store: Arc<dyn DocumentStore>,
    _record: PhantomData<fn() -> E>,
}

impl<E> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), _record: PhantomData }
    }
}

impl<E: Record> Collection<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store, _record: PhantomData }
    }

    pub fn name(&self) -> &'static str {
        E::COLLECTION
    }

    fn to_document(record: &E) -> Result<Document, ServiceError> {
        match serde_json::to_value(record).map_err(ServiceError::db)? {
            Value::Object(map) => Ok(map),
            _ => Err(ServiceError::Db(format!("{} record is not a JSON object", E::COLLECTION))),
        }
    }

    fn from_document(doc: Document) -> Result<E, ServiceError> {
        serde_json::from_value(Value::Object(doc))
            .map_err(|e| ModelError::Decode(format!("{}: {e}", E::COLLECTION)).into())
    }

    pub async fn insert(&self, record: &E) -> Result<(), ServiceError> {
        self.store.insert_one(E::COLLECTION, Self::to_document(record)?).await
    }

    pub async fn insert_many(&self, records: &[E]) -> Result<(), ServiceError> {
        let docs = records.iter().map(Self::to_document).collect::<Result<Vec<_>, _>>()?;
        self.store.insert_many(E::COLLECTION, docs).await
    }

    /// Matching records in insertion order, capped at `E::LIST_LIMIT`.
    pub async fn list(&self, filter: &Filter) -> Result<Vec<E>, ServiceError> {
        self.store
            .find(E::COLLECTION, filter, E::LIST_LIMIT)
            .await?
            .into_iter()
            .map(Self::from_document)
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<Option<E>, ServiceError> {
        self.store
            .find_one(E::COLLECTION, &Filter::by_id(id))
            .await?
            .map(Self::from_document)
            .transpose()
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.store.count(E::COLLECTION, &Filter::all()).await
    }

    /// Overwrite `fields` on the record with `id`; false when no such record exists.
    pub async fn set_fields(&self, id: &str, fields: Document) -> Result<bool, ServiceError> {
        let matched = self.store.update_one(E::COLLECTION, &Filter::by_id(id), fields).await?;
        Ok(matched > 0)
    }
}
