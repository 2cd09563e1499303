use async_trait::async_trait;
use chrono::Utc;
use configs::StoreConfig;
use migration::MigratorTrait;
use models::document;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use serde_json::Value;
use tracing::{info, instrument};

use super::{document_id, Document, DocumentStore, Filter};
use crate::errors::ServiceError;

/// SeaORM-backed document store: every collection shares the `document` table.
///
/// Filters run in Postgres as JSONB containment on `body`; results come in `seq` order.
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    /// Connect and bring the schema up to date.
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, ServiceError> {
        let db = models::db::connect_with_config(cfg).await.map_err(ServiceError::db)?;
        migration::Migrator::up(&db, None).await?;
        info!("document schema migrated");
        Ok(Self { db })
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(collection: &str, doc: Document) -> Result<document::ActiveModel, ServiceError> {
        let id = document_id(&doc)?;
        Ok(document::ActiveModel {
            collection: Set(collection.to_string()),
            id: Set(id),
            seq: NotSet,
            body: Set(Value::Object(doc)),
            inserted_at: Set(Utc::now().into()),
        })
    }

    fn body(model: document::Model) -> Option<Document> {
        match model.body {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Rows of `collection` whose body contains every clause of `filter`.
    fn select(collection: &str, filter: &Filter) -> Select<document::Entity> {
        let query = document::Entity::find().filter(document::Column::Collection.eq(collection));
        if filter.is_empty() {
            return query;
        }
        query.filter(Expr::cust_with_values("body @> ?", [Value::Object(filter.as_document())]))
    }

    /// Matching rows in insertion order, at most `limit`.
    async fn matching(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<document::Model>, ServiceError> {
        if let Some(id) = filter.id_only() {
            let found = document::Entity::find_by_id((collection.to_string(), id.to_string()))
                .one(&self.db)
                .await?;
            return Ok(found.into_iter().take(limit).collect());
        }
        let rows = Self::select(collection, filter)
            .order_by_asc(document::Column::Seq)
            .limit(u64::try_from(limit).unwrap_or(u64::MAX))
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl DocumentStore for SeaOrmStore {
    #[instrument(skip(self, doc))]
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), ServiceError> {
        let am = Self::active_model(collection, doc)?;
        document::Entity::insert(am).exec_without_returning(&self.db).await?;
        Ok(())
    }

    #[instrument(skip(self, docs), fields(count = docs.len()))]
    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), ServiceError> {
        if docs.is_empty() {
            return Ok(());
        }
        let ams = docs
            .into_iter()
            .map(|doc| Self::active_model(collection, doc))
            .collect::<Result<Vec<_>, _>>()?;
        document::Entity::insert_many(ams).exec_without_returning(&self.db).await?;
        Ok(())
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Document>, ServiceError> {
        let rows = self.matching(collection, filter, limit).await?;
        Ok(rows.into_iter().filter_map(Self::body).collect())
    }

    #[instrument(skip(self, set))]
    async fn update_one(&self, collection: &str, filter: &Filter, set: Document) -> Result<u64, ServiceError> {
        let Some(row) = self.matching(collection, filter, 1).await?.into_iter().next() else {
            return Ok(0);
        };
        let mut body = match &row.body {
            Value::Object(map) => map.clone(),
            _ => return Err(ServiceError::Db("stored body is not an object".into())),
        };
        for (field, value) in set {
            body.insert(field, value);
        }
        let mut am: document::ActiveModel = row.into();
        am.body = Set(Value::Object(body));
        am.update(&self.db).await?;
        Ok(1)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, ServiceError> {
        Ok(Self::select(collection, filter).count(&self.db).await?)
    }

    async fn close(&self) -> Result<(), ServiceError> {
        self.db.clone().close().await?;
        info!("postgres pool closed");
        Ok(())
    }
}
