use std::sync::Arc;

use models::{StatusCheck, StatusCheckCreate};
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore, Filter};

/// Heartbeat audit trail.
#[derive(Clone)]
pub struct StatusCheckService {
    checks: Collection<StatusCheck>,
}

impl StatusCheckService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { checks: Collection::new(store) }
    }

    pub async fn create(&self, input: StatusCheckCreate) -> Result<StatusCheck, ServiceError> {
        let check = StatusCheck::new(input);
        self.checks.insert(&check).await?;
        debug!(id = %check.id, client = %check.client_name, "status check recorded");
        Ok(check)
    }

    pub async fn list(&self) -> Result<Vec<StatusCheck>, ServiceError> {
        self.checks.list(&Filter::all()).await
    }
}
