use std::sync::Arc;

use models::{ContactMessage, ContactMessageCreate};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};

/// Messages left through the contact form. Write-only over HTTP.
#[derive(Clone)]
pub struct ContactService {
    messages: Collection<ContactMessage>,
}

impl ContactService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { messages: Collection::new(store) }
    }

    pub async fn create(&self, input: ContactMessageCreate) -> Result<ContactMessage, ServiceError> {
        let message = ContactMessage::new(input);
        self.messages.insert(&message).await?;
        info!(id = %message.id, "contact message stored");
        Ok(message)
    }

    pub async fn get(&self, id: &str) -> Result<Option<ContactMessage>, ServiceError> {
        self.messages.get(id).await
    }
}
