use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldErrors, FromPayload, PayloadReader};
use crate::{new_id, timestamp, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn new(input: ContactMessageCreate) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            created_at: timestamp::now(),
        }
    }
}

impl FromPayload for ContactMessageCreate {
    fn from_payload(value: &Value) -> Result<Self, FieldErrors> {
        let mut r = PayloadReader::new(value);
        let input = ContactMessageCreate {
            name: r.string("name"),
            email: r.string("email"),
            phone: r.optional_string("phone"),
            message: r.string("message"),
        };
        r.finish(input)
    }
}

impl Record for ContactMessage {
    const COLLECTION: &'static str = "contact_messages";
    const LIST_LIMIT: usize = 1000;

    fn id(&self) -> &str {
        &self.id
    }
}
