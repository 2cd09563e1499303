use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldErrors, FromPayload, PayloadReader};
use crate::{new_id, timestamp, Record};

/// Heartbeat record left by a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    pub fn new(input: StatusCheckCreate) -> Self {
        Self { id: new_id(), client_name: input.client_name, timestamp: timestamp::now() }
    }
}

impl FromPayload for StatusCheckCreate {
    fn from_payload(value: &Value) -> Result<Self, FieldErrors> {
        let mut r = PayloadReader::new(value);
        let input = StatusCheckCreate { client_name: r.string("client_name") };
        r.finish(input)
    }
}

impl Record for StatusCheck {
    const COLLECTION: &'static str = "status_checks";
    const LIST_LIMIT: usize = 1000;

    fn id(&self) -> &str {
        &self.id
    }
}
