use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldErrors, FromPayload, PayloadReader};
use crate::{new_id, timestamp, Record};

/// Status given to every new appointment. Any other string may be set later.
pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub pet_name: String,
    pub pet_type: String,
    pub owner_name: String,
    pub owner_phone: String,
    #[serde(default)]
    pub owner_email: Option<String>,
    pub service_type: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCreate {
    pub pet_name: String,
    pub pet_type: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: Option<String>,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn new(input: AppointmentCreate) -> Self {
        Self {
            id: new_id(),
            pet_name: input.pet_name,
            pet_type: input.pet_type,
            owner_name: input.owner_name,
            owner_phone: input.owner_phone,
            owner_email: input.owner_email,
            service_type: input.service_type,
            date: input.date,
            time: input.time,
            notes: input.notes,
            status: default_status(),
            created_at: timestamp::now(),
        }
    }
}

impl FromPayload for AppointmentCreate {
    fn from_payload(value: &Value) -> Result<Self, FieldErrors> {
        let mut r = PayloadReader::new(value);
        let input = AppointmentCreate {
            pet_name: r.string("pet_name"),
            pet_type: r.string("pet_type"),
            owner_name: r.string("owner_name"),
            owner_phone: r.string("owner_phone"),
            owner_email: r.optional_string("owner_email"),
            service_type: r.string("service_type"),
            date: r.string("date"),
            time: r.string("time"),
            notes: r.optional_string("notes"),
        };
        r.finish(input)
    }
}

impl Record for Appointment {
    const COLLECTION: &'static str = "appointments";
    const LIST_LIMIT: usize = 1000;

    fn id(&self) -> &str {
        &self.id
    }
}
