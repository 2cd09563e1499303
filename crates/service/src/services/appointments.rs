use std::sync::Arc;

use models::{Appointment, AppointmentCreate};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore, Filter};

pub const APPOINTMENT_NOT_FOUND: &str = "Agendamento não encontrado";

#[derive(Clone)]
pub struct AppointmentService {
    appointments: Collection<Appointment>,
}

impl AppointmentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { appointments: Collection::new(store) }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, ServiceError> {
        self.appointments.list(&Filter::all()).await
    }

    pub async fn get(&self, id: &str) -> Result<Appointment, ServiceError> {
        self.appointments
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(APPOINTMENT_NOT_FOUND))
    }

    #[instrument(skip(self, input), fields(service_type = %input.service_type, date = %input.date))]
    pub async fn create(&self, input: AppointmentCreate) -> Result<Appointment, ServiceError> {
        let appointment = Appointment::new(input);
        self.appointments.insert(&appointment).await?;
        info!(id = %appointment.id, "appointment created");
        Ok(appointment)
    }

    /// Replace only the status. Any string is accepted.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &str, status: &str) -> Result<(), ServiceError> {
        let mut fields = Map::new();
        fields.insert("status".into(), Value::String(status.to_string()));
        if !self.appointments.set_fields(id, fields).await? {
            return Err(ServiceError::not_found(APPOINTMENT_NOT_FOUND));
        }
        info!("appointment status updated");
        Ok(())
    }
}
