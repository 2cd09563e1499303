use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid payload: {0}")]
    InvalidPayload(FieldErrors),
    #[error("corrupt document: {0}")]
    Decode(String),
}

impl From<FieldErrors> for ModelError {
    fn from(errors: FieldErrors) -> Self {
        Self::InvalidPayload(errors)
    }
}
