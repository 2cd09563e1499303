//! Domain records of the petstore API.
//!
//! Each record type pairs a stored struct (with generated `id` and creation
//! moment) with a `*Create` input built from a request payload through
//! [`validation::FromPayload`].

use serde::{de::DeserializeOwned, Serialize};

pub mod errors;
pub mod validation;
pub mod timestamp;
pub mod product;
pub mod appointment;
pub mod testimonial;
pub mod contact;
pub mod status_check;
pub mod document;
pub mod db;

pub use appointment::{Appointment, AppointmentCreate};
pub use contact::{ContactMessage, ContactMessageCreate};
pub use product::{Product, ProductCreate, ProductFilter};
pub use status_check::{StatusCheck, StatusCheckCreate};
pub use testimonial::{Testimonial, TestimonialCreate};

/// A record stored in its own collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
    /// Upper bound on documents returned by a list call.
    const LIST_LIMIT: usize;

    fn id(&self) -> &str;
}

/// Fresh random identifier (UUID v4 text).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn collections_and_limits() {
        assert_eq!(Product::COLLECTION, "products");
        assert_eq!(Product::LIST_LIMIT, 100);
        assert_eq!(Testimonial::LIST_LIMIT, 100);
        assert_eq!(Appointment::LIST_LIMIT, 1000);
        assert_eq!(StatusCheck::COLLECTION, "status_checks");
        assert_eq!(ContactMessage::COLLECTION, "contact_messages");
    }
}
