use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldErrors, FromPayload, PayloadReader};
use crate::{new_id, timestamp, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author_name: String,
    pub rating: i64,
    pub text: String,
    #[serde(default)]
    pub pet_name: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialCreate {
    pub author_name: String,
    pub rating: i64,
    pub text: String,
    pub pet_name: Option<String>,
}

impl Testimonial {
    pub fn new(input: TestimonialCreate) -> Self {
        Self {
            id: new_id(),
            author_name: input.author_name,
            rating: input.rating,
            text: input.text,
            pet_name: input.pet_name,
            created_at: timestamp::now(),
        }
    }
}

impl FromPayload for TestimonialCreate {
    fn from_payload(value: &Value) -> Result<Self, FieldErrors> {
        let mut r = PayloadReader::new(value);
        let input = TestimonialCreate {
            author_name: r.string("author_name"),
            rating: r.integer("rating"),
            text: r.string("text"),
            pet_name: r.optional_string("pet_name"),
        };
        r.finish(input)
    }
}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonials";
    const LIST_LIMIT: usize = 100;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_must_be_integer() {
        let v = json!({"author_name": "Ana", "rating": "4.5", "text": "ok"});
        let errs = TestimonialCreate::from_payload(&v).unwrap_err();
        assert!(errs.mentions("rating"));

        let v = json!({"author_name": "Ana", "rating": "4", "text": "ok"});
        assert_eq!(TestimonialCreate::from_payload(&v).unwrap().rating, 4);
    }
}
