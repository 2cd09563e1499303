use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldErrors, FromPayload, PayloadReader};
use crate::{new_id, timestamp, Record};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub featured: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub stock: i64,
    pub featured: bool,
}

impl Product {
    pub fn new(input: ProductCreate) -> Self {
        Self {
            id: new_id(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            image_url: input.image_url,
            stock: input.stock,
            featured: input.featured,
            created_at: timestamp::now(),
        }
    }
}

impl FromPayload for ProductCreate {
    fn from_payload(value: &Value) -> Result<Self, FieldErrors> {
        let mut r = PayloadReader::new(value);
        let input = ProductCreate {
            name: r.string("name"),
            description: r.string("description"),
            price: r.non_negative_number("price"),
            category: r.string("category"),
            image_url: r.string("image_url"),
            stock: r.integer_or("stock", 0),
            featured: r.boolean_or("featured", false),
        };
        r.finish(input)
    }
}

impl Record for Product {
    const COLLECTION: &'static str = "products";
    const LIST_LIMIT: usize = 100;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Optional list filters; both present means both must match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}
