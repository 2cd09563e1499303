use std::sync::Arc;

use models::{Product, ProductCreate, ProductFilter};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore, Filter};

pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";

/// Product catalog reads and creation.
#[derive(Clone)]
pub struct ProductService {
    products: Collection<Product>,
}

impl ProductService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { products: Collection::new(store) }
    }

    pub fn collection(&self) -> &Collection<Product> {
        &self.products
    }

    /// Products matching every given filter. An empty category is no filter.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError> {
        let mut query = Filter::all();
        if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
            query = query.eq("category", category);
        }
        if let Some(featured) = filter.featured {
            query = query.eq("featured", featured);
        }
        self.products.list(&query).await
    }

    pub async fn get(&self, id: &str) -> Result<Product, ServiceError> {
        self.products
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(PRODUCT_NOT_FOUND))
    }

    #[instrument(skip(self, input), fields(category = %input.category))]
    pub async fn create(&self, input: ProductCreate) -> Result<Product, ServiceError> {
        let product = Product::new(input);
        self.products.insert(&product).await?;
        info!(id = %product.id, "product created");
        Ok(product)
    }
}
