use std::sync::Arc;

use models::{Testimonial, TestimonialCreate};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore, Filter};

#[derive(Clone)]
pub struct TestimonialService {
    testimonials: Collection<Testimonial>,
}

impl TestimonialService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { testimonials: Collection::new(store) }
    }

    pub fn collection(&self) -> &Collection<Testimonial> {
        &self.testimonials
    }

    pub async fn list(&self) -> Result<Vec<Testimonial>, ServiceError> {
        self.testimonials.list(&Filter::all()).await
    }

    pub async fn create(&self, input: TestimonialCreate) -> Result<Testimonial, ServiceError> {
        let testimonial = Testimonial::new(input);
        self.testimonials.insert(&testimonial).await?;
        info!(id = %testimonial.id, rating = testimonial.rating, "testimonial created");
        Ok(testimonial)
    }
}
