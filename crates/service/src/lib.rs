//! Service layer of the petstore API.
//! - Storage backends behind [`storage::DocumentStore`].
//! - One service per record kind, built on typed collections.
//! - Static clinic reference data and the sample-data seeder.

use std::sync::Arc;

use tokio::sync::Mutex;

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod services;
pub mod reference;
pub mod seed;

use errors::ServiceError;
use services::{AppointmentService, ContactService, ProductService, StatusCheckService, TestimonialService};
use storage::DocumentStore;

/// Every service wired to one shared store. Cheap to clone.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
    seed_lock: Arc<Mutex<()>>,
    pub products: ProductService,
    pub appointments: AppointmentService,
    pub testimonials: TestimonialService,
    pub contacts: ContactService,
    pub status_checks: StatusCheckService,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            products: ProductService::new(store.clone()),
            appointments: AppointmentService::new(store.clone()),
            testimonials: TestimonialService::new(store.clone()),
            contacts: ContactService::new(store.clone()),
            status_checks: StatusCheckService::new(store.clone()),
            store,
            seed_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Insert sample products and testimonials into empty collections.
    /// Runs are serialized so concurrent calls cannot both see an empty collection.
    pub async fn seed(&self) -> Result<seed::SeedReport, ServiceError> {
        let _guard = self.seed_lock.lock().await;
        seed::seed_initial_data(self.products.collection(), self.testimonials.collection()).await
    }

    pub async fn close(&self) -> Result<(), ServiceError> {
        self.store.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::ProductFilter;

    #[tokio::test]
    async fn seed_through_app_services() -> anyhow::Result<()> {
        let (store, dir) = test_support::temp_store().await?;
        let app = AppServices::new(store);
        app.seed().await?;
        let featured = app
            .products
            .list(&ProductFilter { category: None, featured: Some(true) })
            .await?;
        assert_eq!(featured.len(), 4);
        assert_eq!(app.testimonials.list().await?.len(), 5);
        app.close().await?;
        let _ = tokio::fs::remove_dir_all(dir).await;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_seeds_insert_once() -> anyhow::Result<()> {
        let (store, dir) = test_support::temp_store().await?;
        let app = AppServices::new(store);
        let runs: Vec<_> = (0..8)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move { app.seed().await })
            })
            .collect();
        let mut inserted = 0;
        for run in runs {
            inserted += run.await??.products;
        }
        assert_eq!(inserted, 8);
        assert_eq!(app.products.collection().count().await?, 8);
        assert_eq!(app.testimonials.list().await?.len(), 5);
        let _ = tokio::fs::remove_dir_all(dir).await;
        Ok(())
    }
}
