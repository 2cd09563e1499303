//! OpenAPI document for the `/api` routes, served as JSON.
//!
//! Schemas here mirror the serialized records; they only feed the document.

use chrono::{DateTime, Utc};
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct DetailDoc { pub detail: String }

#[derive(ToSchema)]
pub struct StatusCheckCreateDoc { pub client_name: String }

#[derive(ToSchema)]
pub struct StatusCheckDoc { pub id: String, pub client_name: String, pub timestamp: DateTime<Utc> }

#[derive(ToSchema)]
pub struct ProductCreateDoc {
    pub name: String,
    pub description: String,
    #[schema(minimum = 0.0)]
    pub price: f64,
    pub category: String,
    pub image_url: String,
    #[schema(default = 0)]
    pub stock: Option<i64>,
    #[schema(default = false)]
    pub featured: Option<bool>,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub stock: i64,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema)]
pub struct AppointmentCreateDoc {
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

#[derive(ToSchema)]
pub struct AppointmentDoc {
    pub id: String,
    pub pet_name: String,
    pub pet_type: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: Option<String>,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema)]
pub struct TestimonialCreateDoc {
    pub author_name: String,
    pub rating: i64,
    pub text: String,
    pub pet_name: Option<String>,
}

#[derive(ToSchema)]
pub struct TestimonialDoc {
    pub id: String,
    pub author_name: String,
    pub rating: i64,
    pub text: String,
    pub pet_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema)]
pub struct ContactMessageCreateDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(ToSchema)]
pub struct ContactMessageDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: String, pub name: String, pub icon: String }

#[derive(ToSchema)]
pub struct CategoriesDoc { pub categories: Vec<CategoryDoc> }

#[derive(ToSchema)]
pub struct ClinicServiceDoc { pub id: String, pub name: String, pub description: String, pub duration: String }

#[derive(ToSchema)]
pub struct ServicesDoc { pub services: Vec<ClinicServiceDoc> }

#[derive(ToSchema)]
pub struct AvailableTimesDoc { pub available_times: Vec<String> }

#[derive(OpenApi)]
#[openapi(
    info(title = "Petstore Dr. Artur Teixeira API"),
    paths(
        crate::routes::health,
        crate::routes::root::index,
        crate::routes::status::create,
        crate::routes::status::list,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::appointments::list,
        crate::routes::appointments::create,
        crate::routes::appointments::get,
        crate::routes::appointments::update_status,
        crate::routes::testimonials::list,
        crate::routes::testimonials::create,
        crate::routes::contact::create,
        crate::routes::catalog::categories,
        crate::routes::catalog::services,
        crate::routes::catalog::available_times,
        crate::routes::seed::seed,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            DetailDoc,
            StatusCheckCreateDoc,
            StatusCheckDoc,
            ProductCreateDoc,
            ProductDoc,
            AppointmentCreateDoc,
            AppointmentDoc,
            TestimonialCreateDoc,
            TestimonialDoc,
            ContactMessageCreateDoc,
            ContactMessageDoc,
            CategoryDoc,
            CategoriesDoc,
            ClinicServiceDoc,
            ServicesDoc,
            AvailableTimesDoc,
        )
    ),
    tags(
        (name = "info"),
        (name = "status"),
        (name = "products"),
        (name = "appointments"),
        (name = "testimonials"),
        (name = "contact"),
        (name = "catalog"),
        (name = "seed")
    )
)]
pub struct ApiDoc;
