pub mod products;
pub mod appointments;
pub mod testimonials;
pub mod contacts;
pub mod status_checks;

pub use appointments::AppointmentService;
pub use contacts::ContactService;
pub use products::ProductService;
pub use status_checks::StatusCheckService;
pub use testimonials::TestimonialService;
