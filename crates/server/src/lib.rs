pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use routes::{build_router, AppState};
pub use startup::{build_cors, run, run_with_config};
