//! Shared building blocks for the petstore workspace: response types,
//! logging setup and runtime environment checks.

pub mod types;
pub mod utils;
pub mod env;
