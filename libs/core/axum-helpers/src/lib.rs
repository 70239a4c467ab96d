//! Shared Axum plumbing: the application error type, validated JSON
//! extraction, and server startup with graceful shutdown.

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, AppResult, ErrorResponse};
pub use extractors::ValidatedJson;
pub use server::create_app;
