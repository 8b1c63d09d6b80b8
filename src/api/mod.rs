//! # HTTP API Module
//!
//! The five operations of the exercise tracker: create user, list users,
//! add exercise, retrieve a filtered log, and the static landing page.
//! Handlers translate HTTP requests into store operations and shape the
//! results into the JSON contract.

pub mod errors;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{api_routes, AppState};
pub use server::ApiServer;
