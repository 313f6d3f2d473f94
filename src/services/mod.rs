pub mod api_client;
pub mod auth_service;
pub mod error;
pub mod route_service;

pub use api_client::ApiClient;
pub use auth_service::*;
pub use error::{extract_error_message, ApiError};
pub use route_service::*;
