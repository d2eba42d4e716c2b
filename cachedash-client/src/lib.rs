pub mod client;
pub mod config;
pub mod error;

// Re-export key items for easier access
pub use client::{shared, ApiClient};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
