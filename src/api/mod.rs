// src/api/mod.rs
pub mod error;
pub mod pending;
pub mod transport;
pub mod client;

#[cfg(test)]
pub mod mock;

// Re-export commonly used types
pub use error::ApiError;
pub use pending::Pending;
pub use transport::{ApiRequest, ApiResponse, Completion, HttpTransport, Method, Transport};
pub use client::ApiClient;
