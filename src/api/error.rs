// src/api/error.rs
use thiserror::Error;

/// Failure of a backend call. Panels never show these to the user; they
/// are logged and turned into a degraded view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, or a body that isn't the JSON we expect.
    #[error("request failed: {0}")]
    FetchFailed(String),
    #[error("server responded {status} {status_text}")]
    ServerError { status: u16, status_text: String },
}
