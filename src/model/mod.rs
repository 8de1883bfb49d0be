// src/model/mod.rs
pub mod insight;
pub mod analysis;

// Re-export commonly used types
pub use insight::{Insight, InsightsResponse};
pub use analysis::{AnalysisRequest, AnalysisResult};
