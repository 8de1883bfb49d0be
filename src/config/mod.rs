// src/config/mod.rs
pub mod settings;

// Re-export commonly used types
pub use settings::{Settings, settings_path};

/// Backend address. Fixed at build time.
pub const API_BASE: &str = "http://localhost:8000";

pub const APP_NAME: &str = "insight-analyzer";
