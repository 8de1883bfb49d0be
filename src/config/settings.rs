// src/config/settings.rs
use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use super::APP_NAME;

/// Startup options. Read once; nothing here changes while the app runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    /// `tracing-subscriber` filter directive, e.g. `"info"` or `"insight_analyzer=debug"`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1024.0,
            window_height: 768.0,
            log_filter: "info".to_string(),
        }
    }
}

/// `<config dir>/insight-analyzer/settings.ron`, when the platform has a config dir.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("settings.ron"))
}
