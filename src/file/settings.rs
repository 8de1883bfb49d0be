// src/file/settings.rs
use super::FileHandler;
use crate::config::Settings;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

#[derive(Debug)]
pub struct SettingsFileHandler;

impl SettingsFileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Defaults when the file doesn't exist yet. Anything else that goes
    /// wrong is an error for the caller to report.
    pub fn load_or_default(&self, path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        self.load(path)
    }
}

impl FileHandler<Settings> for SettingsFileHandler {
    fn load(&self, path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        ron::from_str(&content).context("Failed to parse settings file")
    }

    fn save(&self, data: &Settings, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
        )?;
        fs::write(path, content)?;
        Ok(())
    }
}
