// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod diagnostics;
mod file;
mod model;
mod state;
mod ui;

use app::AnalyzerApp;
use config::{Settings, settings_path};
use file::SettingsFileHandler;

fn main() -> Result<()> {
    // Read-only: a missing file means defaults, nothing is written back.
    let loaded = match settings_path() {
        Some(path) => SettingsFileHandler::new().load_or_default(&path),
        None => Ok(Settings::default()),
    };
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(&settings.log_filter);

    if let Err(e) = &loaded {
        tracing::warn!("Using default settings: {:#}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("E-Commerce AI Analyzer"),
        ..Default::default()
    };

    tracing::info!(backend = config::API_BASE, "starting");
    eframe::run_native(
        "Insight Analyzer",
        options,
        Box::new(|cc| Box::new(AnalyzerApp::new(cc))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
