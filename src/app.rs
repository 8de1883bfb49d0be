// src/app.rs
use eframe::egui;
use std::sync::Arc;

use crate::api::{ApiClient, HttpTransport};
use crate::config::API_BASE;
use crate::diagnostics::TracingSink;
use crate::state::{MountedPanel, Services, Shell, Tab};

const TITLE: &str = "E-COMMERCE AI ANALYZER";
const SUBTITLE: &str = "AI-powered insights from your Snowflake data warehouse";

pub struct AnalyzerApp {
    shell: Shell,
}

impl AnalyzerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let transport = HttpTransport::with_repaint(cc.egui_ctx.clone());
        Self::with_services(Services {
            client: ApiClient::new(API_BASE, Arc::new(transport)),
            sink: Arc::new(TracingSink),
        })
    }

    pub fn with_services(services: Services) -> Self {
        Self {
            shell: Shell::new(services),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(TITLE).size(24.0).strong());
            ui.label(egui::RichText::new(SUBTITLE).weak());
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                if ui.selectable_label(self.shell.current_tab() == tab, tab.label()).clicked() {
                    self.shell.select(tab);
                }
            }
        });
        ui.add_space(4.0);
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shell.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("Backend: {}", self.shell.base_url())).small().weak());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (panel, services) = self.shell.panel_mut();
            match panel {
                MountedPanel::Insights(panel) => {
                    crate::ui::insights::show_insights_view(ui, panel);
                },
                MountedPanel::Analysis(panel) => {
                    crate::ui::analysis::show_analysis_view(ui, panel, services);
                },
            }
        });
    }
}
