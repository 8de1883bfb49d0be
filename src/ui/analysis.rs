// src/ui/analysis.rs
use eframe::egui;
use crate::state::{AnalysisPanel, AnalysisPhase, Services};
use crate::state::analysis_state::ResultSection;

const QUERY_HINT: &str = "Ask about your e-commerce data...";
const BUTTON_WIDTH: f32 = 130.0;

pub fn show_analysis_view(ui: &mut egui::Ui, panel: &mut AnalysisPanel, services: &Services) {
    show_query_box(ui, panel, services);
    ui.add_space(8.0);

    if let Some(message) = panel.error() {
        ui.colored_label(egui::Color32::from_rgb(230, 90, 90), format!("⚠ {}", message));
        ui.add_space(8.0);
    }

    if let AnalysisPhase::Success { result, received_at } = panel.phase() {
        ui.separator();
        ui.horizontal(|ui| {
            ui.heading(format!("Query: {}", result.query));
            ui.label(
                egui::RichText::new(&result.status)
                    .strong()
                    .background_color(ui.visuals().faint_bg_color)
            );
            if let Some(steps) = result.results.as_ref().and_then(|r| r.total_steps) {
                ui.label(format!("{} steps", steps));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(received_at.format("%H:%M:%S").to_string()).weak());
            });
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_source("analysis_results_scroll")
            .show(ui, |ui| {
                for section in panel.sections() {
                    show_section(ui, &section);
                }
            });
    }
}

fn show_query_box(ui: &mut egui::Ui, panel: &mut AnalysisPanel, services: &Services) {
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut panel.query)
                .hint_text(QUERY_HINT)
                .desired_width(query_width(ui.available_width()))
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            panel.on_enter(services);
        }

        let label = if panel.is_submitting() { "Analyzing..." } else { "Analyze" };
        let clicked = ui
            .add_enabled(panel.can_submit(), egui::Button::new(label))
            .clicked();
        if panel.is_submitting() {
            ui.spinner();
        }
        if clicked {
            panel.submit(services);
        }
    });
}

/// Room left for the query field once the button is placed.
fn query_width(available: f32) -> f32 {
    (available - BUTTON_WIDTH).max(0.0)
}

fn show_section(ui: &mut egui::Ui, section: &ResultSection) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(section.title).heading());
        ui.add_space(4.0);
        if section.preformatted {
            ui.label(egui::RichText::new(&section.body).monospace());
        } else {
            ui.label(&section.body);
        }
    });
    ui.add_space(8.0);
}
