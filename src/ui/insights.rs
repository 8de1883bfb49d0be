// src/ui/insights.rs
use eframe::egui;
use crate::model::Insight;
use crate::state::{InsightsPanel, InsightsPhase};

const CARD_WIDTH: f32 = 240.0;

pub fn show_insights_view(ui: &mut egui::Ui, panel: &InsightsPanel) {
    match panel.phase() {
        InsightsPhase::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label("Loading insights...");
            });
        }
        // A failed fetch falls through to an empty grid.
        InsightsPhase::Ready(_) | InsightsPhase::FailedSilently => {
            egui::ScrollArea::vertical()
                .id_source("insights_scroll")
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for insight in panel.cards() {
                            show_insight_card(ui, insight);
                        }
                    });
                });
        }
    }
}

fn show_insight_card(ui: &mut egui::Ui, insight: &Insight) {
    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&insight.metric).small().weak());
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&insight.value).size(22.0).strong());
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("▲ {}", insight.trend))
                    .color(egui::Color32::from_rgb(80, 200, 120))
            );
        });
    });
}
