// src/gui/components/metrics.rs
use eframe::egui::{self, RichText};

/// Row of headline numbers: small caption above, large value below.
pub fn draw(ui: &mut egui::Ui, items: &[(&str, String)]) {
    ui.columns(items.len().max(1), |cols| {
        for (col, (caption, value)) in cols.iter_mut().zip(items) {
            col.vertical(|ui| {
                ui.label(RichText::new(*caption).small().weak());
                ui.label(RichText::new(value).size(26.0).strong());
            });
        }
    });
}
