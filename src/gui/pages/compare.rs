// src/gui/pages/compare.rs
use eframe::egui;

use crate::{
    config::state::GuiState,
    data::DataContext,
    gui::components::{entity_panel, plot},
    views::compare::CompareView,
};

pub struct ComparePage;
pub static PAGE: ComparePage = ComparePage;

impl super::Page for ComparePage {
    fn title(&self) -> &'static str { "Compare Companies" }

    fn draw(&self, ui: &mut egui::Ui, data: &DataContext, gui: &mut GuiState) {
        egui::SidePanel::left("compare_entities")
            .resizable(false)
            .show_inside(ui, |ui| {
                entity_panel::draw(ui, data.traffic.entities(), gui);
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            let view = CompareView::compute(data, &gui.compare_selected);
            if view.is_empty() {
                ui.label("Select one or more companies on the left.");
                return;
            }
            let h = ui.available_height();
            plot::time_series(ui, "compare_plot", &view.series, h);
        });
    }
}
