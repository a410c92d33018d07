// src/gui/pages/overview.rs
use eframe::egui;

use crate::{
    config::state::GuiState,
    data::DataContext,
    gui::{components::{data_table, plot}, table_model::TableData},
    views::overview::OverviewView,
};

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

impl super::Page for OverviewPage {
    fn title(&self) -> &'static str { "Overview" }

    fn draw(&self, ui: &mut egui::Ui, data: &DataContext, _gui: &mut GuiState) {
        let view = OverviewView::compute(data);

        ui.label("Monthly visits, all companies");
        plot::time_series(ui, "overview_plot", &view.series, 320.0);

        ui.separator();

        let table = TableData::with(Some(view.headers), view.rows);
        data_table::draw(ui, "overview_table", &table, self.non_numeric_columns());
    }
}
