// src/gui/pages/detail.rs
use eframe::egui;

use crate::{
    config::state::GuiState,
    core::{dates::fmt_date, numeric::{fmt_signed_thousands, fmt_thousands}},
    data::DataContext,
    gui::{components::{data_table, metrics, plot}, table_model::TableData},
    views::detail::DetailView,
};

pub struct DetailPage;
pub static PAGE: DetailPage = DetailPage;

const HEADERS: [&str; 5] = ["Date", "Visits", "Previous Visits", "Change", "% Change"];

impl super::Page for DetailPage {
    fn title(&self) -> &'static str { "Company Detail" }

    fn draw(&self, ui: &mut egui::Ui, data: &DataContext, gui: &mut GuiState) {
        let entities = data.traffic.entities();
        if entities.is_empty() {
            ui.label("No companies in the traffic table.");
            return;
        }
        if gui.detail_entity >= entities.len() {
            gui.detail_entity = 0;
        }

        egui::ComboBox::from_label("Select a company")
            .selected_text(entities[gui.detail_entity].as_str())
            .show_ui(ui, |ui| {
                for (idx, name) in entities.iter().enumerate() {
                    if ui.selectable_value(&mut gui.detail_entity, idx, name).changed() {
                        logd!("UI: Detail entity → {}", name);
                    }
                }
            });

        let Some(view) = DetailView::compute(data, gui.detail_entity) else { return };

        ui.add_space(6.0);
        metrics::draw(ui, &[
            ("Latest Visits", view.latest_visits_text()),
            ("Monthly Change", view.monthly_change_text()),
            ("% Change", view.pct_change_text()),
        ]);
        ui.add_space(6.0);

        plot::time_series(ui, "detail_plot", std::slice::from_ref(&view.series), 260.0);

        ui.separator();

        let na = || s!("n/a");
        let rows = view
            .rows
            .iter()
            .map(|r| {
                vec![
                    fmt_date(r.date),
                    fmt_thousands(r.visits),
                    r.previous.map(fmt_thousands).unwrap_or_else(na),
                    r.change.map(fmt_signed_thousands).unwrap_or_else(na),
                    r.pct_change.to_string(),
                ]
            })
            .collect();
        let table = TableData::with_labels(&HEADERS, rows);
        data_table::draw(ui, "detail_table", &table, self.non_numeric_columns());
    }
}
