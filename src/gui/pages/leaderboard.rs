// src/gui/pages/leaderboard.rs
use eframe::egui;

use crate::{
    config::state::GuiState,
    data::DataContext,
    gui::{components::data_table, table_model::TableData},
    views::leaderboard::{LeaderboardView, LEADERBOARD_HEADERS},
};

pub struct LeaderboardPage;
pub static PAGE: LeaderboardPage = LeaderboardPage;

impl super::Page for LeaderboardPage {
    fn title(&self) -> &'static str { "Most Visited Companies" }

    fn draw(&self, ui: &mut egui::Ui, data: &DataContext, _gui: &mut GuiState) {
        let view = LeaderboardView::compute(data);
        if let Some(d) = data.traffic.dates().last() {
            ui.label(format!("Ranked by visits on {}", crate::core::dates::fmt_date(*d)));
        }
        let table = TableData::with_labels(&LEADERBOARD_HEADERS, view.rows());
        data_table::draw(ui, "leaderboard_table", &table, self.non_numeric_columns());
    }
}
