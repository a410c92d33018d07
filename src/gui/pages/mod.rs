// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::state::GuiState, data::DataContext};

pub mod compare;
pub mod detail;
pub mod leaderboard;
pub mod map;
pub mod overview;

/// One dashboard tab.
///
/// Pages read the shared `DataContext` and may only change the window's
/// `GuiState` (selected entity, compare picks). Each frame recomputes the view.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Columns drawn left-aligned; everything else is centered as a number.
    fn non_numeric_columns(&self) -> &'static [usize] {
        &[0]
    }

    fn draw(&self, ui: &mut egui::Ui, data: &DataContext, gui: &mut GuiState);
}
