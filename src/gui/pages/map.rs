// src/gui/pages/map.rs
//
// Store locations on a longitude/latitude plane. No tile layer is drawn.

use eframe::egui::{self, Color32, RichText};
use egui_plot::{Plot, PlotPoint, Points};

use crate::{
    config::state::GuiState,
    data::DataContext,
    views::map::{MapView, MarkerColor, LEGEND},
};

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

const MARKER_RADIUS: f32 = 4.0;

fn color32(c: MarkerColor) -> Color32 {
    match c {
        MarkerColor::Blue => Color32::from_rgb(0x1F, 0x77, 0xB4),
        MarkerColor::Green => Color32::from_rgb(0x2C, 0xA0, 0x2C),
        MarkerColor::Red => Color32::from_rgb(0xD6, 0x27, 0x28),
    }
}

fn legend(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for (label, color) in LEGEND {
            ui.label(RichText::new("●").color(color32(color)));
            ui.label(label);
            ui.add_space(10.0);
        }
    });
}

impl super::Page for MapPage {
    fn title(&self) -> &'static str { "Map of Retail Stores" }

    fn draw(&self, ui: &mut egui::Ui, data: &DataContext, _gui: &mut GuiState) {
        let view = MapView::compute(data);

        if let Some(err) = &view.error {
            ui.colored_label(ui.visuals().error_fg_color, format!("Store table unavailable: {err}"));
            return;
        }

        legend(ui);
        if view.skipped > 0 {
            ui.label(RichText::new(format!("{} store(s) without coordinates not shown", view.skipped)).weak());
        }

        let (lat0, lng0) = view.center;
        let half = view.span_deg / 2.0;

        Plot::new("stores_map")
            .data_aspect(1.0)
            .include_x(lng0 - half)
            .include_x(lng0 + half)
            .include_y(lat0 - half)
            .include_y(lat0 + half)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .label_formatter(|name: &str, p: &PlotPoint| {
                if name.is_empty() {
                    return s!();
                }
                view.nearest(p.x, p.y).map(|m| m.popup()).unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for color in [MarkerColor::Blue, MarkerColor::Green, MarkerColor::Red] {
                    let pts: Vec<[f64; 2]> = view
                        .markers
                        .iter()
                        .filter(|m| m.color == color)
                        .map(|m| [m.lng, m.lat])
                        .collect();
                    if pts.is_empty() {
                        continue;
                    }
                    let name = LEGEND
                        .iter()
                        .find(|(_, c)| *c == color)
                        .map(|(l, _)| *l)
                        .unwrap_or("Other");
                    plot_ui.points(
                        Points::new(name, pts)
                            .color(color32(color))
                            .radius(MARKER_RADIUS),
                    );
                }
            });
    }
}
