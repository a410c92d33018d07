// src/gui/components/plot.rs
//
// Line chart of one or more visit series against a date axis.

use eframe::egui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, PlotPoints};

use crate::core::dates::{date_to_x, fmt_date, fmt_month, x_to_date};
use crate::core::numeric::fmt_thousands;
use crate::views::Series;

pub fn time_series(ui: &mut egui::Ui, id_salt: &str, series: &[Series], height: f32) {
    Plot::new(id_salt)
        .height(height)
        .legend(Legend::default())
        .allow_scroll(false)
        .include_y(0.0)
        .x_axis_formatter(|mark: GridMark, _range| {
            x_to_date(mark.value).map(fmt_month).unwrap_or_default()
        })
        .y_axis_formatter(|mark: GridMark, _range| {
            if mark.value < 0.0 { s!() } else { fmt_thousands(mark.value.round() as u64) }
        })
        .label_formatter(|name: &str, p: &PlotPoint| {
            let date = x_to_date(p.x).map(fmt_date).unwrap_or_default();
            let visits = fmt_thousands(p.y.max(0.0).round() as u64);
            if name.is_empty() {
                format!("{date}\n{visits}")
            } else {
                format!("{name}\n{date}\n{visits}")
            }
        })
        .show(ui, |plot_ui| {
            for s in series {
                let points: Vec<[f64; 2]> = s
                    .points
                    .iter()
                    .map(|(d, v)| [date_to_x(*d), *v as f64])
                    .collect();
                plot_ui.line(Line::new(s.name.clone(), PlotPoints::from(points)));
            }
        });
}
