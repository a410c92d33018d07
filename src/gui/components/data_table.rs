// src/gui/components/data_table.rs
//
// Draws a read-only table. Numeric columns are centered, text columns left-aligned.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableData;

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

pub fn draw(ui: &mut egui::Ui, id_salt: &str, table: &TableData, non_numeric: &[usize]) {
    let cols = table.ncols();
    if cols == 0 {
        ui.label("No data.");
        return;
    }

    // Reserve space for scroll bars instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let widths: Vec<f32> = (0..cols)
        .map(|ci| if non_numeric.contains(&ci) { 180.0 } else { 110.0 })
        .collect();

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt((id_salt, "hscroll"))
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .min_scrolled_height(0.0);
            for w in &widths {
                builder = builder.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(HEADER_H, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = egui::Label::new(RichText::new(table.header(ci)).strong())
                                .selectable(false);
                            if non_numeric.contains(&ci) {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                            } else {
                                ui.centered_and_justified(|ui| { ui.add(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.nrows(), |mut row| {
                        let ri = row.index();
                        for ci in 0..cols {
                            let cell = table.cell(ri, ci);
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if non_numeric.contains(&ci) {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                } else {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
