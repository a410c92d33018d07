// src/gui/components/entity_panel.rs
//
// Entity list for the Compare tab. Applies ctrl/shift selection to GuiState.

use eframe::egui;

use crate::config::state::GuiState;

pub fn draw(ui: &mut egui::Ui, entities: &[String], gui: &mut GuiState) {
    ui.heading("Companies");

    let mut changed = false;
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            gui.compare_selected = (0..entities.len()).collect();
            changed = true;
        }
        if ui.button("None").clicked() {
            gui.compare_selected.clear();
            changed = true;
        }
    });

    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("entity_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for (idx, name) in entities.iter().enumerate() {
                let is_selected = gui.compare_selected.contains(&idx);
                if ui.selectable_label(is_selected, name).clicked() {
                    let m = ui.input(|i| i.modifiers);
                    gui.click_compare(idx, m.ctrl || m.command, m.shift);
                    changed = true;
                }
            }
        });

    if changed {
        logd!(
            "UI: Compare selection changed ({} companies) {:?}",
            gui.compare_selected.len(),
            &gui.compare_selected
        );
    }
}
