// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, RichText};

use crate::{
    config::state::{AppState, GuiState},
    data::DataContext,
};

use super::{components::tabs, pages::Page, router};

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    data: DataContext,
) -> Result<(), Box<dyn Error>> {
    let title = state.options.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, data)))),
    )?;
    Ok(())
}

pub struct App {
    // view selections (UI thread only)
    pub state: AppState,

    // read-only tables shared by every page
    pub data: DataContext,
}

impl App {
    pub fn new(mut state: AppState, data: DataContext) -> Self {
        state.gui = GuiState::for_entities(data.traffic.entity_count(), &state.options);
        logf!(
            "Init: entities={}, dates={}, stores={}, default page={}",
            data.traffic.entity_count(),
            data.traffic.len(),
            data.stores.len(),
            router::page_at(state.gui.current_page_index).title()
        );
        Self { state, data }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(RichText::new(&self.state.options.title).strong());
            if !self.state.options.subtitle.is_empty() {
                ui.label(RichText::new(&self.state.options.subtitle).weak());
            }
            ui.add_space(4.0);
            tabs::draw(ui, self);
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.draw(ui, &self.data, &mut self.state.gui);
        });
    }
}
