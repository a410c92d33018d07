// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use presence_dash::{
    config::{options::PipelineConfig, state::AppState},
    data::DataContext,
    gui, log,
};

fn main() {
    dotenv::dotenv().ok();
    let _guard = log::init();

    let cfg = match PipelineConfig::load(None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config failed: {e}");
            std::process::exit(1);
        }
    };

    let data = match DataContext::load(&cfg.dashboard, &cfg.merge.join_key) {
        Ok(d) => d,
        Err(e) => {
            presence_dash::loge!("Traffic table failed to load: {e}");
            eprintln!("Traffic table failed to load: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState { options: cfg.dashboard, ..AppState::default() };
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(state.options.title.clone())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, data) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
