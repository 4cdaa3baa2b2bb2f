// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use watchref::{
    config::{options::SourceOptions, state::GuiState},
    gui, log,
};

fn main() {
    log::init();

    // Optional positional paths: watchref [chrono24.csv] [luxtech.csv]
    let mut args = std::env::args_os().skip(1);
    let sources = SourceOptions::from_env().with_overrides(args.next(), args.next());

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Watch Reference Analysis Dashboard")
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, sources) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
