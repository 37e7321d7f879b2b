mod analysis;
mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PartscopeApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional catalog path on the command line, loaded before the first
    // frame.
    let initial = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Partscope – Component Catalog Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(PartscopeApp::with_catalog(initial)))),
    )
}
