use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PartscopeApp {
    pub state: AppState,
}

impl PartscopeApp {
    /// Start with an optionally preloaded catalog (path from the command
    /// line); load failures land in the status line instead of aborting.
    pub fn with_catalog(path: Option<PathBuf>) -> Self {
        let mut state = AppState::default();

        if let Some(path) = path {
            match crate::data::loader::load_file(&path) {
                Ok(catalog) => {
                    log::info!(
                        "Loaded {} components from {}",
                        catalog.len(),
                        path.display()
                    );
                    state.set_catalog(catalog);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e:#}", path.display());
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
        }

        Self { state }
    }
}

impl eframe::App for PartscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: analyses and pages ----
        egui::SidePanel::left("analysis_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: result table ----
        egui::TopBottomPanel::bottom("result_table")
            .default_height(160.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::result_table(ui, &self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_panel(ui, &self.state);
        });
    }
}
