use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – analysis and page selection
// ---------------------------------------------------------------------------

/// Render the left analysis panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analyses");
    ui.separator();

    if state.catalog.is_none() {
        ui.label("No catalog loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the loop.
    let names: Vec<String> = state.analyses.iter().map(|a| a.name.clone()).collect();
    let page_titles: Vec<String> = state.pages.iter().map(|p| p.title.clone()).collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, name) in names.iter().enumerate() {
                if ui.selectable_label(state.selected == i, name).clicked() {
                    state.select_analysis(i);
                }
            }

            if page_titles.len() > 1 {
                ui.separator();
                ui.strong("Pages");
                for (i, title) in page_titles.iter().enumerate() {
                    if ui.selectable_label(state.page_index == i, title).clicked() {
                        state.select_page(i);
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom panel – result table
// ---------------------------------------------------------------------------

/// Tabular view of the selected analysis result.
pub fn result_table(ui: &mut Ui, state: &AppState) {
    if state.rows.is_empty() {
        ui.label("No result rows.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Value");
            });
            header.col(|ui| {
                ui.strong("Count");
            });
            header.col(|ui| {
                ui.strong("Avg price");
            });
        })
        .body(|mut body| {
            for row in &state.rows {
                body.row(16.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.value);
                    });
                    table_row.col(|ui| {
                        ui.label(row.count.to_string());
                    });
                    table_row.col(|ui| {
                        let text = row
                            .average_price
                            .map(|p| format!("{p:.2}"))
                            .unwrap_or_else(|| "-".to_string());
                        ui.label(text);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(!state.rows.is_empty(), egui::Button::new("Export result…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} components, {} columns, {} analyses",
                catalog.len(),
                catalog.columns.len(),
                state.analyses.len()
            ));
        }

        ui.separator();

        if state.loading {
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open component catalog")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} components with columns {:?}",
                    catalog.len(),
                    catalog.columns
                );
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export analysis result")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .set_file_name("analysis.csv")
        .save_file();

    if let Some(path) = file {
        match crate::data::export::write_rows(&path, &state.rows) {
            Ok(()) => {
                log::info!("Exported {} rows to {}", state.rows.len(), path.display());
                state.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
