use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart view (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart page as a horizontal bar chart.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let Some(page) = state.pages.get(state.page_index) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog to view charts  (File → Open…)");
        });
        return;
    };

    let labels: Vec<String> = page.bars.iter().map(|(label, _)| label.clone()).collect();

    let bars: Vec<Bar> = page
        .bars
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, *value)
                .name(label)
                .fill(state.color_map.color_for(label))
                .width(0.6)
        })
        .collect();

    let chart = BarChart::new(bars).horizontal();

    Plot::new("catalog_chart")
        .x_axis_label(page.title.clone())
        .y_axis_label(page.category_label.clone())
        // bar positions are integer slots; label them with the category names
        .y_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > 1e-6 || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
