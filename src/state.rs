use crate::analysis::{self, Analysis};
use crate::chart::page::ChartPage;
use crate::color::ColorMap;
use crate::data::aggregate::AggregateRow;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog (None until a file is opened).
    pub catalog: Option<Catalog>,

    /// Analyses the driver runs against the loaded catalog.
    pub analyses: Vec<Analysis>,

    /// Index of the selected analysis.
    pub selected: usize,

    /// Result rows of the selected analysis (cached).
    pub rows: Vec<AggregateRow>,

    /// Chart pages of the selected analysis (cached).
    pub pages: Vec<ChartPage>,

    /// Index of the page currently shown.
    pub page_index: usize,

    /// Bar colours for the selected analysis.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            analyses: Vec::new(),
            selected: 0,
            rows: Vec::new(),
            pages: Vec::new(),
            page_index: 0,
            color_map: ColorMap::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog and run its first analysis.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.analyses = analysis::default_set(&catalog);
        self.selected = 0;
        self.catalog = Some(catalog);
        self.status_message = None;
        self.loading = false;
        self.recompute();
    }

    /// Switch to another analysis and recompute its result and pages.
    pub fn select_analysis(&mut self, index: usize) {
        if index != self.selected && index < self.analyses.len() {
            self.selected = index;
            self.recompute();
        }
    }

    pub fn select_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.page_index = index;
        }
    }

    /// Recompute rows, pages, and colours for the selected analysis.
    fn recompute(&mut self) {
        self.rows.clear();
        self.pages.clear();
        self.page_index = 0;

        let Some(catalog) = &self.catalog else { return };
        let Some(analysis) = self.analyses.get(self.selected) else {
            return;
        };

        match analysis.rows(catalog) {
            Ok(rows) => {
                self.pages = analysis.pages(&rows);
                self.color_map = ColorMap::new(
                    self.pages
                        .iter()
                        .flat_map(|p| p.bars.iter().map(|(label, _)| label.as_str())),
                );
                self.rows = rows;
            }
            Err(e) => {
                log::error!("analysis '{}' failed: {e}", analysis.name);
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
