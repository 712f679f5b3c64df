use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The loaded series and their display colors, independent of rendering.
pub struct AppState {
    /// Loaded series, in plot order.
    pub series: Vec<Series>,
    /// One color per series, assigned at load time.
    colors: Vec<Color32>,
}

impl AppState {
    /// Ingest the loaded series and assign each a distinct color.
    pub fn new(series: Vec<Series>) -> Self {
        let colors = generate_palette(series.len());
        Self { series, colors }
    }

    /// Color assigned to the series at `idx`.
    pub fn color_for(&self, idx: usize) -> Color32 {
        self.colors.get(idx).copied().unwrap_or(Color32::LIGHT_BLUE)
    }

    /// Total points across all series (for the top bar).
    pub fn total_points(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}
