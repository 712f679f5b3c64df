use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: series summary with color swatches.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Convergence Viewer").strong());
        ui.separator();

        for (idx, series) in state.series.iter().enumerate() {
            let text = RichText::new(format!("{}: {} points", series.label, series.len()))
                .color(state.color_for(idx));
            ui.label(text);
            ui.separator();
        }

        ui.label(format!("{} points total", state.total_points()));
    });
}
