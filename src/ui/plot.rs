use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Convergence plot (central panel)
// ---------------------------------------------------------------------------

/// Render the convergence comparison plot in the central panel.
pub fn convergence_plot(ui: &mut Ui, state: &AppState) {
    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No convergence data loaded");
        });
        return;
    }

    Plot::new("convergence_plot")
        .legend(Legend::default())
        .x_axis_label("Numero Iteraciones")
        .y_axis_label("Error")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, series) in state.series.iter().enumerate() {
                let points: PlotPoints = series.plot_points().into();

                let line = Line::new(points)
                    .name(&series.label)
                    .color(state.color_for(idx))
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}
