use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ConvergenceApp {
    pub state: AppState,
}

impl ConvergenceApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ConvergenceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: series summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: convergence plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::convergence_plot(ui, &self.state);
        });
    }
}
