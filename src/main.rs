mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::ConvergenceApp;
use data::loader::load_series;
use eframe::egui;
use state::AppState;

/// Convergence logs written by the optimization runs into the working
/// directory, one `<iteration> <error>` row per line.
const PESA_FILE: &str = "pesa.txt";
const NSGA2_FILE: &str = "nsga2.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pesa = load_series(Path::new(PESA_FILE), "PESA")?;
    let nsga2 = load_series(Path::new(NSGA2_FILE), "NSGA2")?;
    log::info!(
        "Loaded {} PESA rows and {} NSGA2 rows",
        pesa.len(),
        nsga2.len()
    );

    let state = AppState::new(vec![pesa, nsga2]);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Convergence Viewer – PESA vs NSGA2",
        options,
        Box::new(|_cc| Ok(Box::new(ConvergenceApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the viewer window")
}
