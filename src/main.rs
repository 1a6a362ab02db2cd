mod app;
mod color;
mod config;
mod data;
mod debounce;
mod error;
mod pagination;
mod refresh;
mod selection;
mod state;
mod ui;

use app::DraftedApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::info!(
        "Starting dashboard: data={}, page_size={}",
        config.data_path.display(),
        config.page_size
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Drafted – Candidate Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DraftedApp::new(config)))),
    )
}
