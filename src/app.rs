use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::loader::JsonFileSource;
use crate::refresh::Loader;
use crate::state::AppState;
use crate::ui::panels::{self, SourceAction};
use crate::ui::{stats, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DraftedApp {
    pub state: AppState,
    loader: Loader,
    config: DashboardConfig,
}

impl DraftedApp {
    pub fn new(config: DashboardConfig) -> Self {
        let source = Arc::new(JsonFileSource::new(config.data_path.clone()));
        let mut app = Self {
            state: AppState::new(config.page_size),
            loader: Loader::new(source),
            config,
        };
        app.refresh(false);
        app
    }

    fn refresh(&mut self, force: bool) {
        self.loader
            .request(self.config.source_filter, self.config.fetch_limit, force);
    }

    fn open_source(&mut self, path: PathBuf) {
        log::info!("Switching candidate source to {}", path.display());
        self.loader.set_source(Arc::new(JsonFileSource::new(path)));
        self.refresh(true);
    }

    /// Apply the newest finished fetch, if one arrived since the last frame.
    fn poll_loader(&mut self) {
        let Some(result) = self.loader.poll() else {
            return;
        };
        match result.outcome {
            Ok(candidates) => {
                log::info!(
                    "Loaded {} candidates (request {}) from {}",
                    candidates.len(),
                    result.request_id,
                    self.loader.source().describe()
                );
                self.state.set_dataset(candidates);
            }
            Err(e) => self.state.load_failed(&e),
        }
    }
}

impl eframe::App for DraftedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        if let Some(wait) = self.state.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
        if self.loader.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ---- Top panel: menu bar ----
        let mut action = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            action = panels::top_bar(ui, &mut self.state, self.loader.is_loading());
        });
        match action {
            Some(SourceAction::Open(path)) => self.open_source(path),
            Some(SourceAction::Refresh) => self.refresh(true),
            None => {}
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: summary stats ----
        egui::SidePanel::right("stats_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                stats::stats_panel(ui, &self.state);
            });

        // ---- Central panel: candidate table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::candidate_table(ui, &mut self.state);
        });
    }
}
