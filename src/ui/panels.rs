use std::path::PathBuf;
use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export::ExportScope;
use crate::data::filter::{Dimension, FilterAction, VideoFilter};
use crate::error::ExportError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Search (debounced) ----
    let mut text = state.search_input.clone();
    let edit = ui.add(
        egui::TextEdit::singleline(&mut text).hint_text("Search name, email, school, major"),
    );
    if edit.changed() {
        state.set_search_input(text, Instant::now());
    }
    if state.search_pending() {
        ui.weak("Searching…");
    }

    // ---- Video completion ----
    ui.add_space(4.0);
    ui.strong("Videos");
    let current = state.criteria().video;
    let mut video = current;
    egui::ComboBox::from_id_salt("video_filter")
        .selected_text(video.label())
        .show_ui(ui, |ui: &mut Ui| {
            for option in VideoFilter::ALL {
                ui.selectable_value(&mut video, option, option.label());
            }
        });
    if video != current {
        state.dispatch(FilterAction::SetVideo(video));
    }

    if state.criteria().has_active_filters() && ui.button("Reset filters").clicked() {
        state.reset_filters();
    }
    ui.separator();

    // ---- Per-dimension checkbox lists (collapsible) ----
    let mut actions: Vec<FilterAction> = Vec::new();
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for dim in Dimension::ALL {
                let options = state.options.for_dimension(dim);
                let selected = state.criteria().selection(dim);

                // Show count of selected / total in the header
                let header_text = format!("{}  ({}/{})", dim.label(), selected.len(), options.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.label())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        if options.is_empty() {
                            ui.label("No values loaded.");
                            return;
                        }
                        if !selected.is_empty() && ui.small_button("Clear").clicked() {
                            actions.push(FilterAction::Clear(dim));
                        }
                        for value in options {
                            let mut text = RichText::new(value);
                            if dim == Dimension::CultureTag {
                                text = text.color(state.tag_colors.color_for(value));
                            }
                            let mut checked = selected.contains(value);
                            if ui.checkbox(&mut checked, text).changed() {
                                actions.push(FilterAction::Toggle(dim, value.clone()));
                            }
                        }
                    });
            }
        });

    for action in actions {
        state.dispatch(action);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Requests the top bar hands back to the app, which owns the loader.
pub enum SourceAction {
    Open(PathBuf),
    Refresh,
}

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, loading: bool) -> Option<SourceAction> {
    let mut action = None;
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                action = open_file_dialog().map(SourceAction::Open);
                ui.close_menu();
            }
            if ui.button("Export filtered…").clicked() {
                export_to_file(state, ExportScope::Filtered);
                ui.close_menu();
            }
            if ui.button("Export selected…").clicked() {
                export_to_file(state, ExportScope::Selected);
                ui.close_menu();
            }
        });

        if ui
            .add_enabled(!loading, egui::Button::new("Refresh"))
            .clicked()
        {
            action = Some(SourceAction::Refresh);
        }
        if loading {
            ui.spinner();
        }

        ui.separator();

        ui.label(format!(
            "{} candidates, {} match, {} selected",
            state.dataset.len(),
            state.filtered_count(),
            state.selection.len()
        ));

        ui.separator();

        if ui.button("Copy emails").clicked() {
            copy_selected_emails(ui.ctx(), state);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
            if ui.small_button("Retry").clicked() {
                action = Some(SourceAction::Refresh);
            }
        } else if let Some(notice) = &state.notice {
            ui.label(RichText::new(notice).italics());
        }
    });
    action
}

// ---------------------------------------------------------------------------
// File dialogs and clipboard
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open candidate data")
        .add_filter("JSON", &["json"])
        .pick_file()
}

/// Export `scope` through a save dialog. Empty exports only leave a notice.
pub fn export_to_file(state: &mut AppState, scope: ExportScope) {
    let today = chrono::Local::now().date_naive();
    let doc = match state.export(scope, today) {
        Ok(doc) => doc,
        Err(e) if e.is_notice() => {
            log::info!("Export skipped: {e}");
            state.notice = Some(e.to_string());
            return;
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            state.status_message = Some(format!("Export failed: {e}"));
            return;
        }
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export candidates")
        .set_file_name(doc.file_name.as_str())
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        log::info!("Export cancelled");
        return;
    };

    match std::fs::write(&path, doc.contents.as_bytes()) {
        Ok(()) => {
            log::info!("Exported {} to {}", doc.file_name, path.display());
            state.notice = Some(format!("Exported to {}", path.display()));
        }
        Err(e) => {
            let err = ExportError::from(e);
            log::error!("Export failed: {err}");
            state.status_message = Some(err.to_string());
        }
    }
}

pub fn copy_selected_emails(ctx: &egui::Context, state: &mut AppState) {
    let emails = state.selected_emails();
    if emails.is_empty() {
        state.notice = Some(ExportError::NoneSelected.to_string());
        return;
    }
    let count = emails.split(", ").count();
    ctx.copy_text(emails);
    log::info!("Copied {count} emails to clipboard");
    state.notice = Some(format!("Copied {count} emails"));
}
