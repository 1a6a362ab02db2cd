use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 22.0;

const COLUMNS: [&str; 9] = [
    "",
    "Name",
    "Email",
    "University",
    "Major",
    "Year",
    "Videos",
    "Skills",
    "Culture",
];

/// Display-only fallback for blank fields.
fn or_na(s: &str) -> &str {
    if s.trim().is_empty() {
        "N/A"
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Central panel – candidate table
// ---------------------------------------------------------------------------

/// Render the paginated candidate table with its selection controls.
pub fn candidate_table(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No candidates loaded  (File → Open…)");
        });
        return;
    }

    pagination_bar(ui, state);
    ui.separator();

    let mut toggled: Vec<String> = Vec::new();
    let mut copied: Option<String> = None;

    {
        let rows = state.page();
        let selection = &state.selection;
        let colors = &state.tag_colors;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(24.0))
            .column(Column::initial(140.0).at_least(80.0))
            .column(Column::initial(190.0).at_least(80.0))
            .column(Column::initial(150.0))
            .column(Column::initial(130.0))
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::initial(160.0))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                for title in COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for c in rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            let mut checked = selection.is_selected(&c.id);
                            if ui.checkbox(&mut checked, "").changed() {
                                toggled.push(c.id.clone());
                            }
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(or_na(&c.full_name()));
                        });
                        row.col(|ui: &mut Ui| {
                            if c.email.is_empty() {
                                ui.label("N/A");
                            } else if ui.link(c.email.as_str()).on_hover_text("Copy email").clicked() {
                                copied = Some(c.email.clone());
                            }
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(or_na(&c.university));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(or_na(&c.major));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(or_na(&c.graduation_year_text()));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{}/3", c.videos_completed()));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(or_na(&c.skills.join(", ")));
                        });
                        row.col(|ui: &mut Ui| {
                            for tag in c.culture_tags() {
                                ui.label(RichText::new(tag).color(colors.color_for(tag)));
                            }
                        });
                    });
                }
            });
    }

    for id in toggled {
        state.toggle_selected(&id);
    }
    if let Some(email) = copied {
        ui.ctx().copy_text(email.clone());
        log::info!("Copied {email} to clipboard");
        state.notice = Some(format!("Copied {email}"));
    }
}

// ---------------------------------------------------------------------------
// Pagination + bulk selection bar
// ---------------------------------------------------------------------------

fn pagination_bar(ui: &mut Ui, state: &mut AppState) {
    let len = state.filtered_count();
    let total = state.total_pages();
    let current = state.current_page();

    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(state.pagination.has_prev_page(), egui::Button::new("◀ Prev"))
            .clicked()
        {
            state.set_page(current as i64 - 1);
        }
        ui.label(format!("Page {current} of {}", total.max(1)));
        if ui
            .add_enabled(state.pagination.has_next_page(len), egui::Button::new("Next ▶"))
            .clicked()
        {
            state.set_page(current as i64 + 1);
        }

        ui.separator();

        let range = state.pagination.page_range(len);
        let shown = if range.is_empty() {
            "No matching candidates".to_string()
        } else {
            format!("Showing {}–{} of {len}", range.start + 1, range.end)
        };
        ui.label(shown);

        ui.separator();

        if ui
            .add_enabled(len > 0, egui::Button::new(format!("Select all {len}")))
            .clicked()
        {
            state.select_all_filtered();
        }
        if ui
            .add_enabled(!state.selection.is_empty(), egui::Button::new("Deselect all"))
            .clicked()
        {
            state.deselect_all();
        }
    });
}
