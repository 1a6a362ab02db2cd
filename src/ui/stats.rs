use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::stats::TagCount;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Right side panel – summary stats for the loaded collection
// ---------------------------------------------------------------------------

pub fn stats_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Overview");
    ui.separator();

    let stats = &state.stats;
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("Candidates");
            ui.label(stats.total_candidates.to_string());
            ui.end_row();

            ui.label("With a video");
            ui.label(stats.total_with_video.to_string());
            ui.end_row();

            ui.label("Universities");
            ui.label(stats.total_universities.to_string());
            ui.end_row();

            ui.label("Avg videos");
            ui.label(format!("{:.1}", stats.avg_videos_per_candidate));
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.strong("Top programming languages");
    language_chart(ui, &stats.top_programming_languages);

    ui.add_space(8.0);
    ui.strong("Top majors");
    tag_list(ui, &stats.top_majors);

    ui.add_space(8.0);
    ui.strong("Top culture tags");
    tag_list(ui, &stats.top_culture_tags);
}

fn tag_list(ui: &mut Ui, entries: &[TagCount]) {
    if entries.is_empty() {
        ui.label("N/A");
        return;
    }
    for entry in entries {
        ui.label(format!("{}  ·  {}", entry.name, entry.count));
    }
}

fn language_chart(ui: &mut Ui, entries: &[TagCount]) {
    if entries.is_empty() {
        ui.label("N/A");
        return;
    }
    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.count as f64)
                .name(&entry.name)
                .width(0.6)
        })
        .collect();

    Plot::new("language_chart")
        .height(160.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE));
        });
}
