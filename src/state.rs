use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::color::TagColors;
use crate::data::export::{self, CsvExport, ExportScope};
use crate::data::filter::{Dimension, FilterAction, FilterCriteria, FilterMemo};
use crate::data::language;
use crate::data::model::{Candidate, CandidateSet};
use crate::data::stats::CandidateStats;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::error::ExportError;
use crate::pagination::Pagination;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// Filter options shown in the panel
// ---------------------------------------------------------------------------

/// Checkbox options per dimension. Data-derived lists are rebuilt per load.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub programming_langs: Vec<String>,
    pub spoken_langs: Vec<String>,
    pub culture_tags: Vec<String>,
    pub universities: Vec<String>,
    pub majors: Vec<String>,
    pub grad_years: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            programming_langs: language::programming_languages(),
            spoken_langs: language::supported_languages(),
            culture_tags: language::culture_tags(),
            universities: Vec::new(),
            majors: Vec::new(),
            grad_years: Vec::new(),
        }
    }
}

impl FilterOptions {
    pub fn for_dimension(&self, dim: Dimension) -> &[String] {
        match dim {
            Dimension::ProgrammingLanguage => &self.programming_langs,
            Dimension::SpokenLanguage => &self.spoken_langs,
            Dimension::University => &self.universities,
            Dimension::Major => &self.majors,
            Dimension::GraduationYear => &self.grad_years,
            Dimension::CultureTag => &self.culture_tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
pub struct AppState {
    /// Current candidate snapshot (empty, version 0, until the first load).
    pub dataset: CandidateSet,

    /// Summary metrics, computed once per load.
    pub stats: CandidateStats,

    /// Applied filter criteria.
    criteria: FilterCriteria,

    /// Raw text of the search box; reaches `criteria` after the debounce.
    pub search_input: String,
    search_debounce: Debouncer<String>,

    memo: FilterMemo,

    /// Indices of candidates passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    pub pagination: Pagination,
    pub selection: Selection,
    pub options: FilterOptions,
    pub tag_colors: TagColors,

    /// Error shown in the UI (load failures, file writes).
    pub status_message: Option<String>,

    /// Non-error notice (exports, clipboard).
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        let options = FilterOptions::default();
        let tag_colors = TagColors::new(&options.culture_tags);
        Self {
            dataset: CandidateSet::default(),
            stats: CandidateStats::default(),
            criteria: FilterCriteria::default(),
            search_input: String::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            memo: FilterMemo::default(),
            visible_indices: Vec::new(),
            pagination: Pagination::new(page_size),
            selection: Selection::default(),
            options,
            tag_colors,
            status_message: None,
            notice: None,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the collection with a freshly loaded snapshot.
    ///
    /// Filters and selection are kept; the page is only pulled back if the
    /// new filtered view is shorter.
    pub fn set_dataset(&mut self, candidates: Vec<Candidate>) {
        let version = self.dataset.version + 1;
        self.dataset = CandidateSet::new(candidates, version);
        self.stats = CandidateStats::compute(&self.dataset.candidates);
        self.options.universities = self.dataset.universities();
        self.options.majors = self.dataset.majors();
        self.options.grad_years = self.dataset.graduation_years();
        self.status_message = None;
        self.refilter();
    }

    /// Record a failed load. The previous snapshot stays visible.
    pub fn load_failed(&mut self, err: &anyhow::Error) {
        log::error!("Failed to load candidates: {err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }

    /// Apply one filter update. A real change sends the view back to page 1.
    pub fn dispatch(&mut self, action: FilterAction) {
        if self.criteria.apply(action) {
            self.pagination.reset();
            self.refilter();
        }
    }

    /// Search-box edit: arm the debounce instead of filtering immediately.
    pub fn set_search_input(&mut self, text: String, now: Instant) {
        self.search_input = text.clone();
        self.search_debounce.arm(text, now);
    }

    /// Advance timers. Returns how long until the next pending deadline so
    /// the frame loop can schedule a repaint.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if let Some(query) = self.search_debounce.poll(now) {
            self.dispatch(FilterAction::SetSearchQuery(query));
        }
        self.search_debounce.remaining(now)
    }

    pub fn search_pending(&self) -> bool {
        self.search_debounce.is_armed()
    }

    pub fn reset_filters(&mut self) {
        self.search_debounce.cancel();
        self.search_input.clear();
        self.dispatch(FilterAction::Reset);
        log::info!("Filters reset");
    }

    /// Recompute `visible_indices` if the collection or criteria moved.
    pub fn refilter(&mut self) {
        let (indices, fresh) = self.memo.get(&self.dataset, &self.criteria);
        if fresh {
            self.visible_indices = indices.to_vec();
            self.pagination.clamp_to(self.visible_indices.len());
        }
    }

    pub fn filtered_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.visible_indices
            .iter()
            .map(|&i| &self.dataset.candidates[i])
    }

    /// Candidates on the current page.
    pub fn page(&self) -> Vec<&Candidate> {
        self.pagination
            .visible(&self.visible_indices)
            .iter()
            .map(|&i| &self.dataset.candidates[i])
            .collect()
    }

    pub fn set_page(&mut self, n: i64) {
        self.pagination.set_page(n, self.visible_indices.len());
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.visible_indices.len())
    }

    // -- selection --

    pub fn toggle_selected(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn select_all_filtered(&mut self) {
        let candidates = &self.dataset.candidates;
        self.selection
            .select_all_filtered(self.visible_indices.iter().map(|&i| &candidates[i]));
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn selected_list(&self) -> Vec<&Candidate> {
        self.selection.selected_list(self.filtered())
    }

    // -- export --

    pub fn export(&self, scope: ExportScope, today: NaiveDate) -> Result<CsvExport, ExportError> {
        let candidates: Vec<&Candidate> = match scope {
            ExportScope::Filtered => self.filtered().collect(),
            ExportScope::Selected => self.selected_list(),
        };
        export::export(scope, &candidates, today)
    }

    pub fn selected_emails(&self) -> String {
        export::joined_emails(&self.selected_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::VideoFilter;

    fn cands(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate {
                id: format!("c{i}"),
                email: format!("c{i}@x.io"),
                university: if i % 2 == 0 { "MIT".into() } else { "Stanford".into() },
                video1: (i % 3 == 0).then(|| "v".to_string()),
                ..Default::default()
            })
            .collect()
    }

    fn loaded(n: usize) -> AppState {
        let mut s = AppState::new(20);
        s.set_dataset(cands(n));
        s
    }

    fn ids(list: &[&Candidate]) -> Vec<String> {
        list.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn load_fills_view_stats_and_options() {
        let s = loaded(45);
        assert_eq!(s.filtered_count(), 45);
        assert_eq!(s.total_pages(), 3);
        assert_eq!(s.stats.total_candidates, 45);
        assert_eq!(s.options.universities, vec!["MIT", "Stanford"]);
        assert_eq!(s.dataset.version, 1);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut s = loaded(45);
        s.set_page(3);
        let page = s.page();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, "c40");
        assert_eq!(page[4].id, "c44");
    }

    #[test]
    fn stepping_pages_stops_at_both_ends() {
        let mut s = loaded(45);
        s.set_page(s.current_page() as i64 - 1);
        assert_eq!(s.current_page(), 1);
        for _ in 0..5 {
            s.set_page(s.current_page() as i64 + 1);
        }
        assert_eq!(s.current_page(), 3);
        assert_eq!(s.page().len(), 5);
    }

    #[test]
    fn criteria_change_resets_page_navigation_does_not() {
        let mut s = loaded(45);
        s.set_page(2);
        s.dispatch(FilterAction::SetVideo(VideoFilter::Any));
        assert_eq!(s.pagination.current_page(), 2, "no-op update keeps the page");

        s.dispatch(FilterAction::Toggle(Dimension::University, "MIT".into()));
        assert_eq!(s.pagination.current_page(), 1);
        assert_eq!(s.filtered_count(), 23);

        s.set_page(2);
        assert_eq!(s.pagination.current_page(), 2);
        assert!(s.criteria().has_active_filters());
    }

    #[test]
    fn search_waits_for_debounce() {
        let mut s = loaded(45);
        let t0 = Instant::now();
        s.set_search_input("c4".into(), t0);
        assert_eq!(s.filtered_count(), 45);
        assert!(s.tick(t0 + Duration::from_millis(100)).is_some());
        assert_eq!(s.filtered_count(), 45);

        assert_eq!(s.tick(t0 + SEARCH_DEBOUNCE), None);
        // c4 and c40..c44 by id-bearing email
        assert_eq!(s.filtered_count(), 6);
        assert_eq!(s.criteria().search_query, "c4");
    }

    #[test]
    fn reset_cancels_pending_search() {
        let mut s = loaded(10);
        let t0 = Instant::now();
        s.dispatch(FilterAction::Toggle(Dimension::University, "MIT".into()));
        s.set_search_input("c1".into(), t0);
        s.reset_filters();
        s.tick(t0 + Duration::from_secs(1));
        assert!(!s.criteria().has_active_filters());
        assert!(s.search_input.is_empty());
        assert_eq!(s.filtered_count(), 10);
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut s = loaded(6);
        s.toggle_selected("c0");
        s.toggle_selected("c1");

        // c0 is at MIT: still visible and selected
        s.dispatch(FilterAction::Toggle(Dimension::University, "MIT".into()));
        assert_eq!(ids(&s.selected_list()), vec!["c0"]);
        assert!(s.selection.is_selected("c1"));

        s.dispatch(FilterAction::Clear(Dimension::University));
        assert_eq!(ids(&s.selected_list()), vec!["c0", "c1"]);
    }

    #[test]
    fn select_all_filtered_ignores_paging() {
        let mut s = loaded(45);
        s.dispatch(FilterAction::SetVideo(VideoFilter::Has1));
        s.select_all_filtered();
        assert_eq!(s.selection.len(), 15);
        assert_eq!(s.selected_list().len(), 15);
        s.deselect_all();
        assert!(s.selected_list().is_empty());
    }

    #[test]
    fn failed_reload_keeps_previous_data() {
        let mut s = loaded(5);
        s.load_failed(&anyhow::anyhow!("connection refused"));
        assert_eq!(s.filtered_count(), 5);
        assert!(s.status_message.as_deref().unwrap().contains("connection refused"));

        s.set_dataset(cands(3));
        assert!(s.status_message.is_none());
        assert_eq!(s.filtered_count(), 3);
        assert_eq!(s.dataset.version, 2);
    }

    #[test]
    fn reload_keeps_criteria_and_clamps_page() {
        let mut s = loaded(45);
        s.set_page(3);
        s.set_dataset(cands(25));
        assert_eq!(s.pagination.current_page(), 2);
    }

    #[test]
    fn exports_cover_filtered_or_selected() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let mut s = loaded(4);
        let all = s.export(ExportScope::Filtered, day).unwrap();
        assert_eq!(all.contents.lines().count(), 5);
        assert_eq!(all.file_name, "drafted-candidates-2026-01-02.csv");

        let err = s.export(ExportScope::Selected, day).unwrap_err();
        assert_eq!(err.to_string(), "No candidates selected");

        s.toggle_selected("c3");
        s.toggle_selected("c1");
        let picked = s.export(ExportScope::Selected, day).unwrap();
        assert_eq!(picked.contents.lines().count(), 3);
        assert_eq!(s.selected_emails(), "c1@x.io, c3@x.io");
    }

    #[test]
    fn empty_filtered_export_is_notice() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let s = AppState::new(20);
        let err = s.export(ExportScope::Filtered, day).unwrap_err();
        assert!(err.is_notice());
    }
}
