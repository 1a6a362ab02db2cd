use std::collections::BTreeSet;

use super::language::{extract_languages_from_transcript, extract_programming_languages};
use super::model::{Candidate, CandidateSet};

// ---------------------------------------------------------------------------
// Filter criteria: the live state of the filter panel
// ---------------------------------------------------------------------------

/// Video-completion requirement. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VideoFilter {
    #[default]
    Any,
    Has1,
    /// Video 1 and video 2 both present. Video 3 is not considered.
    Has2Plus,
    Has3,
}

impl VideoFilter {
    pub const ALL: [VideoFilter; 4] = [
        VideoFilter::Any,
        VideoFilter::Has1,
        VideoFilter::Has2Plus,
        VideoFilter::Has3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VideoFilter::Any => "Any",
            VideoFilter::Has1 => "Has video 1",
            VideoFilter::Has2Plus => "Has 2+ videos",
            VideoFilter::Has3 => "All 3 videos",
        }
    }

    pub fn accepts(self, c: &Candidate) -> bool {
        match self {
            VideoFilter::Any => true,
            VideoFilter::Has1 => c.has_video1(),
            VideoFilter::Has2Plus => c.has_video1() && c.has_video2(),
            VideoFilter::Has3 => c.has_video1() && c.has_video2() && c.has_video3(),
        }
    }
}

/// The multi-select filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    ProgrammingLanguage,
    SpokenLanguage,
    University,
    Major,
    GraduationYear,
    CultureTag,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::ProgrammingLanguage,
        Dimension::SpokenLanguage,
        Dimension::University,
        Dimension::Major,
        Dimension::GraduationYear,
        Dimension::CultureTag,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::ProgrammingLanguage => "Programming languages",
            Dimension::SpokenLanguage => "Spoken languages",
            Dimension::University => "University",
            Dimension::Major => "Major",
            Dimension::GraduationYear => "Graduation year",
            Dimension::CultureTag => "Culture tags",
        }
    }
}

/// All filter values. Within a dimension selections are OR-ed, across
/// dimensions they are AND-ed; an empty selection means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub programming_langs: BTreeSet<String>,
    pub spoken_langs: BTreeSet<String>,
    pub universities: BTreeSet<String>,
    pub majors: BTreeSet<String>,
    pub grad_years: BTreeSet<String>,
    pub culture_tags: BTreeSet<String>,
    pub video: VideoFilter,
}

/// One criteria update. Every filter-panel interaction maps to one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetSearchQuery(String),
    Toggle(Dimension, String),
    Clear(Dimension),
    SetVideo(VideoFilter),
    Reset,
}

impl FilterCriteria {
    pub fn selection(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::ProgrammingLanguage => &self.programming_langs,
            Dimension::SpokenLanguage => &self.spoken_langs,
            Dimension::University => &self.universities,
            Dimension::Major => &self.majors,
            Dimension::GraduationYear => &self.grad_years,
            Dimension::CultureTag => &self.culture_tags,
        }
    }

    fn selection_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::ProgrammingLanguage => &mut self.programming_langs,
            Dimension::SpokenLanguage => &mut self.spoken_langs,
            Dimension::University => &mut self.universities,
            Dimension::Major => &mut self.majors,
            Dimension::GraduationYear => &mut self.grad_years,
            Dimension::CultureTag => &mut self.culture_tags,
        }
    }

    /// True when nothing narrows the collection.
    pub fn is_empty(&self) -> bool {
        self.search_query.trim().is_empty()
            && Dimension::ALL.iter().all(|d| self.selection(*d).is_empty())
            && self.video == VideoFilter::Any
    }

    pub fn has_active_filters(&self) -> bool {
        !self.is_empty()
    }

    /// Apply one update. Returns whether the criteria actually changed.
    pub fn apply(&mut self, action: FilterAction) -> bool {
        let before = self.clone();
        match action {
            FilterAction::SetSearchQuery(q) => self.search_query = q,
            FilterAction::Toggle(dim, value) => {
                let set = self.selection_mut(dim);
                if !set.remove(&value) {
                    set.insert(value);
                }
            }
            FilterAction::Clear(dim) => self.selection_mut(dim).clear(),
            FilterAction::SetVideo(v) => self.video = v,
            FilterAction::Reset => *self = FilterCriteria::default(),
        }
        *self != before
    }
}

// ---------------------------------------------------------------------------
// Spoken-language cache: derived on demand, keyed by collection version
// ---------------------------------------------------------------------------

/// Lazily computed spoken languages per candidate.
///
/// Entries are filled only when the spoken-language dimension is in use and
/// are dropped wholesale when a new collection version arrives.
#[derive(Debug, Default)]
pub struct SpokenLanguageCache {
    version: u64,
    entries: Vec<Option<Vec<String>>>,
}

impl SpokenLanguageCache {
    pub fn languages(&mut self, set: &CandidateSet, index: usize) -> &[String] {
        if self.version != set.version || self.entries.len() != set.len() {
            self.version = set.version;
            self.entries = vec![None; set.len()];
        }
        self.entries[index]
            .get_or_insert_with(|| extract_languages_from_transcript(&set.candidates[index].transcripts))
    }

    /// Number of candidates whose languages have been computed.
    pub fn computed(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

// ---------------------------------------------------------------------------
// Predicate pipeline
// ---------------------------------------------------------------------------

fn intersects(values: &[String], selected: &BTreeSet<String>) -> bool {
    values.iter().any(|v| selected.contains(v))
}

fn matches_search(c: &Candidate, query: &str) -> bool {
    [&c.first_name, &c.last_name, &c.email, &c.major, &c.university]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

/// Return indices of candidates that pass every active filter, in collection
/// order.
///
/// Stages run in a fixed order, each narrowing the survivors of the previous
/// one; a stage whose criterion is empty is skipped.
pub fn filtered_indices(
    set: &CandidateSet,
    criteria: &FilterCriteria,
    spoken: &mut SpokenLanguageCache,
) -> Vec<usize> {
    let candidates = &set.candidates;
    let mut keep: Vec<usize> = (0..candidates.len()).collect();

    let query = criteria.search_query.trim().to_lowercase();
    if !query.is_empty() {
        keep.retain(|&i| matches_search(&candidates[i], &query));
    }

    if !criteria.programming_langs.is_empty() {
        keep.retain(|&i| {
            intersects(
                &extract_programming_languages(&candidates[i].skills),
                &criteria.programming_langs,
            )
        });
    }

    if !criteria.spoken_langs.is_empty() {
        keep.retain(|&i| intersects(spoken.languages(set, i), &criteria.spoken_langs));
    }

    if !criteria.universities.is_empty() {
        keep.retain(|&i| criteria.universities.contains(&candidates[i].university));
    }

    if !criteria.majors.is_empty() {
        keep.retain(|&i| criteria.majors.contains(&candidates[i].major));
    }

    if !criteria.grad_years.is_empty() {
        keep.retain(|&i| {
            criteria
                .grad_years
                .contains(&candidates[i].graduation_year_text())
        });
    }

    if !criteria.culture_tags.is_empty() {
        keep.retain(|&i| intersects(candidates[i].culture_tags(), &criteria.culture_tags));
    }

    if criteria.video != VideoFilter::Any {
        keep.retain(|&i| criteria.video.accepts(&candidates[i]));
    }

    keep
}

// ---------------------------------------------------------------------------
// Memo: skip recomputation when neither collection nor criteria changed
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FilterMemo {
    key: Option<(u64, FilterCriteria)>,
    indices: Vec<usize>,
    spoken: SpokenLanguageCache,
}

impl FilterMemo {
    /// Filtered indices for `(set, criteria)`, recomputed only on a key change.
    /// Returns the indices and whether a recomputation happened.
    pub fn get(&mut self, set: &CandidateSet, criteria: &FilterCriteria) -> (&[usize], bool) {
        let fresh = match &self.key {
            Some((version, cached)) => *version != set.version || cached != criteria,
            None => true,
        };
        if fresh {
            self.indices = filtered_indices(set, criteria, &mut self.spoken);
            self.key = Some((set.version, criteria.clone()));
            log::debug!(
                "refiltered v{}: {} of {} candidates ({} transcripts scanned)",
                set.version,
                self.indices.len(),
                set.len(),
                self.spoken.computed()
            );
        }
        (&self.indices, fresh)
    }
}
