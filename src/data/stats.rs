use std::collections::{BTreeMap, BTreeSet};

use super::language::extract_programming_languages;
use super::model::Candidate;

/// How many entries each top-N breakdown keeps.
const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Summary metrics for the dashboard header, computed once per load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateStats {
    pub total_candidates: usize,
    pub total_with_video: usize,
    pub total_universities: usize,
    pub top_majors: Vec<TagCount>,
    pub avg_videos_per_candidate: f64,
    pub top_programming_languages: Vec<TagCount>,
    pub top_culture_tags: Vec<TagCount>,
}

/// Highest counts first, ties broken alphabetically.
fn top_n(counts: BTreeMap<String, usize>) -> Vec<TagCount> {
    let mut entries: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount { name, count })
        .collect();
    // BTreeMap already yields names in order, so a stable sort keeps ties alphabetical.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(TOP_N);
    entries
}

impl CandidateStats {
    pub fn compute(candidates: &[Candidate]) -> Self {
        if candidates.is_empty() {
            return Self::default();
        }

        let mut universities = BTreeSet::new();
        let mut majors: BTreeMap<String, usize> = BTreeMap::new();
        let mut languages: BTreeMap<String, usize> = BTreeMap::new();
        let mut tags: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_videos = 0usize;
        let mut total_with_video = 0usize;

        for c in candidates {
            let videos = c.videos_completed();
            total_videos += videos;
            if videos > 0 {
                total_with_video += 1;
            }
            let university = c.university.trim();
            if !university.is_empty() {
                universities.insert(university.to_string());
            }
            let major = c.major.trim();
            if !major.is_empty() {
                *majors.entry(major.to_string()).or_default() += 1;
            }
            for lang in extract_programming_languages(&c.skills) {
                *languages.entry(lang).or_default() += 1;
            }
            for tag in c.culture_tags() {
                *tags.entry(tag.clone()).or_default() += 1;
            }
        }

        Self {
            total_candidates: candidates.len(),
            total_with_video,
            total_universities: universities.len(),
            top_majors: top_n(majors),
            avg_videos_per_candidate: total_videos as f64 / candidates.len() as f64,
            top_programming_languages: top_n(languages),
            top_culture_tags: top_n(tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Culture;

    fn cand(major: &str, uni: &str, skills: &[&str], videos: usize) -> Candidate {
        let slot = |n: usize| (videos >= n).then(|| format!("v{n}"));
        Candidate {
            major: major.into(),
            university: uni.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            video1: slot(1),
            video2: slot(2),
            video3: slot(3),
            culture: Some(Culture {
                culture_tags: vec!["Collaborative".into()],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let stats = CandidateStats::compute(&[]);
        assert_eq!(stats, CandidateStats::default());
        assert_eq!(stats.avg_videos_per_candidate, 0.0);
    }

    #[test]
    fn computes_totals_and_breakdowns() {
        let cs = vec![
            cand("Math", "MIT", &["Python", "Figma"], 0),
            cand("CS", "MIT", &["Rust", "Python"], 3),
            cand("CS", "Stanford", &["Python"], 1),
            cand("", "", &[], 2),
        ];
        let stats = CandidateStats::compute(&cs);
        assert_eq!(stats.total_candidates, 4);
        assert_eq!(stats.total_with_video, 3);
        assert_eq!(stats.total_universities, 2);
        assert_eq!(stats.avg_videos_per_candidate, 1.5);
        assert_eq!(
            stats.top_majors,
            vec![
                TagCount { name: "CS".into(), count: 2 },
                TagCount { name: "Math".into(), count: 1 },
            ]
        );
        assert_eq!(stats.top_programming_languages[0].name, "Python");
        assert_eq!(stats.top_programming_languages[0].count, 3);
        assert_eq!(stats.top_programming_languages[1].name, "Rust");
        assert_eq!(stats.top_culture_tags[0].count, 4);
    }

    #[test]
    fn top_n_truncates_and_breaks_ties_by_name() {
        let counts: BTreeMap<String, usize> = ["f", "e", "d", "c", "b", "a"]
            .iter()
            .map(|s| (s.to_string(), 1))
            .collect();
        let top = top_n(counts);
        let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }
}
