use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::Candidate;

// ---------------------------------------------------------------------------
// Candidate source
// ---------------------------------------------------------------------------

/// Coarse hint a source may use to pre-filter before the in-memory pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceFilter {
    pub has_video1: bool,
}

/// Anything that can hand the dashboard a full candidate collection.
pub trait CandidateSource: Send + Sync {
    fn fetch_candidates(
        &self,
        filter: &SourceFilter,
        limit: Option<usize>,
        force_refresh: bool,
    ) -> Result<Vec<Candidate>>;

    /// Short human-readable description for the status bar.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// JSON file source
// ---------------------------------------------------------------------------

/// Candidates stored as a JSON array of records:
///
/// ```json
/// [
///   {
///     "id": "u_123",
///     "firstName": "Ana",
///     "email": "ana@uni.edu",
///     "graduationYear": 2025,
///     "skills": ["Python", "Figma"],
///     "culture": { "cultureTags": ["Collaborative"] },
///     "video1": "https://…"
///   },
///   ...
/// ]
/// ```
///
/// The parsed file is cached until a forced refresh.
pub struct JsonFileSource {
    path: PathBuf,
    cache: Mutex<Option<Vec<Candidate>>>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }
}

impl CandidateSource for JsonFileSource {
    fn fetch_candidates(
        &self,
        filter: &SourceFilter,
        limit: Option<usize>,
        force_refresh: bool,
    ) -> Result<Vec<Candidate>> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| anyhow::anyhow!("candidate cache lock poisoned"))?;

        if force_refresh || cache.is_none() {
            let loaded = load_json(&self.path)?;
            log::info!(
                "Read {} candidates from {}",
                loaded.len(),
                self.path.display()
            );
            *cache = Some(loaded);
        }

        let all = cache.as_deref().unwrap_or_default();
        let mut out: Vec<Candidate> = all
            .iter()
            .filter(|c| !filter.has_video1 || c.has_video1())
            .cloned()
            .collect();
        if let Some(limit) = limit {
            out.truncate(limit);
        }
        Ok(out)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse a JSON candidate file.
///
/// Records without an `id` fall back to their email, then to `row-<n>`, so
/// every candidate can be selected.
pub fn load_json(path: &Path) -> Result<Vec<Candidate>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_candidates(&text)
}

pub fn parse_candidates(text: &str) -> Result<Vec<Candidate>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = match root {
        JsonValue::Array(records) => records,
        _ => bail!("Expected top-level JSON array of candidates"),
    };

    let mut candidates = Vec::with_capacity(records.len());
    for (i, rec) in records.into_iter().enumerate() {
        if !rec.is_object() {
            bail!("Row {i} is not a JSON object");
        }
        let mut candidate: Candidate =
            serde_json::from_value(rec).with_context(|| format!("Row {i}: invalid candidate"))?;

        if candidate.id.trim().is_empty() {
            candidate.id = if candidate.email.trim().is_empty() {
                format!("row-{i}")
            } else {
                candidate.email.trim().to_string()
            };
        }
        candidates.push(candidate);
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "a", "email": "a@x.io", "video1": "v"},
        {"email": "b@x.io"},
        {"firstName": "NoId"},
        {"id": "d", "video1": "v", "video2": "v"}
    ]"#;

    fn temp_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn ids_fall_back_to_email_then_row() {
        let cs = parse_candidates(SAMPLE).unwrap();
        let ids: Vec<&str> = cs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b@x.io", "row-2", "d"]);
    }

    #[test]
    fn null_fields_do_not_fail_the_load() {
        let cs = parse_candidates(
            r#"[
                {"id": "a", "university": null},
                {"id": "b", "major": null},
                {"id": "c", "culture": {"cultureTags": null}},
                {"id": 7, "email": null}
            ]"#,
        )
        .unwrap();
        let ids: Vec<&str> = cs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "7"]);
        assert!(cs.iter().all(|c| c.university.is_empty() && c.major.is_empty()));
    }

    #[test]
    fn rejects_non_array_root() {
        assert!(parse_candidates(r#"{"id": "a"}"#).is_err());
        assert!(parse_candidates(r#"[1, 2]"#).is_err());
        assert!(parse_candidates("not json").is_err());
    }

    #[test]
    fn source_applies_hint_and_limit() {
        let file = temp_file(SAMPLE);
        let source = JsonFileSource::new(file.path());

        let all = source.fetch_candidates(&SourceFilter::default(), None, false).unwrap();
        assert_eq!(all.len(), 4);

        let hint = SourceFilter { has_video1: true };
        let with_video = source.fetch_candidates(&hint, None, false).unwrap();
        assert_eq!(with_video.len(), 2);

        let limited = source.fetch_candidates(&SourceFilter::default(), Some(1), false).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "a");
    }

    #[test]
    fn cache_is_bypassed_only_on_force_refresh() {
        let file = temp_file(r#"[{"id": "a"}]"#);
        let source = JsonFileSource::new(file.path());
        assert_eq!(source.fetch_candidates(&SourceFilter::default(), None, false).unwrap().len(), 1);

        std::fs::write(file.path(), r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();

        assert_eq!(source.fetch_candidates(&SourceFilter::default(), None, false).unwrap().len(), 1);
        assert_eq!(source.fetch_candidates(&SourceFilter::default(), None, true).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let err = source
            .fetch_candidates(&SourceFilter::default(), None, false)
            .unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }
}
