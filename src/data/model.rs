use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// GraduationYear – stored either as a number or as free text
// ---------------------------------------------------------------------------

/// Graduation year as it arrives from the backing store.
/// Comparisons go through the `Display` form so `2025` and `"2025"` match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraduationYear {
    Year(i64),
    Text(String),
}

impl fmt::Display for GraduationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraduationYear::Year(y) => write!(f, "{y}"),
            GraduationYear::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

// ---------------------------------------------------------------------------
// Culture – nested culture-fit answers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Culture {
    #[serde(deserialize_with = "lenient_list")]
    pub culture_tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Candidate – one recruiting profile
// ---------------------------------------------------------------------------

/// A single candidate record, keyed the way the onboarding flow stores it.
///
/// Every field is defaulted so partially filled profiles still load; missing
/// values read back as empty strings or empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub university: String,
    #[serde(deserialize_with = "lenient_string")]
    pub major: String,
    #[serde(deserialize_with = "lenient_year")]
    pub graduation_year: Option<GraduationYear>,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_culture")]
    pub culture: Option<Culture>,
    #[serde(rename = "linkedInURL", deserialize_with = "lenient_opt_string")]
    pub linked_in_url: Option<String>,
    #[serde(rename = "gitHubURL", deserialize_with = "lenient_opt_string")]
    pub git_hub_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub resume: Option<String>,
    #[serde(deserialize_with = "lenient_ref")]
    pub video1: Option<String>,
    #[serde(deserialize_with = "lenient_ref")]
    pub video2: Option<String>,
    #[serde(deserialize_with = "lenient_ref")]
    pub video3: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub transcripts: Vec<String>,
}

// -- Lenient field decoding: bad shapes become "missing", never an error --

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::String(s) => s,
        _ => String::new(),
    })
}

/// Numeric document ids keep their digits.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::String(s) => s,
        JsonValue::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_culture<'de, D>(deserializer: D) -> Result<Option<Culture>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::Object(mut map) => Some(Culture {
            culture_tags: map
                .remove("cultureTags")
                .map(string_items)
                .unwrap_or_default(),
        }),
        _ => None,
    })
}

fn string_items(value: JsonValue) -> Vec<String> {
    match value {
        JsonValue::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                JsonValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<GraduationYear>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(GraduationYear::Year),
        JsonValue::String(s) if !s.trim().is_empty() => Some(GraduationYear::Text(s)),
        _ => None,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(string_items)
}

/// Media references are truthy-or-not; a non-string reference keeps its JSON text.
fn lenient_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(match value {
        JsonValue::Null | JsonValue::Bool(false) => None,
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    })
}

/// A video slot counts as done when it holds any non-empty reference.
fn is_present(slot: &Option<String>) -> bool {
    slot.as_deref().is_some_and(|s| !s.is_empty())
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn has_video1(&self) -> bool {
        is_present(&self.video1)
    }

    pub fn has_video2(&self) -> bool {
        is_present(&self.video2)
    }

    pub fn has_video3(&self) -> bool {
        is_present(&self.video3)
    }

    /// Number of completed video slots (0..=3).
    pub fn videos_completed(&self) -> usize {
        [self.has_video1(), self.has_video2(), self.has_video3()]
            .iter()
            .filter(|done| **done)
            .count()
    }

    pub fn culture_tags(&self) -> &[String] {
        self.culture
            .as_ref()
            .map(|c| c.culture_tags.as_slice())
            .unwrap_or(&[])
    }

    /// Graduation year as text, empty when unknown.
    pub fn graduation_year_text(&self) -> String {
        self.graduation_year
            .as_ref()
            .map(|y| y.to_string())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// CandidateSet – one loaded snapshot
// ---------------------------------------------------------------------------

/// An immutable snapshot of the candidate collection.
///
/// `version` changes every time a new snapshot replaces the old one, which is
/// what downstream caches key on instead of comparing whole collections.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
    pub version: u64,
}

impl CandidateSet {
    pub fn new(candidates: Vec<Candidate>, version: u64) -> Self {
        Self {
            candidates,
            version,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sorted, de-duplicated non-empty universities (filter options).
    pub fn universities(&self) -> Vec<String> {
        self.distinct(|c| Some(c.university.clone()))
    }

    pub fn majors(&self) -> Vec<String> {
        self.distinct(|c| Some(c.major.clone()))
    }

    pub fn graduation_years(&self) -> Vec<String> {
        self.distinct(|c| Some(c.graduation_year_text()))
    }

    fn distinct(&self, field: impl Fn(&Candidate) -> Option<String>) -> Vec<String> {
        let set: std::collections::BTreeSet<String> = self
            .candidates
            .iter()
            .filter_map(field)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_record_with_numeric_year() {
        let json = r#"{
            "id": "c1",
            "firstName": "Ana",
            "graduationYear": 2025,
            "culture": { "cultureTags": ["Collaborative"] },
            "linkedInURL": "https://linkedin.com/in/ana",
            "video1": "https://cdn/v1.mp4",
            "video2": ""
        }"#;
        let c: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.graduation_year_text(), "2025");
        assert_eq!(c.culture_tags(), ["Collaborative".to_string()]);
        assert_eq!(c.linked_in_url.as_deref(), Some("https://linkedin.com/in/ana"));
        assert!(c.has_video1());
        assert!(!c.has_video2());
        assert_eq!(c.videos_completed(), 1);
        assert!(c.skills.is_empty());
        assert!(c.transcripts.is_empty());
    }

    #[test]
    fn malformed_fields_degrade_to_empty() {
        let c: Candidate =
            serde_json::from_str(r#"{"graduationYear": true, "skills": null, "transcripts": [1, "hi"]}"#)
                .unwrap();
        assert_eq!(c.graduation_year, None);
        assert!(c.skills.is_empty());
        assert_eq!(c.transcripts, vec!["hi".to_string()]);
    }

    #[test]
    fn null_and_wrong_typed_scalars_read_as_empty() {
        let c: Candidate = serde_json::from_str(
            r#"{
                "id": 7,
                "email": null,
                "firstName": ["Ana"],
                "university": null,
                "major": 42,
                "culture": { "cultureTags": null },
                "linkedInURL": false,
                "gitHubURL": null,
                "resume": {}
            }"#,
        )
        .unwrap();
        assert_eq!(c.id, "7");
        assert_eq!(c.email, "");
        assert_eq!(c.first_name, "");
        assert_eq!(c.university, "");
        assert_eq!(c.major, "");
        assert!(c.culture_tags().is_empty());
        assert_eq!(c.linked_in_url, None);
        assert_eq!(c.git_hub_url, None);
        assert_eq!(c.resume, None);

        let c: Candidate = serde_json::from_str(r#"{"culture": "Collaborative"}"#).unwrap();
        assert_eq!(c.culture, None);
    }

    #[test]
    fn string_year_displays_trimmed() {
        let c: Candidate = serde_json::from_str(r#"{"graduationYear": " 2026 "}"#).unwrap();
        assert_eq!(c.graduation_year_text(), "2026");
    }

    #[test]
    fn distinct_options_are_sorted_and_skip_blanks() {
        let mk = |u: &str| Candidate {
            university: u.into(),
            ..Default::default()
        };
        let set = CandidateSet::new(vec![mk("MIT"), mk(""), mk("Berkeley"), mk("MIT")], 1);
        assert_eq!(set.universities(), vec!["Berkeley", "MIT"]);
    }
}
