use std::path::PathBuf;

use crate::data::loader::SourceFilter;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Startup settings, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub page_size: usize,
    pub fetch_limit: Option<usize>,
    pub source_filter: SourceFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("candidates.json"),
            page_size: DEFAULT_PAGE_SIZE,
            fetch_limit: None,
            source_filter: SourceFilter::default(),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: get("DRAFTED_DATA_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            page_size: get("DRAFTED_PAGE_SIZE")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(defaults.page_size),
            fetch_limit: get("DRAFTED_FETCH_LIMIT").and_then(|s| s.trim().parse().ok()),
            source_filter: SourceFilter {
                has_video1: get("DRAFTED_ONLY_WITH_VIDEO1")
                    .and_then(|s| parse_bool(&s))
                    .unwrap_or(false),
            },
        }
    }
}
