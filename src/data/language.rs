use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Static option lists
// ---------------------------------------------------------------------------

/// Canonical programming languages recognised in a skills list.
const PROGRAMMING_LANGUAGES: [&str; 12] = [
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Ruby",
    "Swift",
    "Kotlin",
    "PHP",
];

const CULTURE_TAGS: [&str; 16] = [
    "Async-First",
    "Collaborative",
    "Creative",
    "Customer-Focused",
    "Data-Driven",
    "Detail-Oriented",
    "Entrepreneurial",
    "Fast-Paced",
    "Flexible Hours",
    "Growth-Minded",
    "Innovative",
    "Mentorship",
    "Mission-Driven",
    "Remote-Friendly",
    "Structured",
    "Work-Life Balance",
];

/// Spoken languages with the keyword variants (English and native spellings)
/// that identify them in lowercased transcript text.
const SPOKEN_LANGUAGES: &[(&str, &[&str])] = &[
    ("Arabic", &["arabic", "العربية", "عربي"]),
    ("Bengali", &["bengali", "bangla", "বাংলা"]),
    ("Cantonese", &["cantonese", "廣東話", "粤语", "粵語"]),
    ("Dutch", &["dutch", "nederlands"]),
    ("English", &["english"]),
    ("French", &["french", "français", "francais"]),
    ("German", &["german", "deutsch"]),
    ("Greek", &["greek", "ελληνικά"]),
    ("Hebrew", &["hebrew", "עברית"]),
    ("Hindi", &["hindi", "हिन्दी", "हिंदी"]),
    ("Italian", &["italian", "italiano"]),
    ("Japanese", &["japanese", "日本語"]),
    ("Korean", &["korean", "한국어"]),
    ("Mandarin", &["mandarin", "chinese", "中文", "普通话", "普通話"]),
    ("Persian", &["persian", "farsi", "فارسی"]),
    ("Polish", &["polish", "polski"]),
    ("Portuguese", &["portuguese", "português", "portugues"]),
    ("Punjabi", &["punjabi", "ਪੰਜਾਬੀ"]),
    ("Russian", &["russian", "русский"]),
    ("Spanish", &["spanish", "español", "espanol"]),
    ("Swahili", &["swahili", "kiswahili"]),
    ("Tagalog", &["tagalog", "filipino"]),
    ("Tamil", &["tamil", "தமிழ்"]),
    ("Telugu", &["telugu", "తెలుగు"]),
    ("Turkish", &["turkish", "türkçe", "turkce"]),
    ("Urdu", &["urdu", "اردو"]),
    ("Vietnamese", &["vietnamese", "tiếng việt", "tieng viet"]),
];

/// Words that mark a language mention as a claim of speaking it.
const FLUENCY_INDICATORS: &str =
    "speak|speaks|speaking|spoke|fluent|fluently|fluency|native|bilingual|trilingual|proficient|conversational";

/// One compiled matcher per language: keyword and indicator adjacent in either
/// order, with at most one word in between.
static LANGUAGE_MATCHERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SPOKEN_LANGUAGES
        .iter()
        .map(|(name, keywords)| {
            let kw = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(
                r"(?:\b(?:{ind})\W+(?:\w+\W+)?(?:{kw})(?:\W|$))|(?:(?:^|\W)(?:{kw})\W+(?:\w+\W+)?(?:{ind})\b)",
                ind = FLUENCY_INDICATORS,
            );
            (*name, Regex::new(&pattern).unwrap())
        })
        .collect()
});

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Spoken languages a candidate claims in their interview transcripts.
///
/// Returns capitalised names, each at most once, sorted. No transcripts (or
/// only blank ones) yields an empty list.
pub fn extract_languages_from_transcript(transcripts: &[String]) -> Vec<String> {
    let text = transcripts
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if text.trim().is_empty() {
        return Vec::new();
    }

    let found: BTreeSet<&str> = LANGUAGE_MATCHERS
        .iter()
        .filter(|(_, re)| re.is_match(&text))
        .map(|(name, _)| *name)
        .collect();
    found.into_iter().map(str::to_string).collect()
}

/// Programming languages present in a skills list, in the order the skills
/// list gives them.
///
/// A repeated skill is listed once, so the stats count each candidate at most
/// once per language.
pub fn extract_programming_languages(skills: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for skill in skills {
        if PROGRAMMING_LANGUAGES.contains(&skill.as_str()) && !out.contains(skill) {
            out.push(skill.clone());
        }
    }
    out
}

/// Spoken-language filter options, alphabetical.
pub fn supported_languages() -> Vec<String> {
    let mut names: Vec<String> = SPOKEN_LANGUAGES
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    names.sort();
    names
}

/// Programming-language filter options, in canonical order.
pub fn programming_languages() -> Vec<String> {
    PROGRAMMING_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

pub fn culture_tags() -> Vec<String> {
    let mut tags: Vec<String> = CULTURE_TAGS.iter().map(|s| s.to_string()).collect();
    tags.sort();
    tags
}
