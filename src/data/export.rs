use chrono::NaiveDate;

use super::model::Candidate;
use crate::error::ExportError;

// ---------------------------------------------------------------------------
// CSV layout
// ---------------------------------------------------------------------------

pub const CSV_HEADER: [&str; 15] = [
    "First Name",
    "Last Name",
    "Email",
    "University",
    "Major",
    "Graduation Year",
    "Videos Completed",
    "Has Video 1",
    "Has Video 2",
    "Has Video 3",
    "Skills",
    "Culture Tags",
    "LinkedIn URL",
    "GitHub URL",
    "Resume URL",
];

/// Which subset an export covers. Drives the filename and the empty notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Filtered,
    Selected,
}

impl ExportScope {
    pub fn file_name(self, date: NaiveDate) -> String {
        let day = date.format("%Y-%m-%d");
        match self {
            ExportScope::Filtered => format!("drafted-candidates-{day}.csv"),
            ExportScope::Selected => format!("drafted-candidates-selected-{day}.csv"),
        }
    }

    fn empty_error(self) -> ExportError {
        match self {
            ExportScope::Filtered => ExportError::NoCandidates,
            ExportScope::Selected => ExportError::NoneSelected,
        }
    }
}

/// A finished export, ready to hand to a file sink.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

fn candidate_row(c: &Candidate) -> [String; 15] {
    [
        c.first_name.clone(),
        c.last_name.clone(),
        c.email.clone(),
        c.university.clone(),
        c.major.clone(),
        c.graduation_year_text(),
        c.videos_completed().to_string(),
        yes_no(c.has_video1()),
        yes_no(c.has_video2()),
        yes_no(c.has_video3()),
        c.skills.join("; "),
        c.culture_tags().join("; "),
        c.linked_in_url.clone().unwrap_or_default(),
        c.git_hub_url.clone().unwrap_or_default(),
        c.resume.clone().unwrap_or_default(),
    ]
}

/// Serialise candidates to a CSV document: header first, `\n` line endings,
/// fields quoted only when they contain a comma, quote or line break.
pub fn candidates_to_csv(candidates: &[&Candidate]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for c in candidates {
        writer.write_record(candidate_row(c))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Build the export for `scope`. An empty list is reported as the matching
/// notice and produces no document.
pub fn export(
    scope: ExportScope,
    candidates: &[&Candidate],
    today: NaiveDate,
) -> Result<CsvExport, ExportError> {
    if candidates.is_empty() {
        return Err(scope.empty_error());
    }
    Ok(CsvExport {
        file_name: scope.file_name(today),
        contents: candidates_to_csv(candidates)?,
    })
}

/// Comma-separated email list for the clipboard.
pub fn joined_emails(candidates: &[&Candidate]) -> String {
    candidates
        .iter()
        .map(|c| c.email.as_str())
        .filter(|e| !e.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Culture, GraduationYear};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn full() -> Candidate {
        Candidate {
            id: "c1".into(),
            email: "ana@uni.edu".into(),
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            university: "Stanford University".into(),
            major: "Biology, B.S. \"Honors\"".into(),
            graduation_year: Some(GraduationYear::Year(2025)),
            skills: vec!["Python".into(), "Figma".into()],
            culture: Some(Culture {
                culture_tags: vec!["Collaborative".into(), "Innovative".into()],
            }),
            linked_in_url: Some("https://linkedin.com/in/ana".into()),
            video1: Some("v1".into()),
            video3: Some("v3".into()),
            ..Default::default()
        }
    }

    #[test]
    fn header_and_row_layout() {
        let c = full();
        let doc = candidates_to_csv(&[&c]).unwrap();
        let mut lines = doc.lines();
        assert_eq!(
            lines.next().unwrap(),
            "First Name,Last Name,Email,University,Major,Graduation Year,Videos Completed,\
             Has Video 1,Has Video 2,Has Video 3,Skills,Culture Tags,LinkedIn URL,GitHub URL,Resume URL"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Ana,Lopez,ana@uni.edu,Stanford University,\"Biology, B.S. \"\"Honors\"\"\",2025,2,\
             Yes,No,Yes,Python; Figma,Collaborative; Innovative,https://linkedin.com/in/ana,,"
        );
        assert!(lines.next().is_none());
        assert!(doc.ends_with('\n'));
        assert!(!doc.contains('\r'));
    }

    #[test]
    fn quoted_field_parses_back() {
        let c = full();
        let doc = candidates_to_csv(&[&c]).unwrap();
        let mut reader = csv::Reader::from_reader(doc.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[4], "Biology, B.S. \"Honors\"");
    }

    #[test]
    fn missing_fields_render_empty() {
        let c = Candidate::default();
        let doc = candidates_to_csv(&[&c]).unwrap();
        let row = doc.lines().nth(1).unwrap();
        assert_eq!(row, ",,,,,,0,No,No,No,,,,,");
        assert!(!doc.contains("null"));
    }

    #[test]
    fn newline_in_field_is_quoted() {
        let c = Candidate {
            first_name: "Multi\nLine".into(),
            ..Default::default()
        };
        let doc = candidates_to_csv(&[&c]).unwrap();
        assert!(doc.contains("\"Multi\nLine\""));
    }

    #[test]
    fn file_names_follow_convention() {
        assert_eq!(
            ExportScope::Filtered.file_name(day()),
            "drafted-candidates-2026-03-09.csv"
        );
        assert_eq!(
            ExportScope::Selected.file_name(day()),
            "drafted-candidates-selected-2026-03-09.csv"
        );
    }

    #[test]
    fn empty_export_is_a_notice() {
        let err = export(ExportScope::Filtered, &[], day()).unwrap_err();
        assert!(err.is_notice());
        assert_eq!(err.to_string(), "No candidates to export");
        let err = export(ExportScope::Selected, &[], day()).unwrap_err();
        assert_eq!(err.to_string(), "No candidates selected");
    }

    #[test]
    fn export_carries_name_and_contents() {
        let c = full();
        let out = export(ExportScope::Selected, &[&c], day()).unwrap();
        assert_eq!(out.file_name, "drafted-candidates-selected-2026-03-09.csv");
        assert_eq!(out.contents.lines().count(), 2);
    }

    #[test]
    fn joins_emails_skipping_blanks() {
        let a = full();
        let b = Candidate::default();
        let c = Candidate {
            email: "bo@x.io".into(),
            ..Default::default()
        };
        assert_eq!(joined_emails(&[&a, &b, &c]), "ana@uni.edu, bo@x.io");
    }
}
