use thiserror::Error;

/// Export-side failures.
///
/// The two empty variants are notices for the recruiter rather than faults:
/// nothing is written and the dashboard shows the message as-is.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No candidates to export")]
    NoCandidates,

    #[error("No candidates selected")]
    NoneSelected,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Could not write file: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// True for the "nothing to export" notices.
    pub fn is_notice(&self) -> bool {
        matches!(self, ExportError::NoCandidates | ExportError::NoneSelected)
    }
}
