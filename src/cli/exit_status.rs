use std::process::ExitCode;

/// Exit status for the auditor.
///
/// - `Success` (0): all documents loaded and the report was printed,
///   whether or not any keys differ
/// - `Error` (1): a document could not be read or parsed, or the
///   configuration is invalid
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All documents loaded and the report was printed.
    Success,
    /// A document or the configuration could not be loaded.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
