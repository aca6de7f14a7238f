use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): every catalog was written
/// - `Error` (2): the run aborted (bad path, parse error, invalid domain, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Extraction completed.
    Success,
    /// Extraction aborted.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
