use std::process::ExitCode;

/// Process exit status of a sheetcheck run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No issues found (0).
    Success,
    /// At least one issue was reported (1).
    Failure,
    /// The run could not complete, e.g. invalid config (2).
    Error,
}

impl ExitStatus {
    /// Warnings fail the run as well as errors.
    pub fn from_counts(error_count: usize, warning_count: usize) -> Self {
        if error_count + warning_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
