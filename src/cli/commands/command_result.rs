use crate::cli::exit_status::ExitStatus;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    /// Set when the config file could not be written.
    pub error: Option<String>,
}

/// Result of running sheetcheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check, sorted.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
}

impl CommandResult {
    /// `Failure` when any issue was found or the command could not complete.
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_counts(self.error_count, self.warning_count)
    }
}
