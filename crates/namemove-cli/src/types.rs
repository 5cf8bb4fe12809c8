use std::path::PathBuf;

use namemove_model::{RunCounts, RunMode};

/// Outcome of one full run, consumed by the summary printer and by tests.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub mode: RunMode,
    pub counts: RunCounts,
    /// Roots that were skipped with a warning.
    pub skipped_roots: Vec<PathBuf>,
    /// Written report files; absent when the run stopped on empty input.
    pub matches_report: Option<PathBuf>,
    pub not_found_report: Option<PathBuf>,
    /// True when the roster had zero data rows and the run stopped early.
    pub empty_input: bool,
}

/// Outcome of an inspect run: what would be matched against, no actions.
#[derive(Debug)]
pub struct InspectResult {
    pub input: PathBuf,
    /// Resolved name columns as (field label, original header) pairs.
    pub resolved_columns: Vec<(String, String)>,
    pub records_total: usize,
    pub folders_scanned: usize,
    pub skipped_roots: Vec<PathBuf>,
}
