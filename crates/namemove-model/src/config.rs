use std::path::PathBuf;

/// Whether a run mutates the filesystem or only records what it would do.
///
/// The matching and resolution logic is identical in both modes; only the
/// action stage consults this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RunMode {
    /// Perform the relocations.
    Perform,
    /// Record every relocation as planned without touching the filesystem.
    Simulate,
}

impl RunMode {
    pub fn is_simulate(self) -> bool {
        matches!(self, Self::Simulate)
    }
}

/// Explicit configuration for one run, passed into the pipeline entry point.
///
/// The engine reads no global state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Roster file with the name columns.
    pub input: PathBuf,
    /// Source roots scanned one directory level deep.
    pub sources: Vec<PathBuf>,
    /// Destination root receiving the matched folders and the audit log.
    pub destination: PathBuf,
    pub mode: RunMode,
}
