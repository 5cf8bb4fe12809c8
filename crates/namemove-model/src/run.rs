/// Outcome of acting on one matched folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The folder was relocated.
    Moved,
    /// Simulate mode: the relocation was recorded but not performed.
    Simulated,
    /// The relocation failed; the run continues with the remaining folders.
    Failed { reason: String },
}

impl MoveOutcome {
    /// Audit-log result column, matching the historical log vocabulary.
    pub fn result_label(&self) -> String {
        match self {
            Self::Moved => "Success".to_string(),
            Self::Simulated => "Simulated".to_string(),
            Self::Failed { reason } => format!("ERROR: {reason}"),
        }
    }
}

/// Structural counters for one run.
///
/// Automated verification reads these instead of parsing log text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunCounts {
    pub records_total: usize,
    pub records_matched: usize,
    pub records_unmatched: usize,
    pub folders_scanned: usize,
    pub folders_matched: usize,
    pub moved: usize,
    pub planned: usize,
    pub move_errors: usize,
    pub roots_skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_labels() {
        assert_eq!(MoveOutcome::Moved.result_label(), "Success");
        assert_eq!(MoveOutcome::Simulated.result_label(), "Simulated");
        let failed = MoveOutcome::Failed {
            reason: "permission denied".to_string(),
        };
        assert_eq!(failed.result_label(), "ERROR: permission denied");
    }
}
