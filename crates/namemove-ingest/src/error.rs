//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run before any matching is attempted.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Roster file not found or not readable.
    #[error("failed to read roster {path}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Roster has no header row to resolve columns against.
    #[error("roster has no header row: {path}")]
    NoHeader { path: PathBuf },

    /// None of the surname/given/preferred columns could be located.
    #[error(
        "could not find any name column in {path}; expected a surname, given-name, or preferred-name header"
    )]
    SchemaUnresolvable { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::SchemaUnresolvable {
            path: PathBuf::from("/roster.csv"),
        };
        assert!(err.to_string().contains("/roster.csv"));
        assert!(err.to_string().contains("name column"));
    }
}
