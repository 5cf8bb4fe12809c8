#![deny(unsafe_code)]

//! Audit report writing.
//!
//! Every run produces a two-part log in the destination root: one CSV with
//! the action taken per matched folder, and one CSV with the input records
//! that matched nothing, reproduced under their original header spellings.
//! Both files are written even when empty, so downstream consumers can rely
//! on a header row being present.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use csv::WriterBuilder;
use serde::Serialize;

/// Column headers of the action log.
pub const MATCH_LOG_HEADERS: [&str; 7] = [
    "Matched Variants",
    "Folder Name",
    "Source Folder",
    "Destination Folder",
    "Action",
    "Result",
    "Timestamp",
];

/// One action-log row, in the resolver's deterministic folder order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchLogRow {
    pub matched_variants: String,
    pub folder_name: String,
    pub source_folder: String,
    pub destination_folder: String,
    pub action: String,
    pub result: String,
    pub timestamp: String,
}

/// The two report files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub matches: PathBuf,
    pub not_found: PathBuf,
}

/// Filename stamp for one run, e.g. `20260807_142500`.
pub fn run_stamp(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Row timestamp for the action log, e.g. `2026-08-07 14:25:00`.
pub fn row_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Report locations inside the destination root for the given run stamp.
pub fn report_paths(destination_root: &Path, stamp: &str) -> ReportPaths {
    ReportPaths {
        matches: destination_root.join(format!("namemove_log_{stamp}_matches.csv")),
        not_found: destination_root.join(format!("namemove_log_{stamp}_not_found.csv")),
    }
}

/// Write the action log. The header row is written even with no rows.
pub fn write_match_log(path: &Path, rows: &[MatchLogRow]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create match log {}", path.display()))?;
    writer
        .write_record(MATCH_LOG_HEADERS)
        .context("write match log header")?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write match log row for {}", row.folder_name))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush match log {}", path.display()))
}

/// Write the unmatched-records log using the resolved original headers, in
/// input order. The header row is written even with no rows.
pub fn write_not_found(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create not-found log {}", path.display()))?;
    writer
        .write_record(headers)
        .context("write not-found header")?;
    for row in rows {
        writer.write_record(row).context("write not-found row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush not-found log {}", path.display()))
}
