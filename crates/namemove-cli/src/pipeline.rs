//! The run pipeline with explicit stages.
//!
//! 1. **Ingest**: read the roster, resolve the name columns, extract records
//! 2. **Index**: scan the source roots one directory level deep
//! 3. **Resolve**: match records to folders, deduplicated by folder
//! 4. **Act**: plan collision-free destinations, then move or simulate
//! 5. **Report**: write the two-part audit log into the destination root
//!
//! Matching and resolution are identical in both run modes; only stage 4
//! consults the mode flag.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info, info_span};

use namemove_ingest::{NameColumns, RosterTable, extract_records, read_roster, resolve_name_columns};
use namemove_match::{DestinationPlanner, resolve_matches, scan_source_roots};
use namemove_model::{MoveOutcome, RunConfig, RunCounts, RunMode};
use namemove_relocate::relocate_folder;
use namemove_report::{
    MatchLogRow, report_paths, row_timestamp, run_stamp, write_match_log, write_not_found,
};

use crate::types::{InspectResult, RunResult};

/// Action column vocabulary of the audit log.
fn action_label(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Perform => "MOVE",
        RunMode::Simulate => "DRY-RUN (move planned)",
    }
}

/// Execute one full run.
///
/// Aborts (unreadable roster, unresolvable schema, report-write failure)
/// surface as errors. Per-folder move failures and skipped roots are
/// recorded in the result and never abort the run.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("run", input = %config.input.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let table = read_roster(&config.input)?;
    if table.is_empty() {
        info!("roster has no data rows; nothing to match");
        return Ok(RunResult {
            input: config.input.clone(),
            mode: config.mode,
            counts: RunCounts::default(),
            skipped_roots: Vec::new(),
            matches_report: None,
            not_found_report: None,
            empty_input: true,
        });
    }
    let columns = resolve_name_columns(&table, &config.input)?;
    let records = extract_records(&table, &columns);
    info!(records = records.len(), "roster ingested");

    // =========================================================================
    // Stage 2: Index
    // =========================================================================
    let scan = scan_source_roots(&config.sources);
    info!(
        folders = scan.folders_scanned,
        skipped_roots = scan.skipped_roots.len(),
        "source roots indexed"
    );

    // =========================================================================
    // Stage 3: Resolve
    // =========================================================================
    let outcome = resolve_matches(&records, &scan.index);
    let records_matched = outcome.record_matched.iter().filter(|m| **m).count();
    info!(
        folders_matched = outcome.folders.len(),
        records_matched,
        records_unmatched = records.len() - records_matched,
        "matches resolved"
    );

    let mut counts = RunCounts {
        records_total: records.len(),
        records_matched,
        records_unmatched: records.len() - records_matched,
        folders_scanned: scan.folders_scanned,
        folders_matched: outcome.folders.len(),
        roots_skipped: scan.skipped_roots.len(),
        ..RunCounts::default()
    };

    // =========================================================================
    // Stage 4: Act
    // =========================================================================
    fs::create_dir_all(&config.destination).with_context(|| {
        format!(
            "create destination root {}",
            config.destination.display()
        )
    })?;
    let mut planner = DestinationPlanner::new(&config.destination);
    let mut log_rows = Vec::with_capacity(outcome.folders.len());
    for folder in &outcome.folders {
        let destination = planner.resolve(&folder.entry.name);
        let move_outcome = match config.mode {
            RunMode::Simulate => {
                counts.planned += 1;
                MoveOutcome::Simulated
            }
            RunMode::Perform => match relocate_folder(&folder.entry.path, &destination) {
                Ok(()) => {
                    counts.moved += 1;
                    MoveOutcome::Moved
                }
                Err(err) => {
                    counts.move_errors += 1;
                    error!(
                        folder = %folder.entry.path.display(),
                        %err,
                        "move failed; continuing with remaining folders"
                    );
                    MoveOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            },
        };
        info!(
            action = action_label(config.mode),
            source = %folder.entry.path.display(),
            destination = %destination.display(),
            result = %move_outcome.result_label(),
            "folder processed"
        );
        log_rows.push(MatchLogRow {
            matched_variants: folder.joined_keys(),
            folder_name: folder.entry.name.clone(),
            source_folder: folder.entry.path.display().to_string(),
            destination_folder: destination.display().to_string(),
            action: action_label(config.mode).to_string(),
            result: move_outcome.result_label(),
            timestamp: row_timestamp(Local::now()),
        });
    }

    // =========================================================================
    // Stage 5: Report
    // =========================================================================
    let stamp = run_stamp(Local::now());
    let reports = report_paths(&config.destination, &stamp);
    write_match_log(&reports.matches, &log_rows)?;
    write_not_found(
        &reports.not_found,
        &columns.headers(),
        &unmatched_rows(&table, &columns, &outcome.record_matched),
    )?;
    info!(
        matches = %reports.matches.display(),
        not_found = %reports.not_found.display(),
        "audit log written"
    );

    Ok(RunResult {
        input: config.input.clone(),
        mode: config.mode,
        counts,
        skipped_roots: scan.skipped_roots,
        matches_report: Some(reports.matches),
        not_found_report: Some(reports.not_found),
        empty_input: false,
    })
}

/// Resolve columns and scan roots without planning or acting.
pub fn inspect(input: &Path, sources: &[PathBuf]) -> Result<InspectResult> {
    let table = read_roster(input)?;
    let columns = resolve_name_columns(&table, input)?;
    let records = extract_records(&table, &columns);
    let scan = scan_source_roots(sources);

    let mut resolved_columns = Vec::new();
    for (label, column) in [
        ("surname", &columns.surname),
        ("given", &columns.given),
        ("preferred", &columns.preferred),
    ] {
        if let Some(column) = column {
            resolved_columns.push((label.to_string(), column.header.clone()));
        }
    }

    Ok(InspectResult {
        input: input.to_path_buf(),
        resolved_columns,
        records_total: records.len(),
        folders_scanned: scan.folders_scanned,
        skipped_roots: scan.skipped_roots,
    })
}

/// Unmatched roster rows, restricted to the resolved columns, values as read.
fn unmatched_rows(
    table: &RosterTable,
    columns: &NameColumns,
    record_matched: &[bool],
) -> Vec<Vec<String>> {
    let resolved = columns.resolved();
    record_matched
        .iter()
        .enumerate()
        .filter(|(_, matched)| !**matched)
        .map(|(row, _)| {
            resolved
                .iter()
                .map(|column| table.cell(row, column.index).to_string())
                .collect()
        })
        .collect()
}
