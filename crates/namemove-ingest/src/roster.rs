use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// The roster as read: one header row plus string cells.
///
/// Rows are padded or truncated to the header width; fully blank rows are
/// dropped during the read.
#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RosterTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value by row and column index; missing cells read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read the roster CSV.
///
/// The first non-blank row is the header row. Cells are trimmed and
/// BOM-stripped; short records are padded with empty cells so every row has
/// one cell per header.
pub fn read_roster(path: &Path) -> Result<RosterTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let Some(header_row) = raw_rows.first() else {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();

    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "roster read");
    Ok(RosterTable { headers, rows })
}
