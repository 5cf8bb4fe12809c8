//! Name-column resolution.
//!
//! Roster exports spell the three name columns many different ways. Each
//! field has a set of accepted header spellings, looked up case-insensitively
//! against the actual headers, first verbatim and then with spaces and
//! underscores squashed. The resolved schema keeps the original header
//! spelling and position so the unmatched-records report can reproduce the
//! input exactly.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use namemove_model::NameRecord;

use crate::error::{IngestError, Result};
use crate::roster::RosterTable;

const SURNAME_HEADERS: &[&str] = &[
    "surname",
    "last name",
    "last_name",
    "family name",
    "family_name",
    "lastname",
];

const GIVEN_HEADERS: &[&str] = &[
    "given names",
    "given name",
    "first names",
    "first name",
    "first_name",
    "first",
    "firstname",
];

const PREFERRED_HEADERS: &[&str] = &[
    "preferred name",
    "preferred",
    "preferred_name",
    "preferred given name",
    "nickname",
];

/// One resolved column: the header as it appears in the input, plus its
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub header: String,
    pub index: usize,
}

/// The resolved roster schema. At least one field is always present.
#[derive(Debug, Clone, Default)]
pub struct NameColumns {
    pub surname: Option<ResolvedColumn>,
    pub given: Option<ResolvedColumn>,
    pub preferred: Option<ResolvedColumn>,
}

impl NameColumns {
    /// The resolved columns in report order: surname, given, preferred.
    pub fn resolved(&self) -> Vec<&ResolvedColumn> {
        [&self.surname, &self.given, &self.preferred]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Original header spellings in report order.
    pub fn headers(&self) -> Vec<String> {
        self.resolved().iter().map(|c| c.header.clone()).collect()
    }
}

fn squash(value: &str) -> String {
    value.replace([' ', '_'], "")
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<ResolvedColumn> {
    let mut lower_map: BTreeMap<String, usize> = BTreeMap::new();
    let mut squashed_map: BTreeMap<String, usize> = BTreeMap::new();
    for (idx, header) in headers.iter().enumerate() {
        let lower = header.to_lowercase();
        lower_map.entry(lower.clone()).or_insert(idx);
        squashed_map.entry(squash(&lower)).or_insert(idx);
    }

    for candidate in candidates {
        if let Some(&idx) = lower_map.get(*candidate) {
            return Some(ResolvedColumn {
                header: headers[idx].clone(),
                index: idx,
            });
        }
    }
    for candidate in candidates {
        if let Some(&idx) = squashed_map.get(&squash(candidate)) {
            return Some(ResolvedColumn {
                header: headers[idx].clone(),
                index: idx,
            });
        }
    }
    None
}

/// Resolve the surname/given/preferred columns against the roster headers.
///
/// At least one of the three must resolve; otherwise the run aborts before
/// any matching is attempted.
pub fn resolve_name_columns(table: &RosterTable, path: &Path) -> Result<NameColumns> {
    let columns = NameColumns {
        surname: find_column(&table.headers, SURNAME_HEADERS),
        given: find_column(&table.headers, GIVEN_HEADERS),
        preferred: find_column(&table.headers, PREFERRED_HEADERS),
    };
    if columns.resolved().is_empty() {
        return Err(IngestError::SchemaUnresolvable {
            path: path.to_path_buf(),
        });
    }
    for column in columns.resolved() {
        debug!(header = %column.header, index = column.index, "resolved name column");
    }
    Ok(columns)
}

/// Extract one typed record per roster row, in input order.
pub fn extract_records(table: &RosterTable, columns: &NameColumns) -> Vec<NameRecord> {
    (0..table.rows.len())
        .map(|row| {
            NameRecord::new(
                field_value(table, row, &columns.surname),
                field_value(table, row, &columns.given),
                field_value(table, row, &columns.preferred),
            )
        })
        .collect()
}

fn field_value<'t>(table: &'t RosterTable, row: usize, column: &Option<ResolvedColumn>) -> &'t str {
    column
        .as_ref()
        .map(|c| table.cell(row, c.index))
        .unwrap_or("")
}
