//! Tests for roster reading and column resolution against real files.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use namemove_ingest::{IngestError, extract_records, read_roster, resolve_name_columns};

fn write_roster(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write roster");
    path
}

#[test]
fn reads_roster_and_pads_short_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(
        dir.path(),
        "roster.csv",
        "Surname,Given Names,Preferred Name\nNguyen,An\n\nSmith,Jane,Janey\n",
    );

    let table = read_roster(&path).expect("read roster");
    assert_eq!(
        table.headers,
        vec!["Surname", "Given Names", "Preferred Name"]
    );
    // Blank line dropped, short row padded.
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, 2), "");
    assert_eq!(table.cell(1, 2), "Janey");
}

#[test]
fn strips_byte_order_mark_from_first_header() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(
        dir.path(),
        "roster.csv",
        "\u{feff}Surname,First Name\nPérez,José\n",
    );

    let table = read_roster(&path).expect("read roster");
    assert_eq!(table.headers[0], "Surname");

    let columns = resolve_name_columns(&table, &path).expect("resolve columns");
    let records = extract_records(&table, &columns);
    assert_eq!(records[0].surname, "Pérez");
    assert_eq!(records[0].given, "José");
}

#[test]
fn missing_roster_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.csv");
    let result = read_roster(&path);
    assert!(matches!(result, Err(IngestError::RosterRead { .. })));
}

#[test]
fn header_only_roster_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_roster(dir.path(), "roster.csv", "Surname,First Name\n");
    let table = read_roster(&path).expect("read roster");
    assert!(table.is_empty());
}
