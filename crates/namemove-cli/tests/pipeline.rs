//! End-to-end pipeline tests over real temp directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use namemove_cli::pipeline;
use namemove_model::{RunConfig, RunMode};

fn write_roster(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("roster.csv");
    fs::write(&path, contents).expect("write roster");
    path
}

fn mkdirs(root: &Path, names: &[&str]) {
    for name in names {
        fs::create_dir_all(root.join(name)).expect("create folder");
    }
}

fn config(input: PathBuf, sources: Vec<PathBuf>, destination: PathBuf, mode: RunMode) -> RunConfig {
    RunConfig {
        input,
        sources,
        destination,
        mode,
    }
}

#[test]
fn dry_run_matches_both_records_and_moves_nothing() {
    let work = TempDir::new().unwrap();
    let input = write_roster(
        work.path(),
        "Surname,Given Names\nNguyen,An\nPérez,José\n",
    );
    let source = work.path().join("people");
    mkdirs(&source, &["An Nguyen", "jose-perez", "Bystander"]);
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![source.clone()],
        destination.clone(),
        RunMode::Simulate,
    ))
    .expect("run");

    assert_eq!(result.counts.records_total, 2);
    assert_eq!(result.counts.records_matched, 2);
    assert_eq!(result.counts.records_unmatched, 0);
    assert_eq!(result.counts.folders_scanned, 3);
    assert_eq!(result.counts.folders_matched, 2);
    assert_eq!(result.counts.planned, 2);
    assert_eq!(result.counts.moved, 0);

    // Sources untouched, destination holds only the reports.
    assert!(source.join("An Nguyen").exists());
    assert!(source.join("jose-perez").exists());
    let matches_csv = fs::read_to_string(result.matches_report.unwrap()).unwrap();
    let lines: Vec<&str> = matches_csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("An Nguyen"));
    assert!(lines[1].contains("DRY-RUN (move planned)"));
    assert!(lines[2].contains("jose-perez"));

    let not_found_csv = fs::read_to_string(result.not_found_report.unwrap()).unwrap();
    assert_eq!(not_found_csv.trim_end(), "Surname,Given Names");
}

#[test]
fn perform_mode_moves_matched_folders_into_destination() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Surname,First Name\nSmith,Jane\n");
    let source = work.path().join("people");
    mkdirs(&source, &["Jane Smith", "Someone Else"]);
    fs::write(source.join("Jane Smith/notes.txt"), "hello").unwrap();
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![source.clone()],
        destination.clone(),
        RunMode::Perform,
    ))
    .expect("run");

    assert_eq!(result.counts.moved, 1);
    assert_eq!(result.counts.move_errors, 0);
    assert!(!source.join("Jane Smith").exists());
    assert!(source.join("Someone Else").exists());
    assert_eq!(
        fs::read_to_string(destination.join("Jane Smith/notes.txt")).unwrap(),
        "hello"
    );

    let matches_csv = fs::read_to_string(result.matches_report.unwrap()).unwrap();
    assert!(matches_csv.contains("MOVE"));
    assert!(matches_csv.contains("Success"));
}

#[test]
fn colliding_folder_names_get_numbered_destinations() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Surname\nSmith\n");
    let first = work.path().join("root_a");
    let second = work.path().join("root_b");
    mkdirs(&first, &["Smith"]);
    mkdirs(&second, &["Smith"]);
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![first.clone(), second.clone()],
        destination.clone(),
        RunMode::Perform,
    ))
    .expect("run");

    assert_eq!(result.counts.folders_matched, 2);
    assert_eq!(result.counts.moved, 2);
    assert!(destination.join("Smith").exists());
    assert!(destination.join("Smith_1").exists());
}

#[test]
fn dry_run_collisions_stay_distinct_without_filesystem_entries() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Surname\nSmith\n");
    let first = work.path().join("root_a");
    let second = work.path().join("root_b");
    mkdirs(&first, &["Smith"]);
    mkdirs(&second, &["Smith"]);
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![first, second],
        destination.clone(),
        RunMode::Simulate,
    ))
    .expect("run");

    assert_eq!(result.counts.planned, 2);
    let matches_csv = fs::read_to_string(result.matches_report.unwrap()).unwrap();
    let smith = destination.join("Smith");
    let smith_1 = destination.join("Smith_1");
    assert!(matches_csv.contains(&smith.display().to_string()));
    assert!(matches_csv.contains(&smith_1.display().to_string()));
    assert!(!smith.exists());
    assert!(!smith_1.exists());
}

#[test]
fn missing_root_warns_and_matching_continues() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Surname,First Name\nNguyen,An\n");
    let source = work.path().join("people");
    mkdirs(&source, &["An Nguyen"]);
    let missing = work.path().join("no-such-root");
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![missing.clone(), source],
        destination,
        RunMode::Simulate,
    ))
    .expect("run");

    assert_eq!(result.skipped_roots, vec![missing]);
    assert_eq!(result.counts.roots_skipped, 1);
    assert_eq!(result.counts.records_matched, 1);
    assert_eq!(result.counts.folders_matched, 1);
}

#[test]
fn blank_records_land_in_the_not_found_report() {
    let work = TempDir::new().unwrap();
    // The second row is blank in every name field but still a data row
    // thanks to its ID cell.
    let input = write_roster(
        work.path(),
        "ID,Surname,First Name\n1,Nguyen,An\n2, , \n3,Unknown,Person\n",
    );
    let source = work.path().join("people");
    mkdirs(&source, &["An Nguyen"]);
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![source],
        destination,
        RunMode::Simulate,
    ))
    .expect("run");

    assert_eq!(result.counts.records_total, 3);
    assert_eq!(result.counts.records_unmatched, 2);
    let not_found_csv = fs::read_to_string(result.not_found_report.unwrap()).unwrap();
    let lines: Vec<&str> = not_found_csv.lines().collect();
    assert_eq!(lines[0], "Surname,First Name");
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().any(|line| line.contains("Unknown,Person")));
}

#[test]
fn empty_roster_stops_gracefully() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Surname,First Name\n");
    let destination = work.path().join("archive");

    let result = pipeline::run(&config(
        input,
        vec![work.path().join("people")],
        destination.clone(),
        RunMode::Perform,
    ))
    .expect("run");

    assert!(result.empty_input);
    assert_eq!(result.counts, Default::default());
    assert!(result.matches_report.is_none());
    // The run stopped before touching the destination.
    assert!(!destination.exists());
}

#[test]
fn unresolvable_schema_aborts_the_run() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Employee ID,Department\n42,Finance\n");

    let result = pipeline::run(&config(
        input,
        vec![work.path().join("people")],
        work.path().join("archive"),
        RunMode::Perform,
    ));
    assert!(result.is_err());
}

#[test]
fn inspect_reports_columns_and_scan_counts() {
    let work = TempDir::new().unwrap();
    let input = write_roster(work.path(), "Last_Name,Nickname\nSmith,Janey\n");
    let source = work.path().join("people");
    mkdirs(&source, &["Janey Smith"]);

    let result = pipeline::inspect(&input, &[source]).expect("inspect");
    assert_eq!(result.records_total, 1);
    assert_eq!(result.folders_scanned, 1);
    assert_eq!(
        result.resolved_columns,
        vec![
            ("surname".to_string(), "Last_Name".to_string()),
            ("preferred".to_string(), "Nickname".to_string()),
        ]
    );
}
