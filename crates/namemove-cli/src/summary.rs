use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use namemove_cli::types::{InspectResult, RunResult};
use namemove_model::RunMode;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Mode: {}", mode_label(result.mode));
    if result.empty_input {
        println!("Roster has no data rows; nothing was matched or moved.");
        return;
    }
    if let Some(path) = &result.matches_report {
        println!("Match log: {}", path.display());
    }
    if let Some(path) = &result.not_found_report {
        println!("Not-found log: {}", path.display());
    }
    for root in &result.skipped_roots {
        println!("Skipped source root: {}", root.display());
    }

    let counts = &result.counts;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Matched"),
        header_cell("Unmatched"),
        header_cell("Folders scanned"),
        header_cell("Folders matched"),
        header_cell("Moved"),
        header_cell("Planned"),
        header_cell("Errors"),
        header_cell("Roots skipped"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(counts.records_total),
        Cell::new(counts.records_matched),
        warn_cell(counts.records_unmatched, Color::Yellow),
        Cell::new(counts.folders_scanned),
        Cell::new(counts.folders_matched),
        Cell::new(counts.moved),
        Cell::new(counts.planned),
        warn_cell(counts.move_errors, Color::Red),
        warn_cell(counts.roots_skipped, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_inspect_summary(result: &InspectResult) {
    println!("Input: {}", result.input.display());
    for (field, header) in &result.resolved_columns {
        println!("Resolved {field} column: {header}");
    }
    for root in &result.skipped_roots {
        println!("Skipped source root: {}", root.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Folders scanned"),
        header_cell("Roots skipped"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.records_total),
        Cell::new(result.folders_scanned),
        warn_cell(result.skipped_roots.len(), Color::Yellow),
    ]);
    println!("{table}");
}

fn mode_label(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Perform => "move",
        RunMode::Simulate => "dry-run",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 0..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn warn_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
