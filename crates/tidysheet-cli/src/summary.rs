//! End-of-run summary printed to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use crate::types::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    println!("Pipeline: {}", outcome.pipeline);
    println!("Input: {}", outcome.input.display());
    println!("Cleaned: {}", outcome.output.display());
    if let Some(path) = &outcome.summary_json {
        println!("Summary JSON: {}", path.display());
    }
    println!(
        "Rows: {} in, {} out",
        outcome.summary.rows_in, outcome.summary.rows_out
    );

    if outcome.summary.issue_counts.is_empty() {
        println!("No issues flagged.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut total = 0u64;
    for (flag, count) in &outcome.summary.issue_counts {
        total += count;
        table.add_row(vec![
            Cell::new(flag).fg(Color::Yellow),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
