use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use tidysheet_model::RawTable;

/// Header labels keep their casing but lose BOM, outer whitespace, and
/// runs of inner whitespace.
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

/// Read a CSV stream into a `RawTable`.
///
/// Rows shorter than the header are padded with empty cells; longer rows
/// are truncated to the header width.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("failed to read CSV header row")?
        .clone();
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    let mut table = RawTable::new(columns);

    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        let mut row: Vec<String> = record.iter().map(normalize_cell).collect();
        row.resize(table.column_count(), String::new());
        table.push_row(row);
    }

    tracing::debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        "CSV decoded"
    );
    Ok(table)
}

/// Read a CSV file into a `RawTable`.
pub fn read_csv_path(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_csv(file).with_context(|| format!("failed to parse {}", path.display()))
}
