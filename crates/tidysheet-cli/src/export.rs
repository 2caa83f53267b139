//! Writes a cleaned table back out as CSV.

use std::path::Path;

use anyhow::{Context, Result};

use tidysheet_model::{CleanTable, ISSUES_COLUMN};

/// Write `table` to `path`, one record per surviving row, with the flag
/// set serialized into the issues column.
pub fn write_clean_csv(path: &Path, table: &CleanTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer
        .write_record(&table.columns)
        .context("failed to write CSV header")?;

    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                if column == ISSUES_COLUMN {
                    row.issues_string()
                } else {
                    row.row.get(column).render()
                }
            })
            .collect();
        writer
            .write_record(&record)
            .context("failed to write CSV record")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = table.rows.len(), "cleaned CSV written");
    Ok(())
}
