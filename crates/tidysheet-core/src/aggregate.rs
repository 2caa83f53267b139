//! Builds the cleaning result from the surviving rows.

use std::collections::BTreeMap;

use tidysheet_model::{CleanTable, CleaningResult, FlaggedRow, ISSUES_COLUMN, Summary};
use tidysheet_schema::Schema;

/// Tally every individual flag token across `rows`.
///
/// Called on the full rule-engine output, before any removal, so flags on
/// rows that are later dropped still reach the summary. Unflagged rows
/// contribute nothing; the empty flag set is never a key.
pub fn count_flags(rows: &[FlaggedRow]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for row in rows {
        for flag in &row.flags {
            *counts.entry(flag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Assemble the output table and summary.
pub fn build_result(
    schema: &Schema,
    rows: Vec<FlaggedRow>,
    rows_in: usize,
    issue_counts: BTreeMap<String, u64>,
) -> CleaningResult {
    let mut columns = schema.output_columns();
    columns.push(ISSUES_COLUMN.to_string());

    let rows_out = rows.len();
    CleaningResult {
        table: CleanTable { columns, rows },
        summary: Summary {
            rows_in,
            rows_out,
            issue_counts,
        },
    }
}
