//! Pipeline orchestration.
//!
//! Stage order is fixed: match -> normalize -> evaluate -> tally -> remove
//! -> dedup -> aggregate. Flags are always computed before any row is
//! removed, and the summary tally happens before removal so dropped rows
//! still count.

use chrono::{NaiveDate, Utc};

use tidysheet_map::match_columns;
use tidysheet_model::{
    CleanError, CleaningResult, DEFAULT_FUZZY_THRESHOLD, InvoiceOptions, RawTable, StockOptions,
};
use tidysheet_transform::normalize;
use tidysheet_validate::{RuleSet, dedupe_by_key, drop_flagged, invoice_rules, stock_rules};

use crate::aggregate;

/// Clean an invoice ledger.
pub fn clean_invoices(
    table: &RawTable,
    options: &InvoiceOptions,
) -> Result<CleaningResult, CleanError> {
    options.validate()?;
    ensure_non_empty(table)?;

    let schema = tidysheet_schema::invoice();
    let rules = invoice_rules(options);
    let result = run(
        table,
        schema,
        &rules,
        options.fuzzy_threshold,
        options.drop_duplicates,
    );
    tracing::info!(
        pipeline = schema.name,
        rows_in = result.summary.rows_in,
        rows_out = result.summary.rows_out,
        "cleaning complete"
    );
    Ok(result)
}

/// Clean a stock sheet, with expiry rules evaluated relative to the
/// current UTC date.
pub fn clean_stock(table: &RawTable, options: &StockOptions) -> Result<CleaningResult, CleanError> {
    clean_stock_at(table, options, Utc::now().date_naive())
}

/// Clean a stock sheet relative to an explicit reference date.
///
/// The engine stays a pure function of its inputs; callers that need
/// reproducible output (tests, replays) pass `today` themselves.
pub fn clean_stock_at(
    table: &RawTable,
    options: &StockOptions,
    today: NaiveDate,
) -> Result<CleaningResult, CleanError> {
    options.validate()?;
    ensure_non_empty(table)?;

    let schema = tidysheet_schema::stock();
    let rules = stock_rules(options, today);
    let result = run(table, schema, &rules, DEFAULT_FUZZY_THRESHOLD, false);
    tracing::info!(
        pipeline = schema.name,
        rows_in = result.summary.rows_in,
        rows_out = result.summary.rows_out,
        "cleaning complete"
    );
    Ok(result)
}

/// The shared stage sequence. `drop_duplicates` only has an effect when the
/// schema declares an identifier field.
fn run(
    table: &RawTable,
    schema: &tidysheet_schema::Schema,
    rules: &RuleSet,
    fuzzy_threshold: u8,
    drop_duplicates: bool,
) -> CleaningResult {
    let rows_in = table.row_count();

    let mapping = match_columns(&table.columns, schema, fuzzy_threshold);
    let rows = normalize(table, &mapping, schema);
    let flagged = rules.evaluate(rows);

    // Tallied before removal: a removed row's flags still count.
    let issue_counts = aggregate::count_flags(&flagged);

    let kept = drop_flagged(flagged, rules);
    let kept = match (drop_duplicates, schema.key_field) {
        (true, Some(key)) => dedupe_by_key(kept, key),
        _ => kept,
    };

    aggregate::build_result(schema, kept, rows_in, issue_counts)
}

fn ensure_non_empty(table: &RawTable) -> Result<(), CleanError> {
    if table.column_count() == 0 {
        return Err(CleanError::EmptyColumns);
    }
    if table.row_count() == 0 {
        return Err(CleanError::EmptyRows);
    }
    Ok(())
}
