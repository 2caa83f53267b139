//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info_span;

use tidysheet_cli::export::write_clean_csv;
use tidysheet_core::{clean_invoices, clean_stock};
use tidysheet_ingest::read_csv_path;
use tidysheet_model::{CleaningResult, InvoiceOptions, StockOptions};

use crate::cli::{InvoicesArgs, StockArgs};
use crate::types::RunOutcome;

pub fn run_invoices(args: &InvoicesArgs) -> Result<RunOutcome> {
    let span = info_span!("invoices", input = %args.input.display());
    let _guard = span.enter();

    let options = InvoiceOptions::default()
        .with_fuzzy_threshold(args.fuzzy_threshold)
        .with_drop_duplicates(!args.keep_duplicates)
        .with_drop_negative_qty(args.drop_negative_qty)
        .with_flag_due_before_issue(!args.no_flag_due_before_issue);

    let table = read_csv_path(&args.input)?;
    let result = clean_invoices(&table, &options)?;
    finish(
        "invoices",
        &args.input,
        args.output.as_deref(),
        args.summary_json.as_deref(),
        result,
    )
}

pub fn run_stock(args: &StockArgs) -> Result<RunOutcome> {
    let span = info_span!("stock", input = %args.input.display());
    let _guard = span.enter();

    let options = StockOptions::default()
        .with_days_expiring(args.days_expiring)
        .with_drop_negative_qty(args.drop_negative_qty);

    let table = read_csv_path(&args.input)?;
    let result = clean_stock(&table, &options)?;
    finish(
        "stock",
        &args.input,
        args.output.as_deref(),
        args.summary_json.as_deref(),
        result,
    )
}

fn finish(
    pipeline: &'static str,
    input: &Path,
    output: Option<&Path>,
    summary_json: Option<&Path>,
    result: CleaningResult,
) -> Result<RunOutcome> {
    let output = output.map_or_else(|| default_output(input), Path::to_path_buf);
    write_clean_csv(&output, &result.table)?;

    if let Some(path) = summary_json {
        let json = serde_json::to_string_pretty(&result.summary)
            .context("failed to serialize summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(RunOutcome {
        pipeline,
        input: input.to_path_buf(),
        output,
        summary_json: summary_json.map(Path::to_path_buf),
        summary: result.summary,
    })
}

fn default_output(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map_or_else(|| "cleaned".to_string(), |s| s.to_string_lossy().into_owned());
    name.push_str(".clean.csv");
    input.with_file_name(name)
}
