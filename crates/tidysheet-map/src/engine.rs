//! Fuzzy scoring of column labels against canonical alias tables.
//!
//! Scores are the normalized edit-distance ratio (0–100) over
//! case-normalized labels. Each canonical field independently selects the
//! best-scoring (source column, alias) pair; fields scoring below the
//! threshold stay unmapped, which is a soft outcome, not an error.

use rapidfuzz::fuzz;

use tidysheet_model::{ColumnMapping, MappedColumn};
use tidysheet_schema::{CanonicalField, Schema};

/// Match source columns onto every field of `schema`.
///
/// Tie-break: the first source column (in input order) that attains the
/// maximum score wins. A source column may be claimed by more than one
/// canonical field; no mutual-exclusion assignment is performed.
pub fn match_columns(columns: &[String], schema: &Schema, threshold: u8) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for field in &schema.fields {
        let Some(best) = best_match(columns, field) else {
            continue;
        };
        if best.score >= f64::from(threshold) {
            tracing::debug!(
                field = field.name,
                source = %best.source,
                alias = %best.alias,
                score = best.score,
                "column matched"
            );
            mapping.insert(field.name, best);
        } else {
            tracing::debug!(
                field = field.name,
                best_score = best.score,
                threshold,
                "no column above threshold, field left unmapped"
            );
        }
    }
    mapping
}

fn best_match(columns: &[String], field: &CanonicalField) -> Option<MappedColumn> {
    let mut best: Option<MappedColumn> = None;
    for column in columns {
        let normalized_column = normalize(column);
        for alias in field.aliases {
            let score = fuzz::ratio(normalized_column.chars(), normalize(alias).chars()) * 100.0;
            // Strictly-greater keeps the earliest column on ties.
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(MappedColumn {
                    source: column.clone(),
                    alias: (*alias).to_string(),
                    score,
                });
            }
        }
    }
    best
}

/// Case normalization only: trim and lowercase. Separators are significant.
fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
