//! Row removal and keep-first deduplication.
//!
//! Both operations preserve input order and only ever drop rows. Removal
//! runs before dedup so invalid rows never compete for "first occurrence".

use std::collections::BTreeSet;

use tidysheet_model::FlaggedRow;

use crate::rules::RuleSet;

/// Drop every row whose flag set contains a `removes_row` flag.
pub fn drop_flagged(rows: Vec<FlaggedRow>, rules: &RuleSet) -> Vec<FlaggedRow> {
    let removal_flags = rules.removal_flags();
    if removal_flags.is_empty() {
        return rows;
    }
    let before = rows.len();
    let kept: Vec<FlaggedRow> = rows
        .into_iter()
        .filter(|row| !removal_flags.iter().any(|flag| row.has_flag(flag)))
        .collect();
    tracing::debug!(removed = before - kept.len(), "removal filter applied");
    kept
}

/// Keep only the first row per distinct value of `key_field`.
///
/// Later duplicates are dropped silently; dedup raises no flag. Rows whose
/// key renders empty are never treated as duplicates of one another.
pub fn dedupe_by_key(rows: Vec<FlaggedRow>, key_field: &str) -> Vec<FlaggedRow> {
    let before = rows.len();
    let mut seen = BTreeSet::new();
    let kept: Vec<FlaggedRow> = rows
        .into_iter()
        .filter(|row| {
            let key = row.row.get(key_field).render();
            if key.trim().is_empty() {
                return true;
            }
            seen.insert(key)
        })
        .collect();
    tracing::debug!(
        key = key_field,
        removed = before - kept.len(),
        "deduplication applied"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;
    use tidysheet_model::{NormalizedRow, Value};

    fn keyed_row(id: &str, marker: i64) -> FlaggedRow {
        let mut row = NormalizedRow::new();
        row.set("invoice_id", Value::Text(id.to_string()));
        row.set("marker", Value::Int(marker));
        FlaggedRow::unflagged(row)
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let rows = vec![keyed_row("A", 1), keyed_row("B", 2), keyed_row("A", 3)];
        let kept = dedupe_by_key(rows, "invoice_id");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].row.get("marker"), &Value::Int(1));
        assert_eq!(kept[1].row.get("marker"), &Value::Int(2));
    }

    #[test]
    fn blank_keys_never_dedupe() {
        let rows = vec![keyed_row("", 1), keyed_row("", 2), keyed_row("  ", 3)];
        let kept = dedupe_by_key(rows, "invoice_id");
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn drop_flagged_is_a_no_op_without_removal_rules() {
        let rules = RuleSet::new(vec![Rule::new("SOFT", false, |_| true)]);
        let rows = rules.evaluate(vec![NormalizedRow::new()]);
        let kept = drop_flagged(rows, &rules);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn drop_flagged_removes_rows_but_keeps_order() {
        let rules = RuleSet::new(vec![Rule::new("NEG", true, |r| {
            r.number("marker").is_some_and(|m| m < 0.0)
        })]);
        let rows: Vec<FlaggedRow> = rules.evaluate(
            vec![1, -2, 3]
                .into_iter()
                .map(|m| {
                    let mut row = NormalizedRow::new();
                    row.set("marker", Value::Int(m));
                    row
                })
                .collect(),
        );
        let kept = drop_flagged(rows, &rules);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].row.get("marker"), &Value::Int(1));
        assert_eq!(kept[1].row.get("marker"), &Value::Int(3));
    }
}
