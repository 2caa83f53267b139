//! The cleaning result handed back to callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::table::FlaggedRow;

/// Name of the serialized issue-flag column in the output table.
pub const ISSUES_COLUMN: &str = "__issues";

/// The cleaned table: canonical columns (plus derived fields and the
/// issues column) over the surviving rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanTable {
    /// Output column order: schema fields, derived fields, `__issues`.
    pub columns: Vec<String>,
    pub rows: Vec<FlaggedRow>,
}

impl CleanTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Per-invocation frequency summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub rows_in: usize,
    pub rows_out: usize,
    /// Count per individual flag token. Never contains an entry for the
    /// empty flag set.
    pub issue_counts: BTreeMap<String, u64>,
}

/// Everything a cleaning invocation produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningResult {
    pub table: CleanTable,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_round_trips_through_json() {
        let mut issue_counts = BTreeMap::new();
        issue_counts.insert("NEGATIVE_QTY".to_string(), 2u64);
        let summary = Summary {
            rows_in: 5,
            rows_out: 3,
            issue_counts,
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: Summary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, summary);
        assert!(json.contains("\"rows_in\":5"));
    }
}
