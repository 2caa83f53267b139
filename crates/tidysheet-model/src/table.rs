//! Raw input tables and normalized row structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// An already-decoded source table: ordered column labels plus string rows.
///
/// The cleaning core only reads this; decoding file bytes into a `RawTable`
/// is the ingest layer's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Cell at (row, column); out-of-range reads yield the empty string so
    /// ragged rows behave like rows padded with blanks.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

static MISSING: Value = Value::Missing;

/// One fully-normalized row: a value for every canonical field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    cells: BTreeMap<String, Value>,
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.cells.insert(field.to_string(), value);
    }

    /// Value for a field; unknown fields read as `Missing`.
    pub fn get(&self, field: &str) -> &Value {
        self.cells.get(field).unwrap_or(&MISSING)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).as_f64()
    }

    pub fn date(&self, field: &str) -> Option<chrono::NaiveDate> {
        self.get(field).as_date()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A normalized row together with the issue flags raised on it.
///
/// Flags travel with the row through filtering and dedup; there is no
/// positionally-indexed flag structure anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedRow {
    pub row: NormalizedRow,
    /// Flag tokens in rule-declaration order. Each rule fires at most once
    /// per row, so this is an ordered set.
    pub flags: Vec<String>,
}

impl FlaggedRow {
    pub fn unflagged(row: NormalizedRow) -> Self {
        Self {
            row,
            flags: Vec::new(),
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// The `|`-joined serialization used for the issues column.
    pub fn issues_string(&self) -> String {
        self.flags.join("|")
    }
}
