//! Typed cell values with an explicit missing marker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Declared type of a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Date,
    Integer,
    Decimal,
}

/// A single normalized cell.
///
/// `Missing` marks a value that could not be coerced (or a date field that
/// had no source column). It is distinct from a parsed zero so that a
/// legitimate `0` in the input stays observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Text(String),
    Date(NaiveDate),
    Int(i64),
    Num(f64),
    Missing,
}

impl Value {
    /// Concrete zero for an unmapped field of the given type.
    ///
    /// Unmapped numeric fields default to a real zero, not `Missing`; only
    /// coercion failures produce `Missing`.
    pub fn zero(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => Value::Text(String::new()),
            FieldType::Date => Value::Missing,
            FieldType::Integer => Value::Int(0),
            FieldType::Decimal => Value::Num(0.0),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// String form for export. `Missing` renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Int(v) => v.to_string(),
            Value::Num(v) => render_numeric(*v),
            Value::Missing => String::new(),
        }
    }
}

/// Format a float without trailing zeros ("10.50" -> "10.5", "10.0" -> "10").
fn render_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
