//! Builds normalized rows from a raw table and a column mapping.

use tidysheet_model::{ColumnMapping, FieldType, NormalizedRow, RawTable, Value};
use tidysheet_schema::{CanonicalField, Schema};

use crate::{datetime, numeric};

/// Coerce one raw cell to the declared field type.
///
/// Failures degrade to `Value::Missing` — distinguishable from a parsed
/// zero and from the concrete zero used for unmapped fields.
pub fn coerce(raw: &str, field_type: FieldType) -> Value {
    match field_type {
        FieldType::Text => Value::Text(raw.to_string()),
        FieldType::Date => datetime::parse_date(raw).map_or(Value::Missing, Value::Date),
        FieldType::Integer => numeric::parse_int_lenient(raw).map_or(Value::Missing, Value::Int),
        FieldType::Decimal => numeric::parse_f64(raw).map_or(Value::Missing, Value::Num),
    }
}

/// Normalize every row of `table` against `schema` using `mapping`.
///
/// Mapped fields read their source column; unmapped fields are filled with
/// the type's zero-value for every row. Derived fields are computed after
/// coercion, with `Missing` absorbing to zero for the arithmetic.
pub fn normalize(table: &RawTable, mapping: &ColumnMapping, schema: &Schema) -> Vec<NormalizedRow> {
    let resolved: Vec<(&CanonicalField, Option<usize>)> = schema
        .fields
        .iter()
        .map(|field| {
            let index = mapping
                .source_for(field.name)
                .and_then(|source| table.column_index(source));
            (field, index)
        })
        .collect();

    let mut rows = Vec::with_capacity(table.row_count());
    for row_index in 0..table.row_count() {
        let mut row = NormalizedRow::new();
        for (field, column_index) in &resolved {
            let value = match column_index {
                Some(column) => coerce(table.cell(row_index, *column), field.field_type),
                None => Value::zero(field.field_type),
            };
            row.set(field.name, value);
        }
        for derived in &schema.derived {
            let left = row.number(derived.left).unwrap_or(0.0);
            let right = row.number(derived.right).unwrap_or(0.0);
            row.set(derived.name, Value::Num(left * right));
        }
        rows.push(row);
    }

    tracing::debug!(
        rows = rows.len(),
        mapped_fields = mapping.len(),
        total_fields = schema.fields.len(),
        "normalization complete"
    );
    rows
}
