#![deny(unsafe_code)]

//! Canonical schema registry.
//!
//! Each pipeline owns one [`Schema`]: an ordered list of canonical fields
//! with their declared types and alias tables, plus any derived fields.
//! The registries are built once per process and are read-only afterwards;
//! pipelines differ in data, not code.

use std::sync::OnceLock;

use tidysheet_model::FieldType;

pub mod registry;

pub use registry::{invoice_fields, stock_fields};

/// A canonical output column and the source-column names it answers to.
#[derive(Debug, Clone)]
pub struct CanonicalField {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Fuzzy-match candidates, in priority order.
    pub aliases: &'static [&'static str],
}

/// A field computed from two numeric canonical fields after coercion.
#[derive(Debug, Clone)]
pub struct DerivedField {
    pub name: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

/// One pipeline's canonical schema.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<CanonicalField>,
    pub derived: Vec<DerivedField>,
    /// Identifier field used for keep-first deduplication, when the
    /// pipeline has one.
    pub key_field: Option<&'static str>,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&CanonicalField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Output column order: canonical fields first, derived fields after.
    pub fn output_columns(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.name.to_string())
            .chain(self.derived.iter().map(|d| d.name.to_string()))
            .collect()
    }
}

/// Invoice ledger schema, built once per process.
pub fn invoice() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(registry::build_invoice)
}

/// Stock sheet schema, built once per process.
pub fn stock() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(registry::build_stock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_schema_shape() {
        let schema = invoice();
        assert_eq!(schema.key_field, Some("invoice_id"));
        assert!(schema.field("issue_date").is_some());
        assert!(schema.field("no_such_field").is_none());
        let columns = schema.output_columns();
        assert_eq!(columns.last().map(String::as_str), Some("total_before_tax"));
    }

    #[test]
    fn stock_schema_shape() {
        let schema = stock();
        assert_eq!(schema.key_field, None);
        assert!(schema.derived.is_empty());
        assert_eq!(
            schema.output_columns(),
            vec!["name", "qty", "reorder_point", "expiry_date"]
        );
    }

    #[test]
    fn alias_tables_are_nonempty() {
        for schema in [invoice(), stock()] {
            for field in &schema.fields {
                assert!(
                    !field.aliases.is_empty(),
                    "{}.{} has no aliases",
                    schema.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn derived_fields_reference_declared_fields() {
        for schema in [invoice(), stock()] {
            for derived in &schema.derived {
                assert!(schema.field(derived.left).is_some());
                assert!(schema.field(derived.right).is_some());
            }
        }
    }
}
