//! Field and alias tables for the built-in pipelines.
//!
//! Alias lists collect the source-column spellings seen across real invoice
//! ledgers and stock sheets. Matching is fuzzy, so an alias only needs to be
//! close to a spelling, not identical to it.

use tidysheet_model::FieldType;

use crate::{CanonicalField, DerivedField, Schema};

pub fn invoice_fields() -> Vec<CanonicalField> {
    vec![
        CanonicalField {
            name: "invoice_id",
            field_type: FieldType::Text,
            aliases: &["invoice", "invoiceid", "invoice_id", "id", "inv_id"],
        },
        CanonicalField {
            name: "issue_date",
            field_type: FieldType::Date,
            aliases: &["issue_date", "date", "invoice_date"],
        },
        CanonicalField {
            name: "due_date",
            field_type: FieldType::Date,
            aliases: &["due", "due_date", "payment_due"],
        },
        CanonicalField {
            name: "customer",
            field_type: FieldType::Text,
            aliases: &["customer", "client", "buyer", "name"],
        },
        CanonicalField {
            name: "item",
            field_type: FieldType::Text,
            aliases: &["item", "product", "sku", "description"],
        },
        CanonicalField {
            name: "qty",
            field_type: FieldType::Integer,
            aliases: &["qty", "quantity", "amount"],
        },
        CanonicalField {
            name: "price",
            field_type: FieldType::Decimal,
            aliases: &["price", "unit_price", "cost"],
        },
    ]
}

pub fn stock_fields() -> Vec<CanonicalField> {
    vec![
        CanonicalField {
            name: "name",
            field_type: FieldType::Text,
            aliases: &["name", "item", "product", "title", "sku", "description"],
        },
        CanonicalField {
            name: "qty",
            field_type: FieldType::Integer,
            aliases: &["qty", "quantity", "stock", "onhand", "on_hand"],
        },
        CanonicalField {
            name: "reorder_point",
            field_type: FieldType::Integer,
            aliases: &[
                "reorder",
                "reorder_point",
                "reorder_level",
                "min",
                "minimum",
                "min_stock",
            ],
        },
        CanonicalField {
            name: "expiry_date",
            field_type: FieldType::Date,
            aliases: &[
                "expiry",
                "expiry_date",
                "expiration",
                "expiration_date",
                "expires",
                "exp_date",
                "exp",
            ],
        },
    ]
}

pub(crate) fn build_invoice() -> Schema {
    Schema {
        name: "invoices",
        fields: invoice_fields(),
        derived: vec![DerivedField {
            name: "total_before_tax",
            left: "qty",
            right: "price",
        }],
        key_field: Some("invoice_id"),
    }
}

pub(crate) fn build_stock() -> Schema {
    Schema {
        name: "stock",
        fields: stock_fields(),
        derived: Vec::new(),
        key_field: None,
    }
}
