//! Matching behavior against the built-in schemas.

use proptest::prelude::*;

use tidysheet_map::match_columns;
use tidysheet_model::FieldType;
use tidysheet_schema::{CanonicalField, Schema};

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn inv_id_matches_invoice_id_at_90() {
    let columns = labels(&["Inv_ID"]);
    let mapping = match_columns(&columns, tidysheet_schema::invoice(), 90);
    let mapped = mapping.get("invoice_id").expect("invoice_id should map");
    assert_eq!(mapped.source, "Inv_ID");
    assert!(mapped.score >= 90.0);
}

#[test]
fn unrelated_label_stays_unmapped() {
    let columns = labels(&["zzzz"]);
    let mapping = match_columns(&columns, tidysheet_schema::invoice(), 90);
    assert!(mapping.is_empty());
}

#[test]
fn realistic_invoice_header_maps_fully() {
    let columns = labels(&[
        "Invoice", "Issue_Date", "Due_Date", "Customer", "Item", "Qty", "Price",
    ]);
    let mapping = match_columns(&columns, tidysheet_schema::invoice(), 90);
    assert_eq!(mapping.len(), 7);
    assert_eq!(mapping.source_for("issue_date"), Some("Issue_Date"));
    assert_eq!(mapping.source_for("qty"), Some("Qty"));
}

#[test]
fn stock_header_maps_through_aliases() {
    let columns = labels(&["Name", "Quantity", "Reorder", "Expiry"]);
    let mapping = match_columns(&columns, tidysheet_schema::stock(), 90);
    assert_eq!(mapping.source_for("name"), Some("Name"));
    assert_eq!(mapping.source_for("qty"), Some("Quantity"));
    assert_eq!(mapping.source_for("reorder_point"), Some("Reorder"));
    assert_eq!(mapping.source_for("expiry_date"), Some("Expiry"));
}

#[test]
fn one_source_column_may_serve_two_fields() {
    let schema = Schema {
        name: "shared",
        fields: vec![
            CanonicalField {
                name: "shipped_qty",
                field_type: FieldType::Integer,
                aliases: &["qty"],
            },
            CanonicalField {
                name: "ordered_qty",
                field_type: FieldType::Integer,
                aliases: &["qty"],
            },
        ],
        derived: Vec::new(),
        key_field: None,
    };
    let columns = labels(&["qty"]);
    let mapping = match_columns(&columns, &schema, 90);
    assert_eq!(mapping.source_for("shipped_qty"), Some("qty"));
    assert_eq!(mapping.source_for("ordered_qty"), Some("qty"));
}

proptest! {
    /// Raising the threshold can only shrink the mapping.
    #[test]
    fn raising_threshold_never_adds_fields(
        columns in proptest::collection::vec("[A-Za-z_ ]{0,12}", 0..6),
        a in 0u8..=100,
        b in 0u8..=100,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let schema = tidysheet_schema::invoice();
        let loose = match_columns(&columns, schema, low);
        let strict = match_columns(&columns, schema, high);
        for (fieldname, _) in strict.iter() {
            prop_assert!(loose.contains(fieldname));
        }
        prop_assert!(strict.len() <= loose.len());
    }
}
