//! Pipeline-specific rule lists.
//!
//! Rule order is fixed here and nowhere else; the serialized flag order in
//! the output follows it.

use chrono::{Days, NaiveDate};

use tidysheet_model::{InvoiceOptions, StockOptions};

use crate::flags;
use crate::rules::{Rule, RuleSet};

/// Rules for the invoice pipeline.
pub fn invoice_rules(options: &InvoiceOptions) -> RuleSet {
    let mut rules = Vec::new();

    if options.flag_due_before_issue {
        rules.push(Rule::new(flags::DUE_BEFORE_ISSUE, false, |row| {
            match (row.date("due_date"), row.date("issue_date")) {
                (Some(due), Some(issue)) => due < issue,
                _ => false,
            }
        }));
    }

    rules.push(Rule::new(
        flags::NEGATIVE_QTY,
        options.drop_negative_qty,
        |row| row.number("qty").is_some_and(|q| q < 0.0),
    ));

    RuleSet::new(rules)
}

/// Rules for the stock pipeline, evaluated relative to `today`.
///
/// `EXPIRED` and `EXPIRING_SOON` partition the timeline at `today`, so a
/// row can never carry both.
pub fn stock_rules(options: &StockOptions, today: NaiveDate) -> RuleSet {
    let soon = today
        .checked_add_days(Days::new(options.days_expiring.unsigned_abs()))
        .unwrap_or(NaiveDate::MAX);

    RuleSet::new(vec![
        Rule::new(flags::LOW_STOCK, false, |row| {
            match (row.number("qty"), row.number("reorder_point")) {
                (Some(qty), Some(reorder)) => qty <= reorder,
                _ => false,
            }
        }),
        Rule::new(flags::EXPIRED, false, move |row| {
            row.date("expiry_date").is_some_and(|d| d <= today)
        }),
        Rule::new(flags::EXPIRING_SOON, false, move |row| {
            row.date("expiry_date")
                .is_some_and(|d| d > today && d <= soon)
        }),
        Rule::new(
            flags::NEGATIVE_QTY,
            options.drop_negative_qty,
            |row| row.number("qty").is_some_and(|q| q < 0.0),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidysheet_model::{NormalizedRow, Value};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stock_row(qty: i64, reorder: i64, expiry: Option<NaiveDate>) -> NormalizedRow {
        let mut row = NormalizedRow::new();
        row.set("qty", Value::Int(qty));
        row.set("reorder_point", Value::Int(reorder));
        row.set(
            "expiry_date",
            expiry.map_or(Value::Missing, Value::Date),
        );
        row
    }

    #[test]
    fn due_before_issue_needs_both_dates() {
        let rules = invoice_rules(&InvoiceOptions::default());
        let mut row = NormalizedRow::new();
        row.set("due_date", Value::Date(date(2024, 1, 4)));
        row.set("issue_date", Value::Missing);
        let flagged = rules.evaluate(vec![row]);
        assert!(flagged[0].flags.is_empty());
    }

    #[test]
    fn due_before_issue_disabled_drops_the_rule() {
        let options = InvoiceOptions::default().with_flag_due_before_issue(false);
        let rules = invoice_rules(&options);
        assert_eq!(rules.rules().len(), 1);
        assert_eq!(rules.rules()[0].flag(), flags::NEGATIVE_QTY);
    }

    #[test]
    fn negative_qty_removes_only_when_enabled() {
        let rules = invoice_rules(&InvoiceOptions::default());
        assert!(rules.removal_flags().is_empty());

        let options = InvoiceOptions::default().with_drop_negative_qty(true);
        let rules = invoice_rules(&options);
        assert_eq!(rules.removal_flags(), vec![flags::NEGATIVE_QTY]);
    }

    #[test]
    fn expired_and_expiring_soon_partition_the_timeline() {
        let today = date(2025, 10, 1);
        let rules = stock_rules(&StockOptions::default(), today);

        let expired = stock_row(10, 1, Some(date(2025, 10, 1)));
        let soon = stock_row(10, 1, Some(date(2025, 10, 20)));
        let far = stock_row(10, 1, Some(date(2026, 3, 1)));
        let none = stock_row(10, 1, None);

        let flagged = rules.evaluate(vec![expired, soon, far, none]);
        assert_eq!(flagged[0].flags, vec![flags::EXPIRED]);
        assert_eq!(flagged[1].flags, vec![flags::EXPIRING_SOON]);
        assert!(flagged[2].flags.is_empty());
        assert!(flagged[3].flags.is_empty());
    }

    #[test]
    fn low_stock_at_equal_quantities() {
        let today = date(2025, 10, 1);
        let rules = stock_rules(&StockOptions::default(), today);
        let flagged = rules.evaluate(vec![stock_row(5, 5, None)]);
        assert_eq!(flagged[0].flags, vec![flags::LOW_STOCK]);
    }
}
