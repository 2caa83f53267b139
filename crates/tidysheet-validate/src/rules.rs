//! Rule types and the evaluation engine.

use tidysheet_model::{FlaggedRow, NormalizedRow};

type Predicate = Box<dyn Fn(&NormalizedRow) -> bool + Send + Sync>;

/// One business rule: a flag token, a per-row predicate, and whether a
/// match removes the row from the output table.
pub struct Rule {
    flag: &'static str,
    removes_row: bool,
    predicate: Predicate,
}

impl Rule {
    pub fn new<F>(flag: &'static str, removes_row: bool, predicate: F) -> Self
    where
        F: Fn(&NormalizedRow) -> bool + Send + Sync + 'static,
    {
        Self {
            flag,
            removes_row,
            predicate: Box::new(predicate),
        }
    }

    pub fn flag(&self) -> &'static str {
        self.flag
    }

    pub fn removes_row(&self) -> bool {
        self.removes_row
    }

    pub fn matches(&self, row: &NormalizedRow) -> bool {
        (self.predicate)(row)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("flag", &self.flag)
            .field("removes_row", &self.removes_row)
            .finish_non_exhaustive()
    }
}

/// An ordered rule list for one pipeline.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Flag tokens of rules that remove matching rows.
    pub fn removal_flags(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| r.removes_row)
            .map(Rule::flag)
            .collect()
    }

    /// Evaluate every rule against every row, in declaration order.
    ///
    /// All matching flags are recorded, not just the first. No row is
    /// removed here; removal is a separate stage so that flags on removed
    /// rows still reach the summary.
    pub fn evaluate(&self, rows: Vec<NormalizedRow>) -> Vec<FlaggedRow> {
        let mut flagged_rows = 0usize;
        let out: Vec<FlaggedRow> = rows
            .into_iter()
            .map(|row| {
                let mut flagged = FlaggedRow::unflagged(row);
                for rule in &self.rules {
                    if rule.matches(&flagged.row) {
                        flagged.flags.push(rule.flag.to_string());
                    }
                }
                if !flagged.flags.is_empty() {
                    flagged_rows += 1;
                }
                flagged
            })
            .collect();
        tracing::debug!(
            rows = out.len(),
            flagged_rows,
            rules = self.rules.len(),
            "rule evaluation complete"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidysheet_model::Value;

    fn row_with_qty(qty: i64) -> NormalizedRow {
        let mut row = NormalizedRow::new();
        row.set("qty", Value::Int(qty));
        row
    }

    #[test]
    fn flags_accumulate_in_declaration_order() {
        let rules = RuleSet::new(vec![
            Rule::new("B_SECOND", false, |r| r.number("qty") == Some(-1.0)),
            Rule::new("A_FIRST", false, |r| r.number("qty") == Some(-1.0)),
        ]);
        let flagged = rules.evaluate(vec![row_with_qty(-1)]);
        // Declaration order, not alphabetical.
        assert_eq!(flagged[0].flags, vec!["B_SECOND", "A_FIRST"]);
    }

    #[test]
    fn no_rows_are_removed_during_evaluation() {
        let rules = RuleSet::new(vec![Rule::new("NEG", true, |r| {
            r.number("qty").is_some_and(|q| q < 0.0)
        })]);
        let flagged = rules.evaluate(vec![row_with_qty(-5), row_with_qty(5)]);
        assert_eq!(flagged.len(), 2);
        assert!(flagged[0].has_flag("NEG"));
        assert!(flagged[1].flags.is_empty());
    }

    #[test]
    fn removal_flags_lists_only_removing_rules() {
        let rules = RuleSet::new(vec![
            Rule::new("KEEP", false, |_| true),
            Rule::new("DROP", true, |_| true),
        ]);
        assert_eq!(rules.removal_flags(), vec!["DROP"]);
    }
}
