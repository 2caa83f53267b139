#![deny(unsafe_code)]

//! Rule engine and row filtering for the cleaning pipelines.
//!
//! Rules are evaluated for every row before any row is removed; flags stay
//! attached to their row through filtering and dedup, so there is no
//! positional flag structure to misalign.

pub mod filter;
pub mod flags;
pub mod rules;
pub mod rulesets;

pub use filter::{dedupe_by_key, drop_flagged};
pub use rules::{Rule, RuleSet};
pub use rulesets::{invoice_rules, stock_rules};
