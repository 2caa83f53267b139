//! Configuration options for the cleaning pipelines.

use serde::{Deserialize, Serialize};

use crate::error::CleanError;

/// Shared default for fuzzy column matching.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 90;

/// Options controlling the invoice cleaning pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceOptions {
    /// Minimum similarity (0–100) for a source column to map onto a
    /// canonical field.
    pub fuzzy_threshold: u8,

    /// Keep only the first row per invoice id.
    pub drop_duplicates: bool,

    /// Remove rows with a negative quantity from the output table. The
    /// `NEGATIVE_QTY` flag is raised either way.
    pub drop_negative_qty: bool,

    /// Raise `DUE_BEFORE_ISSUE` when the due date precedes the issue date.
    pub flag_due_before_issue: bool,
}

impl Default for InvoiceOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            drop_duplicates: true,
            drop_negative_qty: false,
            flag_due_before_issue: true,
        }
    }
}

impl InvoiceOptions {
    /// Reject out-of-range configuration before any processing starts.
    pub fn validate(&self) -> Result<(), CleanError> {
        if self.fuzzy_threshold > 100 {
            return Err(CleanError::ThresholdOutOfRange {
                threshold: self.fuzzy_threshold,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_fuzzy_threshold(mut self, threshold: u8) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_drop_duplicates(mut self, enable: bool) -> Self {
        self.drop_duplicates = enable;
        self
    }

    #[must_use]
    pub fn with_drop_negative_qty(mut self, enable: bool) -> Self {
        self.drop_negative_qty = enable;
        self
    }

    #[must_use]
    pub fn with_flag_due_before_issue(mut self, enable: bool) -> Self {
        self.flag_due_before_issue = enable;
        self
    }
}

/// Options controlling the stock cleaning pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockOptions {
    /// Window (in days from today) for the `EXPIRING_SOON` flag.
    pub days_expiring: i64,

    /// Remove rows with a negative quantity from the output table. The
    /// `NEGATIVE_QTY` flag is raised either way.
    pub drop_negative_qty: bool,
}

impl Default for StockOptions {
    fn default() -> Self {
        Self {
            days_expiring: 30,
            drop_negative_qty: false,
        }
    }
}

impl StockOptions {
    /// Reject out-of-range configuration before any processing starts.
    pub fn validate(&self) -> Result<(), CleanError> {
        if self.days_expiring < 0 {
            return Err(CleanError::NegativeExpiryWindow {
                days: self.days_expiring,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_days_expiring(mut self, days: i64) -> Self {
        self.days_expiring = days;
        self
    }

    #[must_use]
    pub fn with_drop_negative_qty(mut self, enable: bool) -> Self {
        self.drop_negative_qty = enable;
        self
    }
}
