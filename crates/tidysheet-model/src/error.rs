use thiserror::Error;

/// Hard failures of the cleaning core.
///
/// Soft conditions (unmatched fields, unparsable cells) are never errors;
/// they surface as default values, `Missing` markers, and issue flags.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("input table has no data rows")]
    EmptyRows,

    #[error("input table has no columns")]
    EmptyColumns,

    #[error("fuzzy threshold {threshold} is out of range (expected 0..=100)")]
    ThresholdOutOfRange { threshold: u8 },

    #[error("days_expiring must not be negative, got {days}")]
    NegativeExpiryWindow { days: i64 },
}
