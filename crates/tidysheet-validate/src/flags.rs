//! Issue flag tokens.

pub const DUE_BEFORE_ISSUE: &str = "DUE_BEFORE_ISSUE";
pub const NEGATIVE_QTY: &str = "NEGATIVE_QTY";
pub const LOW_STOCK: &str = "LOW_STOCK";
pub const EXPIRED: &str = "EXPIRED";
pub const EXPIRING_SOON: &str = "EXPIRING_SOON";
