//! Library components of the tidysheet CLI.

pub mod export;
pub mod logging;
