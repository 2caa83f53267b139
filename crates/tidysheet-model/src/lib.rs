#![deny(unsafe_code)]

//! Shared data model for the tidysheet cleaning pipelines.
//!
//! Everything in this crate is plain data: raw and normalized tables, typed
//! cell values, column mappings, pipeline options, and the cleaning result.
//! No stage logic lives here.

pub mod error;
pub mod mapping;
pub mod options;
pub mod result;
pub mod table;
pub mod value;

pub use error::CleanError;
pub use mapping::{ColumnMapping, MappedColumn};
pub use options::{DEFAULT_FUZZY_THRESHOLD, InvoiceOptions, StockOptions};
pub use result::{CleanTable, CleaningResult, ISSUES_COLUMN, Summary};
pub use table::{FlaggedRow, NormalizedRow, RawTable};
pub use value::{FieldType, Value};
