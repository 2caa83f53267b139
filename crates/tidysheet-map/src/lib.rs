#![deny(unsafe_code)]

//! Column matcher: maps source column labels onto canonical fields.

pub mod engine;

pub use engine::match_columns;
