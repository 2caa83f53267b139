#![deny(unsafe_code)]

//! Decodes CSV bytes into a [`RawTable`] for the cleaning core.
//!
//! The core never touches file bytes itself; this crate is the input
//! collaborator that turns an uploaded/exported CSV into the in-memory
//! table shape the pipelines consume.
//!
//! [`RawTable`]: tidysheet_model::RawTable

pub mod csv_table;

pub use csv_table::{read_csv, read_csv_path};
