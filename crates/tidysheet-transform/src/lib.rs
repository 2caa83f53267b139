#![deny(unsafe_code)]

//! Normalizer: coerces matched source columns into typed canonical values.
//!
//! Coercion never fails hard. An unparsable cell degrades to
//! [`Value::Missing`]; an unmapped field is filled with its type's concrete
//! zero-value. Every output row carries a value for every canonical field.
//!
//! [`Value::Missing`]: tidysheet_model::Value::Missing

pub mod datetime;
pub mod normalize;
pub mod numeric;

pub use normalize::{coerce, normalize};
