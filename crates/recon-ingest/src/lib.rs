//! Dataset ingestion for the reconciliation engines.
//!
//! Loads delimited exports into Polars frames, normalizes headers for the
//! key-join path, and provides the `AnyValue` conversion helpers the engine
//! crates share.

pub mod dataset;
pub mod value;

pub use dataset::{Dataset, common_columns, normalize_header};
pub use value::{
    as_f64, format_numeric, is_missing, parse_f64, render_value, typed_equal, values_equal,
};
