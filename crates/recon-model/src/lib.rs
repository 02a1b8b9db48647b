//! Data model for the Sistema vs B3 reconciliation engine.
//!
//! This crate holds the vocabulary shared by every other crate in the
//! workspace: row/field statuses, derived statistics, equality strategies,
//! and the typed error enum. It deliberately has no table or I/O
//! dependencies.

pub mod error;
pub mod stats;
pub mod status;

pub use error::{ReconError, Result};
pub use stats::{ComparisonStats, DeltaStats, ReconcileStats};
pub use status::{DateRowStatus, DayClass, Equality, FieldStatus, MatchStatus};
