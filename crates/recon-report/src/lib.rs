//! Reports and exports for reconciliation results.
//!
//! [`summary`] turns statistics into rule-based text; [`export`] writes the
//! row-level results as delimited tables for download by the caller.

pub mod export;
pub mod summary;

pub use export::{
    write_comparison_csv, write_dates_csv, write_delta_csv, write_reconciliation_csv,
};
pub use summary::{comparison_report, delta_report, reconcile_report};
