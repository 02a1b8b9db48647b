//! Reconciliation engines for the Sistema vs B3 comparator.
//!
//! Four engines, each a pure request/response computation over immutable
//! input datasets:
//!
//! - [`calendar`]: business-day classification of date columns,
//! - [`compare`]: positional column comparison by loose string equality,
//! - [`delta`]: per-row `current - initial` quantity deltas,
//! - [`join`]: key-based full outer join with typed field reconciliation.

pub mod calendar;
pub mod compare;
pub mod delta;
pub mod join;

pub use calendar::{DateAnalysis, DateRow, HolidayCalendar, analyze_dates, parse_date};
pub use compare::{
    ColumnComparison, ComparisonRow, compare_all_common, compare_columns, compare_common,
};
pub use delta::{
    DatasetDelta, DeltaComparison, DeltaRow, DeltaSelection, compare_deltas, compute_delta,
};
pub use join::{FieldComparison, Reconciliation, ReconciliationRow, reconcile};
