//! Positional column comparator.
//!
//! Missing entries are dropped from each column independently, the
//! survivors are re-aligned positionally up to the longer column's length,
//! and each pair is tagged by loose string equality. Type-sensitive callers
//! should use the key-join reconciler instead.

use tracing::debug;

use recon_ingest::{Dataset, common_columns, render_value, values_equal};
use recon_model::{ComparisonStats, Equality, MatchStatus, Result};

#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub index: usize,
    pub left: Option<String>,
    pub right: Option<String>,
    pub status: MatchStatus,
}

#[derive(Debug, Clone)]
pub struct ColumnComparison {
    pub left_column: String,
    pub right_column: String,
    pub rows: Vec<ComparisonRow>,
    pub stats: ComparisonStats,
}

/// Compare one column from each dataset positionally.
///
/// The columns need not share a name or a length; the shorter side pads
/// with "no value" past its end, and a padded pair is always `Different`.
/// Both columns empty after dropping missing values yields zeroed stats.
pub fn compare_columns(
    left: &Dataset,
    right: &Dataset,
    left_column: &str,
    right_column: &str,
) -> Result<ColumnComparison> {
    let left_values = left.non_missing(left_column)?;
    let right_values = right.non_missing(right_column)?;
    let total = left_values.len().max(right_values.len());

    let mut rows = Vec::with_capacity(total);
    let mut equal = 0usize;
    for index in 0..total {
        let left_value = left_values.get(index);
        let right_value = right_values.get(index);
        let status = match (left_value, right_value) {
            (Some(a), Some(b)) if values_equal(Equality::LooseString, a, b) => MatchStatus::Equal,
            _ => MatchStatus::Different,
        };
        if status == MatchStatus::Equal {
            equal += 1;
        }
        rows.push(ComparisonRow {
            index,
            left: left_value.map(render_value),
            right: right_value.map(render_value),
            status,
        });
    }
    let stats = ComparisonStats {
        total,
        equal,
        different: total - equal,
    };
    debug!(
        left = %left.label,
        right = %right.label,
        left_column,
        right_column,
        total,
        equal,
        "column comparison complete"
    );
    Ok(ColumnComparison {
        left_column: left_column.to_string(),
        right_column: right_column.to_string(),
        rows,
        stats,
    })
}

/// Compare the same-named column in both datasets.
pub fn compare_common(left: &Dataset, right: &Dataset, column: &str) -> Result<ColumnComparison> {
    compare_columns(left, right, column, column)
}

/// Run the comparator over every shared column, in `left`'s column order.
pub fn compare_all_common(left: &Dataset, right: &Dataset) -> Result<Vec<ColumnComparison>> {
    common_columns(left, right)
        .iter()
        .map(|column| compare_common(left, right, column))
        .collect()
}
