//! Per-row delta calculator between an initial and a current quantity column.
//!
//! A present but non-numeric value aborts the whole operation with
//! `TypeMismatch`; partial results are never returned. Rows missing either
//! operand are skipped and keep their source row index, so the combined
//! export aligns the two datasets by position.

use tracing::debug;

use recon_ingest::{Dataset, as_f64, is_missing};
use recon_model::{DeltaStats, ReconError, Result};

#[derive(Debug, Clone)]
pub struct DeltaRow {
    /// Source row index in the dataset.
    pub index: usize,
    pub initial: f64,
    pub current: f64,
    /// `current - initial`.
    pub delta: f64,
}

/// Deltas for one dataset.
#[derive(Debug, Clone)]
pub struct DatasetDelta {
    pub label: String,
    pub initial_column: String,
    pub current_column: String,
    /// Source dataset height, for export alignment.
    pub height: usize,
    pub rows: Vec<DeltaRow>,
    pub stats: DeltaStats,
}

impl DatasetDelta {
    /// Delta row at a source index, if both operands were present there.
    pub fn row_at(&self, index: usize) -> Option<&DeltaRow> {
        self.rows.iter().find(|row| row.index == index)
    }
}

/// Both datasets' deltas, aligned side by side for export.
#[derive(Debug, Clone)]
pub struct DeltaComparison {
    pub left: DatasetDelta,
    pub right: DatasetDelta,
}

/// Compute `current - initial` per row for one dataset.
pub fn compute_delta(dataset: &Dataset, initial: &str, current: &str) -> Result<DatasetDelta> {
    let initial_values = dataset.column(initial)?;
    let current_values = dataset.column(current)?;

    let mut rows = Vec::new();
    let mut stats = DeltaStats::default();
    for index in 0..dataset.height() {
        let initial_cell = dataset.value(initial_values, index);
        let current_cell = dataset.value(current_values, index);
        // A missing operand skips the row; a present non-numeric one is fatal.
        if is_missing(&initial_cell) || is_missing(&current_cell) {
            continue;
        }
        let initial_value = as_f64(&initial_cell).ok_or_else(|| ReconError::TypeMismatch {
            dataset: dataset.label.clone(),
            column: initial.to_string(),
            row: index,
        })?;
        let current_value = as_f64(&current_cell).ok_or_else(|| ReconError::TypeMismatch {
            dataset: dataset.label.clone(),
            column: current.to_string(),
            row: index,
        })?;
        let delta = current_value - initial_value;
        stats.total += delta;
        stats.rows += 1;
        if delta > 0.0 {
            stats.positive += 1;
        } else if delta < 0.0 {
            stats.negative += 1;
        }
        rows.push(DeltaRow {
            index,
            initial: initial_value,
            current: current_value,
            delta,
        });
    }
    debug!(
        label = %dataset.label,
        initial,
        current,
        rows = rows.len(),
        total = stats.total,
        "delta computation complete"
    );
    Ok(DatasetDelta {
        label: dataset.label.clone(),
        initial_column: initial.to_string(),
        current_column: current.to_string(),
        height: dataset.height(),
        rows,
        stats,
    })
}

/// Column selections for one side of the delta comparison.
#[derive(Debug, Clone)]
pub struct DeltaSelection {
    pub initial: String,
    pub current: String,
}

impl DeltaSelection {
    pub fn new(initial: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            current: current.into(),
        }
    }
}

/// Compute deltas for both datasets independently.
pub fn compare_deltas(
    left: &Dataset,
    right: &Dataset,
    left_selection: &DeltaSelection,
    right_selection: &DeltaSelection,
) -> Result<DeltaComparison> {
    let left = compute_delta(left, &left_selection.initial, &left_selection.current)?;
    let right = compute_delta(right, &right_selection.initial, &right_selection.current)?;
    Ok(DeltaComparison { left, right })
}
