//! Key-based full outer join reconciliation.
//!
//! Every key present in either dataset produces output; each shared
//! non-key column is compared with typed equality, and a row reconciles
//! (`OK`) only when both sides are present and every field agrees.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use recon_ingest::{Dataset, common_columns, is_missing, render_value, typed_equal};
use recon_model::{FieldStatus, ReconError, ReconcileStats, Result};

#[derive(Debug, Clone)]
pub struct FieldComparison {
    pub name: String,
    pub left: Option<String>,
    pub right: Option<String>,
    pub status: FieldStatus,
}

#[derive(Debug, Clone)]
pub struct ReconciliationRow {
    pub key: String,
    pub fields: Vec<FieldComparison>,
    pub status: FieldStatus,
}

#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub key_column: String,
    /// Shared non-key columns, in the left dataset's column order.
    pub shared_columns: Vec<String>,
    pub rows: Vec<ReconciliationRow>,
    pub stats: ReconcileStats,
}

impl Reconciliation {
    /// True when the datasets share nothing to compare besides the key.
    ///
    /// This is a reportable condition, not a failure: the join still runs
    /// and one-sided keys still surface as divergent.
    pub fn is_empty_comparison(&self) -> bool {
        self.shared_columns.is_empty()
    }
}

/// Group row indices by rendered key value, preserving row order per key.
fn key_groups(dataset: &Dataset, key: &str) -> Result<BTreeMap<String, Vec<usize>>> {
    let column = dataset.column(key)?;
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..dataset.height() {
        let value = dataset.value(column, row);
        groups.entry(render_value(&value)).or_default().push(row);
    }
    Ok(groups)
}

/// Full outer join of two datasets on `key`, comparing every shared
/// non-key column per row.
///
/// Duplicate keys pair positionally within their group, so they produce
/// multiple output rows rather than a cartesian product. Output rows are
/// ordered by key (string order), which makes reruns byte-identical.
pub fn reconcile(left: &Dataset, right: &Dataset, key: &str) -> Result<Reconciliation> {
    let shared = common_columns(left, right);
    if shared.is_empty() {
        return Err(ReconError::NoCommonKey {
            left: left.label.clone(),
            right: right.label.clone(),
        });
    }
    // Key must resolve on both sides even when only one is missing it.
    left.column(key)?;
    right.column(key)?;

    let shared_columns: Vec<String> = shared.into_iter().filter(|name| name != key).collect();
    if shared_columns.is_empty() {
        warn!(key, "datasets share no columns besides the key");
    }

    let left_groups = key_groups(left, key)?;
    let right_groups = key_groups(right, key)?;

    let mut keys: Vec<&String> = left_groups.keys().collect();
    for key_value in right_groups.keys() {
        if !left_groups.contains_key(key_value) {
            keys.push(key_value);
        }
    }
    keys.sort();

    let mut rows = Vec::new();
    let mut stats = ReconcileStats::default();
    for key_value in keys {
        let empty = Vec::new();
        let left_rows = left_groups.get(key_value).unwrap_or(&empty);
        let right_rows = right_groups.get(key_value).unwrap_or(&empty);
        let pairs = left_rows.len().max(right_rows.len());
        for pair in 0..pairs {
            let left_row = left_rows.get(pair).copied();
            let right_row = right_rows.get(pair).copied();
            let row = build_row(left, right, key_value, &shared_columns, left_row, right_row)?;
            stats.rows += 1;
            match row.status {
                FieldStatus::Ok => stats.ok += 1,
                FieldStatus::Divergent => stats.divergent += 1,
            }
            rows.push(row);
        }
    }
    debug!(
        left = %left.label,
        right = %right.label,
        key,
        rows = stats.rows,
        divergent = stats.divergent,
        "reconciliation complete"
    );
    Ok(Reconciliation {
        key_column: key.to_string(),
        shared_columns,
        rows,
        stats,
    })
}

fn build_row(
    left: &Dataset,
    right: &Dataset,
    key_value: &str,
    shared_columns: &[String],
    left_row: Option<usize>,
    right_row: Option<usize>,
) -> Result<ReconciliationRow> {
    let mut fields = Vec::with_capacity(shared_columns.len());
    for name in shared_columns {
        let left_cell = match left_row {
            Some(row) => Some(left.value(left.column(name)?, row)),
            None => None,
        };
        let right_cell = match right_row {
            Some(row) => Some(right.value(right.column(name)?, row)),
            None => None,
        };
        let status = match (&left_cell, &right_cell) {
            (Some(a), Some(b)) if typed_equal(a, b) => FieldStatus::Ok,
            _ => FieldStatus::Divergent,
        };
        fields.push(FieldComparison {
            name: name.clone(),
            left: left_cell.as_ref().filter(|v| !is_missing(v)).map(render_value),
            right: right_cell.as_ref().filter(|v| !is_missing(v)).map(render_value),
            status,
        });
    }
    // A key present in only one source is always divergent, even when the
    // field set is empty.
    let status = if left_row.is_none() || right_row.is_none() {
        FieldStatus::Divergent
    } else {
        FieldStatus::combine(fields.iter().map(|field| field.status))
    };
    Ok(ReconciliationRow {
        key: key_value.to_string(),
        fields,
        status,
    })
}
