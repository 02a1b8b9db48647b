use serde::{Deserialize, Serialize};

/// Aggregate counts for a positional column comparison.
///
/// Always derived from the comparison rows, never stored independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonStats {
    pub total: usize,
    pub equal: usize,
    pub different: usize,
}

impl ComparisonStats {
    /// Percentage of equal rows, 0.0 when nothing was compared.
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.equal as f64 / self.total as f64 * 100.0
        }
    }
}

/// Aggregates for one dataset's delta computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaStats {
    /// Sum of all deltas.
    pub total: f64,
    /// Rows with a strictly positive delta.
    pub positive: usize,
    /// Rows with a strictly negative delta. Zero deltas count toward neither.
    pub negative: usize,
    /// Rows with both operands present.
    pub rows: usize,
}

/// Aggregates for a key-join reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub rows: usize,
    pub ok: usize,
    pub divergent: usize,
}

impl ReconcileStats {
    /// Percentage of fully reconciled rows, 0.0 when the join is empty.
    pub fn ok_rate(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.ok as f64 / self.rows as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_rate_is_zero_for_empty_comparison() {
        let stats = ComparisonStats::default();
        assert_eq!(stats.match_rate(), 0.0);
    }

    #[test]
    fn match_rate_is_fraction_of_total() {
        let stats = ComparisonStats {
            total: 3,
            equal: 2,
            different: 1,
        };
        assert!((stats.match_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn ok_rate_is_zero_for_empty_join() {
        assert_eq!(ReconcileStats::default().ok_rate(), 0.0);
    }
}
