//! Rule-based textual analysis reports.
//!
//! Pure functions from statistics to plain text (markdown emphasis only).
//! Thresholds are fixed: match-rate buckets at 90/70/50 percent, a
//! divergence note at 10 percent, and a 20 percent significance cutoff for
//! delta totals.

use recon_model::{ComparisonStats, DeltaStats, ReconcileStats};

/// Bucket a match rate into the fixed correspondence levels.
fn correspondence_line(rate: f64) -> &'static str {
    if rate >= 90.0 {
        "- Excellent correspondence (>=90% equal)"
    } else if rate >= 70.0 {
        "- Good correspondence (70-90% equal)"
    } else if rate >= 50.0 {
        "- Moderate correspondence (50-70% equal)"
    } else {
        "- Low correspondence (<50% equal)"
    }
}

/// Report for a positional column comparison.
pub fn comparison_report(title: &str, stats: &ComparisonStats) -> String {
    let rate = stats.match_rate();
    let mut report = format!(
        "**ANALYSIS REPORT - {}**\n\n\
         **Statistics:**\n\
         - Total records: {}\n\
         - Equal records: {} ({:.1}%)\n\
         - Different records: {} ({:.1}%)\n\n\
         **Analysis:**\n",
        title.to_uppercase(),
        stats.total,
        stats.equal,
        rate,
        stats.different,
        if stats.total == 0 { 0.0 } else { 100.0 - rate },
    );
    report.push_str(correspondence_line(rate));
    if stats.total == 0 {
        report.push_str("\n- No rows compared");
    } else if stats.different == 0 {
        report.push_str("\n- Fully synchronized between sources");
    } else if stats.different as f64 <= stats.total as f64 * 0.1 {
        report.push_str("\n- Few divergences (<=10%)");
    } else {
        report.push_str("\n- Divergences need review");
    }
    report
}

/// Report comparing both datasets' delta aggregates.
pub fn delta_report(
    left_label: &str,
    left: &DeltaStats,
    right_label: &str,
    right: &DeltaStats,
) -> String {
    let mut report = format!(
        "**ANALYSIS REPORT - DELTAS**\n\n\
         **{left_label}:**\n\
         - Delta total: {:.2}\n\
         - Positive deltas: {} records\n\
         - Negative deltas: {} records\n\n\
         **{right_label}:**\n\
         - Delta total: {:.2}\n\
         - Positive deltas: {} records\n\
         - Negative deltas: {} records\n\n\
         **Insights:**\n",
        left.total, left.positive, left.negative, right.total, right.positive, right.negative,
    );

    if left.total > right.total {
        report.push_str(&format!(
            "- {left_label} shows a larger total variation than {right_label}\n"
        ));
    } else if left.total < right.total {
        report.push_str(&format!(
            "- {right_label} shows a larger total variation than {left_label}\n"
        ));
    } else {
        report.push_str("- Total variations are equal on both sides\n");
    }

    if left.positive > right.positive {
        report.push_str(&format!("- {left_label} has more increasing records\n"));
    } else if left.positive < right.positive {
        report.push_str(&format!("- {right_label} has more increasing records\n"));
    } else {
        report.push_str("- Equal number of increases on both sides\n");
    }

    // Undefined when both totals are zero; treat as consistent.
    let largest = left.total.abs().max(right.total.abs());
    if largest == 0.0 {
        report.push_str("- Sources relatively consistent\n");
    } else {
        let spread = (left.total - right.total).abs() / largest * 100.0;
        if spread > 20.0 {
            report.push_str(&format!(
                "- Significant difference between sources ({spread:.1}%)\n"
            ));
        } else {
            report.push_str("- Sources relatively consistent\n");
        }
    }
    report
}

/// Report for a key-join reconciliation.
pub fn reconcile_report(key: &str, stats: &ReconcileStats) -> String {
    let rate = stats.ok_rate();
    let mut report = format!(
        "**ANALYSIS REPORT - RECONCILIATION BY `{key}`**\n\n\
         **Statistics:**\n\
         - Joined rows: {}\n\
         - OK: {} ({:.1}%)\n\
         - Divergente: {}\n\n\
         **Analysis:**\n",
        stats.rows, stats.ok, rate, stats.divergent,
    );
    report.push_str(correspondence_line(rate));
    if stats.rows == 0 {
        report.push_str("\n- No rows joined");
    } else if stats.divergent == 0 {
        report.push_str("\n- Fully reconciled");
    } else if stats.divergent as f64 <= stats.rows as f64 * 0.1 {
        report.push_str("\n- Few divergences (<=10%)");
    } else {
        report.push_str("\n- Divergences need review");
    }
    report
}
