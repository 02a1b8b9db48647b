//! Delimited export of reconciliation results.
//!
//! Column ordering is fixed across all exports: key/index first, then the
//! inspected data fields, then derived status/delta columns last. Missing
//! values render as empty cells.

use std::io::Write;

use anyhow::Result;

use recon_core::calendar::DateAnalysis;
use recon_core::compare::ColumnComparison;
use recon_core::delta::DeltaComparison;
use recon_core::join::Reconciliation;
use recon_ingest::format_numeric;
use recon_model::FieldStatus;

/// Comparison rows: `ID, <left> (Sistema), <right> (B3), Status`.
pub fn write_comparison_csv<W: Write>(
    writer: W,
    comparison: &ColumnComparison,
    left_label: &str,
    right_label: &str,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID".to_string(),
        format!("{} ({left_label})", comparison.left_column),
        format!("{} ({right_label})", comparison.right_column),
        "Status".to_string(),
    ])?;
    for row in &comparison.rows {
        csv.write_record([
            row.index.to_string(),
            row.left.clone().unwrap_or_default(),
            row.right.clone().unwrap_or_default(),
            row.status.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Date analysis rows: `ID, Data_Sistema, Data_B3, Status`.
pub fn write_dates_csv<W: Write>(
    writer: W,
    analysis: &DateAnalysis,
    left_label: &str,
    right_label: &str,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID".to_string(),
        format!("Data_{left_label}"),
        format!("Data_{right_label}"),
        "Status".to_string(),
    ])?;
    for row in &analysis.rows {
        csv.write_record([
            row.index.to_string(),
            row.left.clone().unwrap_or_default(),
            row.right.clone().unwrap_or_default(),
            row.status.describe(left_label, right_label),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Combined delta rows, both sides aligned by source row index.
///
/// `ID, <ini>_Sistema, <cur>_Sistema, Diferenca_Sistema, <ini>_B3,
/// <cur>_B3, Diferenca_B3`; the longer side's extra rows leave the other
/// side's cells empty.
pub fn write_delta_csv<W: Write>(writer: W, comparison: &DeltaComparison) -> Result<()> {
    let left = &comparison.left;
    let right = &comparison.right;
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID".to_string(),
        format!("{}_{}", left.initial_column, left.label),
        format!("{}_{}", left.current_column, left.label),
        format!("Diferenca_{}", left.label),
        format!("{}_{}", right.initial_column, right.label),
        format!("{}_{}", right.current_column, right.label),
        format!("Diferenca_{}", right.label),
    ])?;
    for index in 0..left.height.max(right.height) {
        let mut record = vec![index.to_string()];
        for side in [left, right] {
            match side.row_at(index) {
                Some(row) => {
                    record.push(format_numeric(row.initial));
                    record.push(format_numeric(row.current));
                    record.push(format_numeric(row.delta));
                }
                None => record.extend([String::new(), String::new(), String::new()]),
            }
        }
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Reconciliation rows: key first, `<field>_sistema, <field>_b3,
/// <field>_status` triples in shared-column order, `Status_Geral` last.
///
/// `filter` restricts the exported rows to one overall status.
pub fn write_reconciliation_csv<W: Write>(
    writer: W,
    reconciliation: &Reconciliation,
    left_label: &str,
    right_label: &str,
    filter: Option<FieldStatus>,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut header = vec![reconciliation.key_column.clone()];
    for field in &reconciliation.shared_columns {
        header.push(format!("{field}_{}", left_label.to_lowercase()));
        header.push(format!("{field}_{}", right_label.to_lowercase()));
        header.push(format!("{field}_status"));
    }
    header.push("Status_Geral".to_string());
    csv.write_record(&header)?;

    for row in &reconciliation.rows {
        if filter.is_some_and(|status| row.status != status) {
            continue;
        }
        let mut record = vec![row.key.clone()];
        for field in &row.fields {
            record.push(field.left.clone().unwrap_or_default());
            record.push(field.right.clone().unwrap_or_default());
            record.push(field.status.to_string());
        }
        record.push(row.status.to_string());
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}
