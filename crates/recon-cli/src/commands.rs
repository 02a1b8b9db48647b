//! Command implementations: load the exports, run the engine, export.
//!
//! Each `run_*` function is a pure pipeline from arguments to an outcome
//! struct; printing lives in [`crate::summary`] so the outcomes stay
//! testable.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use recon_core::calendar::{DateAnalysis, HolidayCalendar, analyze_dates};
use recon_core::compare::{ColumnComparison, compare_all_common, compare_columns};
use recon_core::delta::{DeltaComparison, DeltaSelection, compare_deltas};
use recon_core::join::{Reconciliation, reconcile};
use recon_ingest::{Dataset, common_columns};
use recon_model::FieldStatus;
use recon_report::{
    comparison_report, delta_report, reconcile_report, write_comparison_csv, write_dates_csv,
    write_delta_csv, write_reconciliation_csv,
};

use crate::cli::{
    CommonArgs, CompareArgs, DatesArgs, DeltaArgs, InputArgs, ReconcileArgs, StatusFilterArg,
};

pub const SISTEMA_LABEL: &str = "Sistema";
pub const B3_LABEL: &str = "B3";

#[derive(Debug)]
pub struct CompareOutcome {
    pub comparison: ColumnComparison,
    pub report: String,
}

pub struct CommonOutcome {
    pub columns: Vec<String>,
    pub comparisons: Vec<CompareOutcome>,
}

pub struct DeltaOutcome {
    pub comparison: DeltaComparison,
    pub report: String,
}

pub struct DatesOutcome {
    pub analysis: DateAnalysis,
}

pub struct ReconcileOutcome {
    pub reconciliation: Reconciliation,
    pub report: String,
}

fn load_pair(input: &InputArgs, normalize_headers: bool) -> Result<(Dataset, Dataset)> {
    let mut sistema = Dataset::from_csv(&input.sistema, SISTEMA_LABEL)?;
    let mut b3 = Dataset::from_csv(&input.b3, B3_LABEL)?;
    if normalize_headers {
        sistema.normalize_headers()?;
        b3.normalize_headers()?;
    }
    Ok((sistema, b3))
}

fn export_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed to create export file: {}", path.display()))
}

pub fn run_compare(args: &CompareArgs) -> Result<CompareOutcome> {
    let (sistema, b3) = load_pair(&args.input, false)?;
    let comparison = compare_columns(&sistema, &b3, &args.sistema_column, &args.b3_column)?;
    let title = format!("{} vs {}", comparison.left_column, comparison.right_column);
    let report = comparison_report(&title, &comparison.stats);
    if let Some(path) = &args.export {
        write_comparison_csv(export_file(path)?, &comparison, SISTEMA_LABEL, B3_LABEL)?;
        info!(path = %path.display(), rows = comparison.rows.len(), "comparison exported");
    }
    Ok(CompareOutcome { comparison, report })
}

pub fn run_common(args: &CommonArgs) -> Result<CommonOutcome> {
    let (sistema, b3) = load_pair(&args.input, false)?;
    let columns = common_columns(&sistema, &b3);
    let comparisons = if args.compare {
        compare_all_common(&sistema, &b3)?
            .into_iter()
            .map(|comparison| {
                let report = comparison_report(&comparison.left_column, &comparison.stats);
                CompareOutcome { comparison, report }
            })
            .collect()
    } else {
        Vec::new()
    };
    Ok(CommonOutcome {
        columns,
        comparisons,
    })
}

pub fn run_delta(args: &DeltaArgs) -> Result<DeltaOutcome> {
    let (sistema, b3) = load_pair(&args.input, false)?;
    let comparison = compare_deltas(
        &sistema,
        &b3,
        &DeltaSelection::new(&args.sistema_initial, &args.sistema_current),
        &DeltaSelection::new(&args.b3_initial, &args.b3_current),
    )?;
    let report = delta_report(
        SISTEMA_LABEL,
        &comparison.left.stats,
        B3_LABEL,
        &comparison.right.stats,
    );
    if let Some(path) = &args.export {
        write_delta_csv(export_file(path)?, &comparison)?;
        info!(path = %path.display(), "deltas exported");
    }
    Ok(DeltaOutcome { comparison, report })
}

pub fn run_dates(args: &DatesArgs) -> Result<DatesOutcome> {
    let (sistema, b3) = load_pair(&args.input, false)?;
    let calendar = HolidayCalendar::brazil();
    let analysis = analyze_dates(
        &sistema,
        &b3,
        &args.sistema_column,
        &args.b3_column,
        &calendar,
    )?;
    if let Some(path) = &args.export {
        write_dates_csv(export_file(path)?, &analysis, SISTEMA_LABEL, B3_LABEL)?;
        info!(path = %path.display(), rows = analysis.rows.len(), "date analysis exported");
    }
    Ok(DatesOutcome { analysis })
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileOutcome> {
    // The join path normalizes headers once at load.
    let (sistema, b3) = load_pair(&args.input, true)?;
    let key = recon_ingest::normalize_header(&args.key);
    let reconciliation = reconcile(&sistema, &b3, &key)?;
    let report = reconcile_report(&key, &reconciliation.stats);
    if let Some(path) = &args.export {
        write_reconciliation_csv(
            export_file(path)?,
            &reconciliation,
            SISTEMA_LABEL,
            B3_LABEL,
            args.status_filter.map(FieldStatus::from),
        )?;
        info!(path = %path.display(), rows = reconciliation.rows.len(), "reconciliation exported");
    }
    Ok(ReconcileOutcome {
        reconciliation,
        report,
    })
}

impl From<StatusFilterArg> for FieldStatus {
    fn from(arg: StatusFilterArg) -> Self {
        match arg {
            StatusFilterArg::Ok => FieldStatus::Ok,
            StatusFilterArg::Divergente => FieldStatus::Divergent,
        }
    }
}
