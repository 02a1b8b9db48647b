//! CLI argument definitions for the spreadsheet reconciler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "recon",
    version,
    about = "Reconcile back-office (Sistema) and B3 spreadsheet exports",
    long_about = "Reconcile two tabular exports: compare columns positionally,\n\
                  compute quantity deltas, validate settlement dates against the\n\
                  Brazilian business-day calendar, and reconcile records by key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare one column from each export positionally.
    Compare(CompareArgs),

    /// List the column names shared by both exports.
    Common(CommonArgs),

    /// Compute per-row current minus initial quantity deltas on both sides.
    Delta(DeltaArgs),

    /// Check date columns against the Brazilian business-day calendar.
    Dates(DatesArgs),

    /// Full outer join on a key column, reconciling every shared field.
    Reconcile(ReconcileArgs),
}

/// The two input exports, shared by every subcommand.
#[derive(Args)]
pub struct InputArgs {
    /// Path to the Sistema CSV export.
    #[arg(value_name = "SISTEMA")]
    pub sistema: PathBuf,

    /// Path to the B3 CSV export.
    #[arg(value_name = "B3")]
    pub b3: PathBuf,
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Column to read from the Sistema export.
    #[arg(long = "sistema-column", value_name = "NAME")]
    pub sistema_column: String,

    /// Column to read from the B3 export.
    #[arg(long = "b3-column", value_name = "NAME")]
    pub b3_column: String,

    /// Write the comparison rows to a CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct CommonArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also run the comparator over every shared column.
    #[arg(long = "compare")]
    pub compare: bool,
}

#[derive(Args)]
pub struct DeltaArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Initial quantity column in the Sistema export.
    #[arg(long = "sistema-initial", value_name = "NAME")]
    pub sistema_initial: String,

    /// Current quantity column in the Sistema export.
    #[arg(long = "sistema-current", value_name = "NAME")]
    pub sistema_current: String,

    /// Initial quantity column in the B3 export.
    #[arg(long = "b3-initial", value_name = "NAME")]
    pub b3_initial: String,

    /// Current quantity column in the B3 export.
    #[arg(long = "b3-current", value_name = "NAME")]
    pub b3_current: String,

    /// Write the combined delta rows to a CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct DatesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Date column in the Sistema export.
    #[arg(long = "sistema-column", value_name = "NAME")]
    pub sistema_column: String,

    /// Date column in the B3 export.
    #[arg(long = "b3-column", value_name = "NAME")]
    pub b3_column: String,

    /// Write the date analysis rows to a CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Key column shared by both exports (headers are normalized at load).
    #[arg(long = "key", value_name = "NAME")]
    pub key: String,

    /// Only keep rows with this overall status.
    #[arg(long = "status-filter", value_enum, value_name = "STATUS")]
    pub status_filter: Option<StatusFilterArg>,

    /// Write the reconciliation rows to a CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilterArg {
    Ok,
    Divergente,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
