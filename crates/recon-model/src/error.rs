use thiserror::Error;

/// Errors surfaced by the reconciliation engines.
///
/// Structural errors abort the whole operation: a selection that names a
/// column the dataset does not have, a numeric operation over non-numeric
/// data, or a join with no viable key. Per-row conditions (unparseable
/// dates, empty comparisons) are classifications, not errors.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("unknown column `{column}` in dataset `{dataset}` (available: {available})")]
    UnknownColumn {
        dataset: String,
        column: String,
        available: String,
    },
    #[error("non-numeric value in dataset `{dataset}`, column `{column}`, row {row}")]
    TypeMismatch {
        dataset: String,
        column: String,
        row: usize,
    },
    #[error("datasets `{left}` and `{right}` share no columns usable as a join key")]
    NoCommonKey { left: String, right: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReconError>;
