//! Labeled dataset wrapper around a Polars `DataFrame`.
//!
//! Column access is by name and fails fast with `UnknownColumn`. The
//! key-join path normalizes headers once at load (trim, collapse inner
//! whitespace, lowercase) so that `" Quantidade "` and `quantidade` meet.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, Column, CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use recon_model::ReconError;

use crate::value::is_missing;

#[derive(Debug, Clone)]
pub struct Dataset {
    /// Source label shown in exports and reports ("Sistema", "B3").
    pub label: String,
    pub data: DataFrame,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: DataFrame) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// Load a dataset from a CSV file, inferring column types.
    pub fn from_csv(path: impl AsRef<Path>, label: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let data = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("failed to open CSV: {}", path.display()))?
            .finish()
            .with_context(|| format!("failed to read CSV: {}", path.display()))?;
        let dataset = Self::new(label, data);
        debug!(
            label = %dataset.label,
            rows = dataset.height(),
            columns = dataset.data.width(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Ordered column names.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Resolve a column by exact name, failing with `UnknownColumn`.
    pub fn column(&self, name: &str) -> recon_model::Result<&Column> {
        self.data
            .column(name)
            .map_err(|_| ReconError::UnknownColumn {
                dataset: self.label.clone(),
                column: name.to_string(),
                available: self.column_names().join(", "),
            })
    }

    /// Cell at (column, row); out-of-range or unreadable cells are Null.
    pub fn value<'a>(&self, column: &'a Column, row: usize) -> AnyValue<'a> {
        column.get(row).unwrap_or(AnyValue::Null)
    }

    /// Column values with missing entries dropped, relative order kept.
    pub fn non_missing(&self, name: &str) -> recon_model::Result<Vec<AnyValue<'_>>> {
        let column = self.column(name)?;
        let mut values = Vec::new();
        for row in 0..self.height() {
            let value = self.value(column, row);
            if !is_missing(&value) {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Normalize headers in place: trim, collapse inner whitespace, lowercase.
    ///
    /// Applied once at load by the key-join path so selections and shared
    /// column detection are insensitive to export formatting quirks.
    pub fn normalize_headers(&mut self) -> Result<()> {
        let renames: Vec<(String, String)> = self
            .column_names()
            .into_iter()
            .filter_map(|name| {
                let normalized = normalize_header(&name);
                (normalized != name).then_some((name, normalized))
            })
            .collect();
        for (old, new) in renames {
            self.data
                .rename(&old, new.as_str().into())
                .with_context(|| format!("failed to rename column `{old}`"))?;
        }
        Ok(())
    }
}

/// Trim, collapse runs of whitespace to single spaces, and lowercase.
pub fn normalize_header(raw: &str) -> String {
    let mut normalized = String::new();
    for part in raw.trim().trim_matches('\u{feff}').split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized.to_lowercase()
}

/// Column names present in both datasets, in `left`'s column order.
pub fn common_columns(left: &Dataset, right: &Dataset) -> Vec<String> {
    let right_names = right.column_names();
    left.column_names()
        .into_iter()
        .filter(|name| right_names.contains(name))
        .collect()
}
