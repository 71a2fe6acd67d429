//! Tabular dataset handling
//!
//! Provides the column-oriented dataset types the audit engine consumes:
//!
//! - **Column**: a named column of numeric or categorical values
//! - **Dataset**: validated equal-length columns as loaded from a file
//! - **FeatureFrame**: the feature columns after the target split, with
//!   the numeric encoding and perturbation helpers checks rely on
//!
//! The target column is always the rightmost column of the dataset. This
//! is a positional convention, not name-based.

mod load;

#[cfg(test)]
mod tests;

pub use load::{load_dataset, DatasetFormat};

use crate::{Error, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

// =============================================================================
// Column
// =============================================================================

/// Values of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// All values parsed as f64
    Numeric(Vec<f64>),
    /// Raw string values
    Categorical(Vec<String>),
}

/// A named column of tabular data
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name from the header/record keys
    pub name: String,
    /// Column values
    pub values: ColumnValues,
}

impl Column {
    /// Create a numeric column
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Numeric(values),
        }
    }

    /// Create a categorical column
    pub fn categorical(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Categorical(values),
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Categorical(v) => v.len(),
        }
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the column is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }

    /// Per-row group labels: numeric values formatted, categorical as-is.
    ///
    /// Used to partition rows into groups (e.g. by a sensitive attribute)
    /// and to count category frequencies.
    pub fn labels(&self) -> Vec<String> {
        match &self.values {
            ColumnValues::Numeric(v) => v.iter().map(|x| format!("{x}")).collect(),
            ColumnValues::Categorical(v) => v.clone(),
        }
    }

    /// Relative frequency of each distinct value, categorical columns only
    pub fn category_shares(&self) -> Option<Vec<(String, f64)>> {
        let ColumnValues::Categorical(values) = &self.values else {
            return None;
        };
        if values.is_empty() {
            return Some(Vec::new());
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for v in values {
            *counts.entry(v.as_str()).or_insert(0) += 1;
        }

        let n = values.len() as f64;
        let mut shares: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count as f64 / n))
            .collect();
        shares.sort_by(|a, b| a.0.cmp(&b.0));
        Some(shares)
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// A loaded tabular dataset: ordered, named, equal-length columns
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Create a dataset from columns, validating the shape.
    ///
    /// Requires at least two columns (features plus the target) and at
    /// least one row, all columns the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if columns.len() < 2 {
            return Err(Error::UnsupportedFormat(
                "dataset needs at least one feature column and a target column".to_string(),
            ));
        }

        let n_rows = columns[0].len();
        if n_rows == 0 {
            return Err(Error::UnsupportedFormat("dataset has no rows".to_string()));
        }
        for col in &columns {
            if col.len() != n_rows {
                return Err(Error::UnsupportedFormat(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name,
                    col.len(),
                    n_rows
                )));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// All columns in order, target last
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Split into features (all but the last column) and the true label
    /// vector (the last column, which must be numeric).
    pub fn split_target(self) -> Result<(FeatureFrame, Vec<f64>)> {
        let mut columns = self.columns;
        // Shape was validated in new(), so a last column always exists.
        let target = columns.pop().ok_or_else(|| {
            Error::UnsupportedFormat("dataset has no target column".to_string())
        })?;

        let y_true = match target.values {
            ColumnValues::Numeric(v) => v,
            ColumnValues::Categorical(_) => {
                return Err(Error::UnsupportedFormat(format!(
                    "target column '{}' must be numeric",
                    target.name
                )))
            }
        };

        let features = FeatureFrame {
            n_rows: self.n_rows,
            columns,
        };
        Ok((features, y_true))
    }
}

// =============================================================================
// FeatureFrame
// =============================================================================

/// Feature columns of a dataset after the target split
#[derive(Debug, Clone)]
pub struct FeatureFrame {
    columns: Vec<Column>,
    n_rows: usize,
}

impl FeatureFrame {
    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of feature columns
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Feature columns in dataset order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the numeric feature columns, in order
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Numeric encoding of the frame as a row-major matrix.
    ///
    /// Numeric columns pass through; categorical columns are encoded by
    /// the index of each value among the column's sorted distinct values.
    pub fn to_matrix(&self) -> Array2<f64> {
        let mut matrix = Array2::zeros((self.n_rows, self.columns.len()));
        for (j, col) in self.columns.iter().enumerate() {
            match &col.values {
                ColumnValues::Numeric(values) => {
                    for (i, &v) in values.iter().enumerate() {
                        matrix[[i, j]] = v;
                    }
                }
                ColumnValues::Categorical(values) => {
                    let mut distinct: Vec<&str> = values.iter().map(String::as_str).collect();
                    distinct.sort_unstable();
                    distinct.dedup();
                    for (i, v) in values.iter().enumerate() {
                        // distinct contains every value, so the lookup succeeds
                        let code = distinct
                            .binary_search(&v.as_str())
                            .unwrap_or_default();
                        matrix[[i, j]] = code as f64;
                    }
                }
            }
        }
        matrix
    }

    /// Copy of the frame with one column's values shuffled in place.
    ///
    /// Unknown column names leave the frame unchanged.
    pub fn with_shuffled_column(&self, name: &str, rng: &mut StdRng) -> FeatureFrame {
        let mut frame = self.clone();
        for col in &mut frame.columns {
            if col.name == name {
                match &mut col.values {
                    ColumnValues::Numeric(v) => v.shuffle(rng),
                    ColumnValues::Categorical(v) => v.shuffle(rng),
                }
            }
        }
        frame
    }

    /// Copy of the frame with zero-mean Gaussian noise added to every
    /// numeric column. Categorical columns are left untouched.
    pub fn with_gaussian_noise(&self, std_dev: f64, rng: &mut StdRng) -> FeatureFrame {
        let mut frame = self.clone();
        for col in &mut frame.columns {
            if let ColumnValues::Numeric(values) = &mut col.values {
                for v in values.iter_mut() {
                    *v += gaussian(rng, std_dev);
                }
            }
        }
        frame
    }
}

/// Sample a zero-mean Gaussian via the Box-Muller transform
fn gaussian(rng: &mut StdRng, std_dev: f64) -> f64 {
    let u1 = rng.random::<f64>().max(1e-12);
    let u2 = rng.random::<f64>();
    std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
