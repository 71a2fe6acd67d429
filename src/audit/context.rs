//! Audit context - the Model/Dataset Adapter output
//!
//! `AuditContext::from_parts` normalizes a loaded model and dataset into
//! the read-only bundle every check consumes: features, true labels, the
//! cached predictions, and the optional sensitive-attribute column.

use crate::data::{Column, Dataset, FeatureFrame};
use crate::model::Predictor;
use crate::{Error, Result};

/// The column name treated as the sensitive attribute when present
pub const SENSITIVE_COLUMN: &str = "gender";

/// Read-only bundle shared by all checks in one audit run
pub struct AuditContext<'a> {
    features: FeatureFrame,
    y_true: Vec<f64>,
    y_pred: Vec<f64>,
    predictor: &'a dyn Predictor,
}

impl<'a> AuditContext<'a> {
    /// Build a context from a loaded model and dataset.
    ///
    /// Splits off the target (rightmost) column, runs the model's
    /// prediction exactly once, and validates that predictions line up
    /// with the labels. Checks reuse the cached predictions; none of
    /// them recomputes the clean baseline.
    pub fn from_parts(predictor: &'a dyn Predictor, dataset: Dataset) -> Result<Self> {
        let (features, y_true) = dataset.split_target()?;

        let y_pred = predictor
            .predict(&features)
            .map_err(|e| Error::Adapter(e.to_string()))?;

        if y_pred.len() != y_true.len() {
            return Err(Error::Adapter(format!(
                "model returned {} predictions for {} rows",
                y_pred.len(),
                y_true.len()
            )));
        }

        Ok(Self {
            features,
            y_true,
            y_pred,
            predictor,
        })
    }

    /// Feature columns (target excluded)
    pub fn features(&self) -> &FeatureFrame {
        &self.features
    }

    /// True labels from the target column
    pub fn y_true(&self) -> &[f64] {
        &self.y_true
    }

    /// Cached predictions over the unperturbed features
    pub fn y_pred(&self) -> &[f64] {
        &self.y_pred
    }

    /// The model's prediction capability, for checks that re-predict
    /// on transformed features
    pub fn predictor(&self) -> &dyn Predictor {
        self.predictor
    }

    /// The sensitive-attribute column, when the dataset carries one
    pub fn sensitive(&self) -> Option<&Column> {
        self.features.column(SENSITIVE_COLUMN)
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.features.n_rows()
    }
}
