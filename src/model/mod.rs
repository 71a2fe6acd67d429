//! Model handling - the predictive side of the audit
//!
//! A loaded model is a serialized-estimator blob: metadata plus one of a
//! small set of estimator shapes. Everything downstream of loading talks
//! to the [`Predictor`] trait, so tests can substitute fixed or failing
//! predictors at the same seam.

mod load;


pub use load::{load_model, ModelFormat};

use crate::data::{ColumnValues, FeatureFrame};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prediction failure, recoverable by individual checks
#[derive(Error, Debug, Clone)]
#[error("prediction failed: {0}")]
pub struct PredictError(pub String);

/// The predict capability the audit engine requires from a model
pub trait Predictor {
    /// Predict one label per row of the feature frame
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<f64>, PredictError>;
}

/// Model metadata carried in the serialized blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

impl ModelMetadata {
    /// Create metadata with a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Supported estimator shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    /// Binary linear classifier over the numerically-encoded feature
    /// matrix: predicts 1.0 when `w.x + intercept > 0`
    Linear { weights: Vec<f64>, intercept: f64 },

    /// Predicts 1.0 when the named numeric column exceeds the threshold
    Threshold { feature: String, threshold: f64 },

    /// Predicts the same label for every row
    Constant { value: f64 },
}

/// A loaded model: metadata plus estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Model metadata
    pub metadata: ModelMetadata,

    /// The estimator driving predictions
    pub estimator: Estimator,
}

impl Model {
    /// Create a new model
    pub fn new(metadata: ModelMetadata, estimator: Estimator) -> Self {
        Self {
            metadata,
            estimator,
        }
    }
}

impl Predictor for Model {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<f64>, PredictError> {
        match &self.estimator {
            Estimator::Linear { weights, intercept } => {
                if weights.len() != features.n_columns() {
                    return Err(PredictError(format!(
                        "linear estimator has {} weights but frame has {} columns",
                        weights.len(),
                        features.n_columns()
                    )));
                }
                let matrix = features.to_matrix();
                let labels = matrix
                    .rows()
                    .into_iter()
                    .map(|row| {
                        let score: f64 =
                            row.iter().zip(weights).map(|(x, w)| x * w).sum::<f64>() + intercept;
                        if score > 0.0 {
                            1.0
                        } else {
                            0.0
                        }
                    })
                    .collect();
                Ok(labels)
            }
            Estimator::Threshold { feature, threshold } => {
                let column = features.column(feature).ok_or_else(|| {
                    PredictError(format!("feature column '{feature}' not found"))
                })?;
                let ColumnValues::Numeric(values) = &column.values else {
                    return Err(PredictError(format!(
                        "feature column '{feature}' is not numeric"
                    )));
                };
                Ok(values
                    .iter()
                    .map(|&v| if v > *threshold { 1.0 } else { 0.0 })
                    .collect())
            }
            Estimator::Constant { value } => Ok(vec![*value; features.n_rows()]),
        }
    }
}
