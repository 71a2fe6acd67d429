//! Model loading functionality

use super::Model;
use crate::{Error, Result};
use std::path::Path;

/// Supported model blob formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// JSON blob
    Json,
    /// YAML blob
    Yaml,
}

impl ModelFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ModelFormat::Json),
            "yaml" | "yml" => Some(ModelFormat::Yaml),
            _ => None,
        }
    }
}

/// Load a model from a serialized-estimator blob
///
/// The format is detected from the file extension.
///
/// # Example
///
/// ```no_run
/// use auditar::model::load_model;
///
/// let model = load_model("credit_model.json").unwrap();
/// println!("Loaded model: {}", model.metadata.name);
/// ```
pub fn load_model(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::UnsupportedFormat("model file has no extension".to_string()))?;

    let format = ModelFormat::from_extension(ext)
        .ok_or_else(|| Error::UnsupportedFormat(format!("unsupported model extension: {ext}")))?;

    let content = std::fs::read_to_string(path)?;

    let model: Model = match format {
        ModelFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::UnsupportedFormat(format!("model JSON parse failed: {e}")))?,
        ModelFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::UnsupportedFormat(format!("model YAML parse failed: {e}")))?,
    };

    Ok(model)
}
