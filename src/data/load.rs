//! Dataset loading functionality

use super::{Column, Dataset};
use crate::{Error, Result};
use std::path::Path;

/// Supported dataset file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Comma-separated rows with a header line
    Csv,
    /// Array of JSON record objects
    Json,
}

impl DatasetFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(DatasetFormat::Csv),
            "json" => Some(DatasetFormat::Json),
            _ => None,
        }
    }
}

/// Load a tabular dataset from a file
///
/// The format is detected from the file extension. Column types are
/// inferred: a column is numeric when every value parses as `f64`,
/// categorical otherwise.
///
/// # Example
///
/// ```no_run
/// use auditar::data::load_dataset;
///
/// let dataset = load_dataset("applicants.csv").unwrap();
/// println!("{} rows", dataset.n_rows());
/// ```
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::UnsupportedFormat("dataset file has no extension".to_string()))?;

    let format = DatasetFormat::from_extension(ext)
        .ok_or_else(|| Error::UnsupportedFormat(format!("unsupported dataset extension: {ext}")))?;

    let content = std::fs::read_to_string(path)?;

    match format {
        DatasetFormat::Csv => parse_csv(&content),
        DatasetFormat::Json => parse_json(&content),
    }
}

/// Parse header + comma-separated rows into typed columns
fn parse_csv(content: &str) -> Result<Dataset> {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| Error::UnsupportedFormat("dataset file is empty".to_string()))?;
    let names: Vec<String> = header.split(',').map(|s| s.trim().to_string()).collect();

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];
    for (row_idx, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != names.len() {
            return Err(Error::UnsupportedFormat(format!(
                "row {} has {} fields, expected {}",
                row_idx + 1,
                fields.len(),
                names.len()
            )));
        }
        for (col, field) in raw.iter_mut().zip(&fields) {
            col.push((*field).to_string());
        }
    }

    let columns = names
        .into_iter()
        .zip(raw)
        .map(|(name, values)| infer_column(name, values))
        .collect();

    Dataset::new(columns)
}

/// Parse an array of JSON record objects into typed columns.
///
/// Column order follows the key order of the first record; every record
/// must carry the same keys.
fn parse_json(content: &str) -> Result<Dataset> {
    let records: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(content)
            .map_err(|e| Error::UnsupportedFormat(format!("JSON records parse failed: {e}")))?;

    let first = records
        .first()
        .ok_or_else(|| Error::UnsupportedFormat("dataset file is empty".to_string()))?;
    let names: Vec<String> = first.keys().cloned().collect();

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];
    for (row_idx, record) in records.iter().enumerate() {
        if record.len() != names.len() {
            return Err(Error::UnsupportedFormat(format!(
                "record {} has {} fields, expected {}",
                row_idx, record.len(), names.len()
            )));
        }
        for (col, name) in raw.iter_mut().zip(&names) {
            let value = record.get(name).ok_or_else(|| {
                Error::UnsupportedFormat(format!("record {row_idx} is missing field '{name}'"))
            })?;
            col.push(json_scalar(value).ok_or_else(|| {
                Error::UnsupportedFormat(format!(
                    "field '{name}' in record {row_idx} is not a scalar"
                ))
            })?);
        }
    }

    let columns = names
        .into_iter()
        .zip(raw)
        .map(|(name, values)| infer_column(name, values))
        .collect();

    Dataset::new(columns)
}

/// Render a scalar JSON value as its string form
fn json_scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric when every value parses as f64, categorical otherwise
fn infer_column(name: String, values: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = values.iter().map(|v| v.parse::<f64>().ok()).collect();
    match parsed {
        Some(numeric) => Column::numeric(name, numeric),
        None => Column::categorical(name, values),
    }
}
