//! File-level audit orchestration
//!
//! The single entry point the CLI (or any other caller holding file
//! paths) uses: load the model and dataset, build the context, run the
//! engine. The caller receives either a complete [`Report`] or one
//! [`Error`]; there is no partial report.

use crate::audit::{AuditContext, AuditEngine, Report};
use crate::data::load_dataset;
use crate::model::load_model;
use crate::Result;
use std::path::PathBuf;

/// Everything one audit run needs
#[derive(Debug, Clone)]
pub struct AuditSpec {
    /// Path to the serialized-estimator blob
    pub model: PathBuf,
    /// Path to the tabular dataset
    pub dataset: PathBuf,
    /// Model name for the report; defaults to the blob's metadata name
    pub model_name: Option<String>,
    /// Model description for the report; defaults to the blob's metadata
    pub model_description: Option<String>,
    /// Display names of the checks to run, in order
    pub checks: Vec<String>,
}

/// Load both inputs, adapt them into a context, and run the audit
pub fn run_audit(spec: &AuditSpec) -> Result<Report> {
    let model = load_model(&spec.model)?;
    let dataset = load_dataset(&spec.dataset)?;

    let model_name = spec
        .model_name
        .clone()
        .unwrap_or_else(|| model.metadata.name.clone());
    let model_description = spec
        .model_description
        .clone()
        .unwrap_or_else(|| model.metadata.description.clone());

    let ctx = AuditContext::from_parts(&model, dataset)?;
    let engine = AuditEngine::new();
    Ok(engine.run(&ctx, &model_name, &model_description, &spec.checks))
}
