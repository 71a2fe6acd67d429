//! # Auditar: Model Compliance Audit Engine
//!
//! Auditar audits a trained predictive model against a labeled dataset
//! and produces a machine-readable compliance report: a numeric score,
//! a risk level, detected risks, and remediation suggestions.
//!
//! ## Architecture
//!
//! - **data**: Tabular dataset loading (CSV, JSON records) and the
//!   feature-frame types
//! - **model**: The predictor seam and serialized-estimator loading
//!   (JSON, YAML)
//! - **audit**: The audit engine core — context adapter, the six check
//!   variants, the check registry, and report aggregation
//! - **run**: File-level orchestration consumed by the CLI

pub mod audit;
pub mod cli;
pub mod data;
pub mod model;
pub mod run;

pub mod error;

// Re-export commonly used types
pub use audit::{AuditContext, AuditEngine, Report, RiskLevel};
pub use error::{Error, Result};
