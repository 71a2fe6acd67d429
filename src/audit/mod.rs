//! Compliance Audit Engine
//!
//! Runs a configurable set of independent checks against a
//! (model, dataset, sensitive-attribute) triple and aggregates their
//! outcomes into a single score/risk-level/evidence report.
//!
//! # Architecture
//!
//! - **AuditContext**: adapter output — features, true labels, cached
//!   predictions, optional sensitive attribute (built once per run,
//!   read-only thereafter)
//! - **Check**: six polymorphic variants, each producing a
//!   [`CheckOutcome`]; failures are contained per check
//! - **CheckRegistry**: maps display names to checks via stable
//!   [`CheckKind`] identifiers
//! - **AuditEngine**: executes resolved checks in order and folds their
//!   outcomes into the final [`Report`]
//!
//! # Example
//!
//! ```
//! use auditar::audit::{AuditContext, AuditEngine};
//! use auditar::data::{Column, Dataset};
//! use auditar::model::{Estimator, Model, ModelMetadata};
//!
//! let dataset = Dataset::new(vec![
//!     Column::numeric("age", vec![25.0, 31.0, 40.0]),
//!     Column::numeric("income", vec![40000.0, 52000.0, 61000.0]),
//!     Column::numeric("label", vec![0.0, 1.0, 1.0]),
//! ])
//! .unwrap();
//!
//! let model = Model::new(
//!     ModelMetadata::new("income-model", "demo"),
//!     Estimator::Threshold { feature: "income".into(), threshold: 50000.0 },
//! );
//!
//! let ctx = AuditContext::from_parts(&model, dataset).unwrap();
//! let engine = AuditEngine::new();
//! let report = engine.run(&ctx, "income-model", "demo", &["Privacy Scan".to_string()]);
//! assert_eq!(report.compliance_score, 100);
//! ```

pub mod checks;
pub mod context;
pub mod engine;
pub mod metrics;
pub mod registry;


// Re-exports for convenience
pub use checks::{Check, CheckOutcome};
pub use context::{AuditContext, SENSITIVE_COLUMN};
pub use engine::{AuditEngine, Report, RiskLevel, NO_RISKS, NO_SUGGESTIONS};
pub use registry::{CheckKind, CheckRegistry};
