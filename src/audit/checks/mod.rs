//! The six audit check variants
//!
//! Each check is an independent unit: `evaluate(&AuditContext)` returns a
//! [`CheckOutcome`] and never fails past its own boundary. Internal
//! failures (a model that cannot predict on transformed inputs, features
//! that do not support a computation) are converted into a deduction plus
//! an explanatory suggestion, so one check's failure degrades gracefully
//! instead of aborting the run.
//!
//! Thresholds are fixed heuristics chosen to flag gross violations, kept
//! as named constants so callers can see (and an implementer can tune)
//! exactly where each check trips.

mod bias;
mod fairness;
mod privacy;
mod representativeness;
mod robustness;
mod transparency;

pub use bias::BiasCheck;
pub use fairness::FairnessCheck;
pub use privacy::PrivacyCheck;
pub use representativeness::RepresentativenessCheck;
pub use robustness::RobustnessCheck;
pub use transparency::TransparencyCheck;

use super::context::AuditContext;
use super::registry::CheckKind;

// =============================================================================
// Threshold constants
// =============================================================================

/// Per-group accuracy difference above which bias is flagged
pub const BIAS_ACCURACY_GAP: f64 = 0.1;

/// Mean absolute feature attribution below which explainability is flagged
pub const ATTRIBUTION_FLOOR: f64 = 0.01;

/// Equalized-odds difference above which unequal treatment is flagged
pub const FAIRNESS_ODDS_GAP: f64 = 0.2;

/// Relative frequency below which a categorical value counts as
/// underrepresented
pub const MINORITY_SHARE_FLOOR: f64 = 0.1;

/// Accuracy drop under perturbation above which fragility is flagged
pub const ROBUSTNESS_ACCURACY_DROP: f64 = 0.1;

/// Standard deviation of the Gaussian perturbation noise
pub const NOISE_STD_DEV: f64 = 0.01;

/// Deduction for group-level violations (bias, fairness)
pub const MAJOR_DEDUCTION: u32 = 15;

/// Deduction for the remaining checks
pub const MINOR_DEDUCTION: u32 = 10;

// =============================================================================
// CheckOutcome
// =============================================================================

/// The result of evaluating one check: a score deduction plus the risks
/// and suggestions it contributes to the report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckOutcome {
    /// Points to subtract from the compliance score
    pub deduction: u32,
    /// Risk descriptions, in detection order
    pub risks: Vec<String>,
    /// Remediation suggestions, in detection order
    pub suggestions: Vec<String>,
}

impl CheckOutcome {
    /// An outcome with no deduction, risks, or suggestions
    pub fn clean() -> Self {
        Self::default()
    }

    /// An outcome carrying only a suggestion
    pub fn suggestion(text: impl Into<String>) -> Self {
        Self {
            deduction: 0,
            risks: Vec::new(),
            suggestions: vec![text.into()],
        }
    }

    /// An outcome flagging a violation: deduction, risk, and suggestion
    pub fn violation(
        deduction: u32,
        risk: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            deduction,
            risks: vec![risk.into()],
            suggestions: vec![suggestion.into()],
        }
    }

    /// An outcome for a check that could not run: deduction plus a
    /// failure-specific suggestion, no risk entry
    pub fn failure(deduction: u32, suggestion: impl Into<String>) -> Self {
        Self {
            deduction,
            risks: Vec::new(),
            suggestions: vec![suggestion.into()],
        }
    }
}

// =============================================================================
// Check trait
// =============================================================================

/// A single self-contained audit unit
pub trait Check {
    /// Stable identity of this check
    fn kind(&self) -> CheckKind;

    /// Evaluate the check against a shared read-only context.
    ///
    /// Must not fail: internal failures are converted into an outcome
    /// carrying a deduction and an explanatory suggestion.
    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome;
}
