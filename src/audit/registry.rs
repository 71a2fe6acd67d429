//! Check identity and resolution
//!
//! Check identity is the stable [`CheckKind`] enum; display names are
//! presentation only. The registry resolves a caller's display-name list
//! into checks in caller order, skipping names it does not recognize and
//! preserving duplicates.

use super::checks::{
    BiasCheck, Check, FairnessCheck, PrivacyCheck, RepresentativenessCheck, RobustnessCheck,
    TransparencyCheck,
};

/// Stable identifiers for the built-in checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Bias,
    Transparency,
    Privacy,
    Fairness,
    Representativeness,
    Robustness,
}

impl CheckKind {
    /// All built-in kinds, in registration order
    pub fn all() -> [CheckKind; 6] {
        [
            CheckKind::Bias,
            CheckKind::Transparency,
            CheckKind::Privacy,
            CheckKind::Fairness,
            CheckKind::Representativeness,
            CheckKind::Robustness,
        ]
    }

    /// Human-readable display name, as selected by callers
    pub fn display_name(&self) -> &'static str {
        match self {
            CheckKind::Bias => "Bias Check",
            CheckKind::Transparency => "Transparency Audit",
            CheckKind::Privacy => "Privacy Scan",
            CheckKind::Fairness => "Fairness Metrics Check",
            CheckKind::Representativeness => "Representativeness Check",
            CheckKind::Robustness => "Robustness Check",
        }
    }

    /// Parse a display name back to a kind
    pub fn from_display_name(name: &str) -> Option<Self> {
        match name {
            "Bias Check" => Some(CheckKind::Bias),
            "Transparency Audit" => Some(CheckKind::Transparency),
            "Privacy Scan" => Some(CheckKind::Privacy),
            "Fairness Metrics Check" => Some(CheckKind::Fairness),
            "Representativeness Check" => Some(CheckKind::Representativeness),
            "Robustness Check" => Some(CheckKind::Robustness),
            _ => None,
        }
    }
}

/// Registry of the built-in checks, keyed by [`CheckKind`].
///
/// Read-only after construction, so a single registry can be shared
/// across concurrent audit runs.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Registry with all six built-in checks
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(BiasCheck),
                Box::new(TransparencyCheck),
                Box::new(PrivacyCheck),
                Box::new(FairnessCheck),
                Box::new(RepresentativenessCheck),
                Box::new(RobustnessCheck),
            ],
        }
    }

    /// Look up a check by kind
    pub fn get(&self, kind: CheckKind) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.kind() == kind)
            .map(Box::as_ref)
    }

    /// Resolve display names into checks, in caller order.
    ///
    /// Unrecognized names are silently skipped; duplicate names resolve
    /// to duplicate executions.
    pub fn resolve(&self, names: &[String]) -> Vec<&dyn Check> {
        names
            .iter()
            .filter_map(|name| CheckKind::from_display_name(name))
            .filter_map(|kind| self.get(kind))
            .collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
