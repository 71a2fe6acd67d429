//! Audit engine: check execution, aggregation, and the final report

use super::checks::Check;
use super::context::AuditContext;
use super::registry::CheckRegistry;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Sentinel risk entry when no check flagged anything
pub const NO_RISKS: &str = "No major risks detected.";

/// Sentinel suggestion entry when no check suggested anything
pub const NO_SUGGESTIONS: &str = "Model meets the required ethical standards.";

/// Starting (and maximum) compliance score
const MAX_SCORE: i32 = 100;

/// Risk classification, a pure function of the compliance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a clamped compliance score
    pub fn from_score(score: i32) -> Self {
        if score < 40 {
            RiskLevel::High
        } else if score < 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// The terminal audit artifact, serializable to the caller's JSON contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Model name as supplied by the caller
    pub model_name: String,
    /// Model description as supplied by the caller
    pub model_description: String,
    /// Compliance score in [0, 100], higher is better
    pub compliance_score: i32,
    /// Classification of the score
    pub risk_level: RiskLevel,
    /// Detected risks, never empty
    pub risks: Vec<String>,
    /// Remediation suggestions, never empty
    pub suggestions: Vec<String>,
}

impl Report {
    /// Render a human-readable report
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        writeln!(out, "════════════════════════════════════════════════").unwrap();
        writeln!(out, "            MODEL COMPLIANCE REPORT             ").unwrap();
        writeln!(out, "════════════════════════════════════════════════").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "Model: {}", self.model_name).unwrap();
        if !self.model_description.is_empty() {
            writeln!(out, "Description: {}", self.model_description).unwrap();
        }
        writeln!(out, "Compliance Score: {}/100", self.compliance_score).unwrap();
        writeln!(out, "Risk Level: {}", self.risk_level).unwrap();
        writeln!(out).unwrap();

        writeln!(out, "─── Risks ──────────────────────────────────────").unwrap();
        for risk in &self.risks {
            writeln!(out, "  • {risk}").unwrap();
        }
        writeln!(out).unwrap();

        writeln!(out, "─── Suggestions ────────────────────────────────").unwrap();
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, suggestion).unwrap();
        }
        writeln!(out).unwrap();
        writeln!(out, "════════════════════════════════════════════════").unwrap();

        out
    }
}

/// Runs resolved checks against a context and folds their outcomes into
/// a [`Report`]
pub struct AuditEngine {
    registry: CheckRegistry,
}

impl AuditEngine {
    /// Engine backed by the built-in check registry
    pub fn new() -> Self {
        Self {
            registry: CheckRegistry::new(),
        }
    }

    /// The registry backing this engine
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Run the selected checks and assemble the report.
    ///
    /// Checks execute in the caller's resolution order; each outcome's
    /// deduction accumulates against the starting score of 100 and its
    /// risks/suggestions append in order. The final score is clamped to
    /// [0, 100] and empty risk/suggestion lists are replaced by their
    /// sentinel entries. The context is never mutated.
    pub fn run(
        &self,
        ctx: &AuditContext,
        model_name: &str,
        model_description: &str,
        selected_checks: &[String],
    ) -> Report {
        let checks = self.registry.resolve(selected_checks);
        self.run_resolved(ctx, model_name, model_description, &checks)
    }

    /// Run an explicit check list, bypassing name resolution
    pub fn run_resolved(
        &self,
        ctx: &AuditContext,
        model_name: &str,
        model_description: &str,
        checks: &[&dyn Check],
    ) -> Report {
        let mut score = MAX_SCORE;
        let mut risks = Vec::new();
        let mut suggestions = Vec::new();

        for check in checks {
            let outcome = check.evaluate(ctx);
            score -= outcome.deduction as i32;
            risks.extend(outcome.risks);
            suggestions.extend(outcome.suggestions);
        }

        let score = score.clamp(0, MAX_SCORE);

        if risks.is_empty() {
            risks.push(NO_RISKS.to_string());
        }
        if suggestions.is_empty() {
            suggestions.push(NO_SUGGESTIONS.to_string());
        }

        Report {
            model_name: model_name.to_string(),
            model_description: model_description.to_string(),
            compliance_score: score,
            risk_level: RiskLevel::from_score(score),
            risks,
            suggestions,
        }
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}
