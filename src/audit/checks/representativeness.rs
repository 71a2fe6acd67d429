//! Representativeness check: minority shares in categorical features

use super::{Check, CheckOutcome, MINORITY_SHARE_FLOOR, MINOR_DEDUCTION};
use crate::audit::context::AuditContext;
use crate::audit::registry::CheckKind;

/// Flags any categorical feature with a value whose relative frequency
/// falls below [`MINORITY_SHARE_FLOOR`]
#[derive(Debug, Default)]
pub struct RepresentativenessCheck;

impl Check for RepresentativenessCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Representativeness
    }

    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome {
        let underrepresented = ctx
            .features()
            .columns()
            .iter()
            .filter_map(|col| col.category_shares())
            .any(|shares| shares.iter().any(|(_, share)| *share < MINORITY_SHARE_FLOOR));

        if underrepresented {
            CheckOutcome::violation(
                MINOR_DEDUCTION,
                "Underrepresentation of minority groups.",
                "Ensure minority groups are well represented in training data.",
            )
        } else {
            CheckOutcome::clean()
        }
    }
}
