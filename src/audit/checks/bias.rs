//! Bias check: per-group accuracy parity on the sensitive attribute

use super::{Check, CheckOutcome, BIAS_ACCURACY_GAP, MAJOR_DEDUCTION};
use crate::audit::context::AuditContext;
use crate::audit::metrics::group_accuracy_gap;
use crate::audit::registry::CheckKind;

/// Flags a per-group accuracy difference above [`BIAS_ACCURACY_GAP`]
#[derive(Debug, Default)]
pub struct BiasCheck;

impl Check for BiasCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Bias
    }

    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome {
        let Some(sensitive) = ctx.sensitive() else {
            return CheckOutcome::suggestion(
                "Include sensitive attributes like 'gender' for better bias analysis.",
            );
        };

        let gap = group_accuracy_gap(&sensitive.labels(), ctx.y_true(), ctx.y_pred());
        if gap > BIAS_ACCURACY_GAP {
            CheckOutcome::violation(
                MAJOR_DEDUCTION,
                "Bias detected based on gender.",
                "Ensure balanced data representation across genders.",
            )
        } else {
            CheckOutcome::clean()
        }
    }
}
