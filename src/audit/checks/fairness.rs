//! Fairness metrics check: equalized odds across sensitive groups

use super::{Check, CheckOutcome, FAIRNESS_ODDS_GAP, MAJOR_DEDUCTION};
use crate::audit::context::AuditContext;
use crate::audit::metrics::equalized_odds_difference;
use crate::audit::registry::CheckKind;

/// Flags an equalized-odds difference above [`FAIRNESS_ODDS_GAP`]
#[derive(Debug, Default)]
pub struct FairnessCheck;

impl Check for FairnessCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Fairness
    }

    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome {
        let Some(sensitive) = ctx.sensitive() else {
            return CheckOutcome::suggestion(
                "Include a 'gender' column to evaluate fairness across demographic groups.",
            );
        };

        let eod = equalized_odds_difference(&sensitive.labels(), ctx.y_true(), ctx.y_pred());
        if eod > FAIRNESS_ODDS_GAP {
            CheckOutcome::violation(
                MAJOR_DEDUCTION,
                "Unequal treatment across groups.",
                "Balance accuracy across demographic subgroups.",
            )
        } else {
            CheckOutcome::clean()
        }
    }
}
