//! Privacy scan: PII-suggestive feature column names

use super::{Check, CheckOutcome, MINOR_DEDUCTION};
use crate::audit::context::AuditContext;
use crate::audit::registry::CheckKind;

/// Case-insensitive substrings that mark a column as likely PII
const PII_MARKERS: [&str; 2] = ["id", "name"];

/// Flags feature columns whose names suggest personally identifiable data
#[derive(Debug, Default)]
pub struct PrivacyCheck;

impl Check for PrivacyCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Privacy
    }

    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome {
        let has_pii = ctx.features().columns().iter().any(|col| {
            let name = col.name.to_lowercase();
            PII_MARKERS.iter().any(|marker| name.contains(marker))
        });

        if has_pii {
            CheckOutcome::violation(
                MINOR_DEDUCTION,
                "Dataset may contain PII.",
                "Remove or anonymize personally identifiable data.",
            )
        } else {
            CheckOutcome::clean()
        }
    }
}
