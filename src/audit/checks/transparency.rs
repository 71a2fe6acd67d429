//! Transparency audit: permutation-importance feature attribution

use super::{Check, CheckOutcome, ATTRIBUTION_FLOOR, MINOR_DEDUCTION};
use crate::audit::context::AuditContext;
use crate::audit::metrics::accuracy;
use crate::audit::registry::CheckKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed shuffle seed so the check is a pure function of the context
const PERMUTATION_SEED: u64 = 0x5ec7;

/// Flags a model whose mean absolute feature attribution falls below
/// [`ATTRIBUTION_FLOOR`], or whose attributions cannot be computed.
///
/// Attribution is permutation importance: shuffle one numeric column,
/// re-predict, and take the absolute accuracy change as that feature's
/// attribution.
#[derive(Debug, Default)]
pub struct TransparencyCheck;

impl Check for TransparencyCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Transparency
    }

    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome {
        let numeric = ctx.features().numeric_column_names();
        if numeric.is_empty() {
            return CheckOutcome::failure(
                MINOR_DEDUCTION,
                "Feature attributions could not be computed; no numeric features to attribute.",
            );
        }

        let baseline = accuracy(ctx.y_true(), ctx.y_pred());
        let mut rng = StdRng::seed_from_u64(PERMUTATION_SEED);
        let mut attributions = Vec::with_capacity(numeric.len());

        for name in &numeric {
            let permuted = ctx.features().with_shuffled_column(name, &mut rng);
            match ctx.predictor().predict(&permuted) {
                Ok(y_permuted) => {
                    let attribution = (baseline - accuracy(ctx.y_true(), &y_permuted)).abs();
                    attributions.push(attribution);
                }
                Err(_) => {
                    return CheckOutcome::failure(
                        MINOR_DEDUCTION,
                        "Feature attributions could not be computed; verify the model supports \
                         prediction on permuted inputs.",
                    )
                }
            }
        }

        let mean = attributions.iter().sum::<f64>() / attributions.len() as f64;
        if mean < ATTRIBUTION_FLOOR {
            CheckOutcome::violation(
                MINOR_DEDUCTION,
                "Model features have low explainability.",
                "Use SHAP or LIME to explain model predictions.",
            )
        } else {
            CheckOutcome::clean()
        }
    }
}
