//! Robustness check: accuracy under small Gaussian input perturbation

use super::{Check, CheckOutcome, MINOR_DEDUCTION, NOISE_STD_DEV, ROBUSTNESS_ACCURACY_DROP};
use crate::audit::context::AuditContext;
use crate::audit::metrics::accuracy;
use crate::audit::registry::CheckKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed noise seed so the check is a pure function of the context
const NOISE_SEED: u64 = 0x9b0b;

/// Flags a model whose accuracy drops by more than
/// [`ROBUSTNESS_ACCURACY_DROP`] when every numeric feature is perturbed
/// with zero-mean Gaussian noise of std-dev [`NOISE_STD_DEV`].
///
/// The clean baseline reuses the predictions cached in the context;
/// estimators are deterministic, so re-running them would yield the same
/// labels.
#[derive(Debug, Default)]
pub struct RobustnessCheck;

impl Check for RobustnessCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Robustness
    }

    fn evaluate(&self, ctx: &AuditContext) -> CheckOutcome {
        let mut rng = StdRng::seed_from_u64(NOISE_SEED);
        let perturbed = ctx.features().with_gaussian_noise(NOISE_STD_DEV, &mut rng);

        let y_noisy = match ctx.predictor().predict(&perturbed) {
            Ok(labels) => labels,
            Err(_) => {
                return CheckOutcome::failure(
                    MINOR_DEDUCTION,
                    "Robustness could not be evaluated; the model failed to predict on \
                     perturbed inputs.",
                )
            }
        };

        let clean_acc = accuracy(ctx.y_true(), ctx.y_pred());
        let noisy_acc = accuracy(ctx.y_true(), &y_noisy);

        if clean_acc - noisy_acc > ROBUSTNESS_ACCURACY_DROP {
            CheckOutcome::violation(
                MINOR_DEDUCTION,
                "Model is not robust to small input variations.",
                "Augment training data with noisy samples to improve robustness.",
            )
        } else {
            CheckOutcome::clean()
        }
    }
}
