//! RUT checker invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | ValidAccepted | Canonical valid RUTs check valid and normalize to themselves |
//! | NormalizationIdempotent | Normalizing a normalized form changes nothing |
//! | SkipPassthrough | Skipped checks return the input unchanged and valid |
//! | CorruptionDetected | Single substitutions and adjacent transpositions are rejected |

use crate::checker::{check, Verdict};
use crate::property::{PropertyChecker, PropertyResult};

/// Sample inputs the invariants are checked against.
pub trait RutSamples {
    /// Valid RUTs in canonical `BODY-D` form.
    fn valid_canonical(&self) -> Vec<String>;

    /// Arbitrary raw inputs: decorated, malformed, or random text.
    fn raw_inputs(&self) -> Vec<String>;

    /// Valid RUTs with one body digit changed or two adjacent digits swapped.
    fn corrupted(&self) -> Vec<String>;

    /// Seed that reproduces these samples, if any.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Property checker for the RUT checker over a sample corpus.
pub struct RutPropertyChecker<'a, T: RutSamples> {
    samples: &'a T,
}

impl<'a, T: RutSamples> RutPropertyChecker<'a, T> {
    /// Create a new checker over the given samples.
    #[must_use]
    pub fn new(samples: &'a T) -> Self {
        Self { samples }
    }

    fn fail(&self, name: &'static str, input: &str, violation: String) -> PropertyResult {
        PropertyResult::fail(name, input, violation).with_seed(self.samples.seed())
    }

    fn check_valid_accepted(&self) -> PropertyResult {
        let valid = self.samples.valid_canonical();

        for input in &valid {
            let outcome = check(input, false);
            if outcome.verdict != Verdict::Valid {
                return self.fail(
                    "ValidAccepted",
                    input,
                    format!("rejected as {}", outcome.verdict),
                );
            }
            if outcome.normalized != *input {
                return self.fail(
                    "ValidAccepted",
                    input,
                    format!("normalized to {:?}", outcome.normalized),
                );
            }
        }

        PropertyResult::pass("ValidAccepted", valid.len() as u64)
    }

    fn check_normalization_idempotent(&self) -> PropertyResult {
        let mut inputs = self.samples.raw_inputs();
        inputs.extend(self.samples.valid_canonical());
        inputs.extend(self.samples.corrupted());

        for input in &inputs {
            let once = check(input, false).normalized;
            let twice = check(&once, false).normalized;
            if once != twice {
                return self.fail(
                    "NormalizationIdempotent",
                    input,
                    format!("{:?} renormalized to {:?}", once, twice),
                );
            }
        }

        PropertyResult::pass("NormalizationIdempotent", inputs.len() as u64)
    }

    fn check_skip_passthrough(&self) -> PropertyResult {
        let inputs = self.samples.raw_inputs();

        for input in &inputs {
            let outcome = check(input, true);
            if outcome.verdict != Verdict::Valid || outcome.normalized != *input {
                return self.fail(
                    "SkipPassthrough",
                    input,
                    format!("skipped check returned {}", outcome.format_status()),
                );
            }
        }

        PropertyResult::pass("SkipPassthrough", inputs.len() as u64)
    }

    fn check_corruption_detected(&self) -> PropertyResult {
        let corrupted = self.samples.corrupted();

        for input in &corrupted {
            let outcome = check(input, false);
            if outcome.verdict.is_valid() {
                return self.fail(
                    "CorruptionDetected",
                    input,
                    "corrupted RUT accepted".to_string(),
                );
            }
        }

        PropertyResult::pass("CorruptionDetected", corrupted.len() as u64)
    }
}

impl<T: RutSamples> PropertyChecker for RutPropertyChecker<'_, T> {
    fn check_all(&self) -> Vec<PropertyResult> {
        vec![
            self.check_valid_accepted(),
            self.check_normalization_idempotent(),
            self.check_skip_passthrough(),
            self.check_corruption_detected(),
        ]
    }
}
