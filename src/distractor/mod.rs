//! Wrong-answer synthesis
//!
//! Given a correct exact value, produce a bounded set of plausible but
//! incorrect values. Distinctness is enforced at the displayed form: two
//! different exact values that render identically count as a collision.
//! Formula-relevant mistake candidates and transformations are tried
//! first; bounded additive jitter fills the remainder. An exhausted
//! budget surfaces a typed failure, never a duplicate option, because
//! duplicate options corrupt the exam content.

use crate::error::{KernelError, KernelResult};
use crate::exact::{ExactValue, Rat};
use rand::rngs::StdRng;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A common-mistake transformation of the correct value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MistakeKind {
    /// Swapped a sign somewhere
    SignFlip,

    /// Applied a factor of two that does not belong
    DoubledValue,

    /// Dropped a factor of two that does belong
    HalvedValue,

    /// Forgot to take the square root at the end
    ForgottenRoot,

    /// Squared instead of taking the root
    SquaredValue,
}

impl MistakeKind {
    /// Apply the transformation, when it changes the value
    fn apply(&self, correct: &ExactValue) -> Option<ExactValue> {
        match self {
            MistakeKind::SignFlip => Some(correct.negated()),
            MistakeKind::DoubledValue => Some(correct.scaled(Rat::from_integer(2))),
            MistakeKind::HalvedValue => Some(correct.scaled(Rat::new(1, 2))),
            MistakeKind::ForgottenRoot => correct.dropped_root(),
            MistakeKind::SquaredValue => Some(correct.squared()),
        }
    }
}

/// Configuration for distractor synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistractorConfig {
    /// How many distractors to produce (clamped to 1..=3)
    pub count: usize,

    /// Jitter attempts before giving up
    pub max_attempts: u32,

    /// Largest absolute jitter offset
    pub jitter_magnitude: i64,
}

impl Default for DistractorConfig {
    fn default() -> Self {
        Self {
            count: 3,
            max_attempts: 24,
            jitter_magnitude: 4,
        }
    }
}

/// Synthesize pairwise display-distinct wrong answers
///
/// `candidates` are formula-specific mistake values precomputed by the
/// caller (a distance with one dimension omitted, the wrong tangent side)
/// and are tried first, followed by the generic `transforms`, followed by
/// random jitter. Jittered values keep the sign of the correct answer so
/// a negative distance never appears among the options.
pub fn synthesize(
    correct: &ExactValue,
    candidates: &[ExactValue],
    transforms: &[MistakeKind],
    config: &DistractorConfig,
    rng: &mut StdRng,
) -> KernelResult<Vec<ExactValue>> {
    let want = config.count.clamp(1, 3);
    let mut seen: FxHashSet<String> = FxHashSet::default();
    seen.insert(correct.to_string());
    let mut out: Vec<ExactValue> = Vec::with_capacity(want);

    let mut accept = |value: ExactValue, seen: &mut FxHashSet<String>, out: &mut Vec<ExactValue>| {
        if out.len() < want && seen.insert(value.to_string()) {
            out.push(value);
        }
    };

    for candidate in candidates {
        accept(candidate.clone(), &mut seen, &mut out);
    }

    for kind in transforms {
        if let Some(value) = kind.apply(correct) {
            accept(value, &mut seen, &mut out);
        }
    }

    let mut attempts = 0;
    while out.len() < want && attempts < config.max_attempts {
        attempts += 1;
        let magnitude = config.jitter_magnitude.max(1);
        let mut delta = rng.gen_range(1..=magnitude);
        if rng.gen_bool(0.5) {
            delta = -delta;
        }
        if let Some(value) = correct.shifted(delta) {
            let sign_ok = correct.is_zero()
                || (correct.is_positive() && value.is_positive())
                || (correct.is_negative() && value.is_negative());
            if sign_ok {
                accept(value, &mut seen, &mut out);
            }
        }
    }

    if out.len() < want {
        return Err(KernelError::DistractorGenerationFailed(format!(
            "only {} of {} distinct options after {} jitter attempts",
            out.len(),
            want,
            config.max_attempts
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn assert_all_distinct(correct: &ExactValue, distractors: &[ExactValue]) {
        let mut seen = FxHashSet::default();
        seen.insert(correct.to_string());
        for d in distractors {
            assert!(
                seen.insert(d.to_string()),
                "displayed collision on {}",
                d
            );
        }
    }

    #[test]
    fn test_produces_requested_count() {
        let correct = ExactValue::Integer(12);
        let out = synthesize(
            &correct,
            &[],
            &[MistakeKind::DoubledValue, MistakeKind::HalvedValue],
            &DistractorConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(out.len(), 3);
        assert_all_distinct(&correct, &out);
    }

    #[test]
    fn test_candidates_tried_first() {
        let correct = ExactValue::Integer(10);
        let candidate = ExactValue::Integer(100);
        let out = synthesize(
            &correct,
            &[candidate.clone()],
            &[],
            &DistractorConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(out[0], candidate);
    }

    #[test]
    fn test_colliding_candidate_skipped() {
        let correct = ExactValue::Integer(10);
        let out = synthesize(
            &correct,
            &[ExactValue::Integer(10), ExactValue::Integer(11)],
            &[],
            &DistractorConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert!(!out.contains(&correct));
        assert_eq!(out[0], ExactValue::Integer(11));
        assert_all_distinct(&correct, &out);
    }

    #[test]
    fn test_sqrt_value_distractors() {
        let correct = ExactValue::sqrt_scaled(Rat::from_integer(2), 3).unwrap();
        let out = synthesize(
            &correct,
            &[],
            &[MistakeKind::ForgottenRoot, MistakeKind::SquaredValue],
            &DistractorConfig::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(out[0], ExactValue::Integer(6));
        assert_eq!(out[1], ExactValue::Integer(12));
        assert_all_distinct(&correct, &out);
    }

    #[test]
    fn test_jitter_keeps_sign_of_positive_answer() {
        let correct = ExactValue::Integer(1);
        let out = synthesize(
            &correct,
            &[],
            &[],
            &DistractorConfig {
                count: 3,
                max_attempts: 200,
                jitter_magnitude: 3,
            },
            &mut rng(),
        )
        .unwrap();
        for d in &out {
            assert!(d.is_positive(), "distractor {} is not positive", d);
        }
    }

    #[test]
    fn test_budget_exhaustion_fails_loudly() {
        // Jitter of a positive value within magnitude 1 can only reach one
        // new display form, so three distractors are impossible
        let correct = ExactValue::Integer(1);
        let err = synthesize(
            &correct,
            &[],
            &[],
            &DistractorConfig {
                count: 3,
                max_attempts: 16,
                jitter_magnitude: 1,
            },
            &mut rng(),
        )
        .unwrap_err();
        assert!(matches!(err, KernelError::DistractorGenerationFailed(_)));
    }

    #[test]
    fn test_identity_transform_collides_and_is_skipped() {
        // Halving then display comparison: 0 doubles and halves to itself
        let correct = ExactValue::Integer(0);
        let out = synthesize(
            &correct,
            &[],
            &[MistakeKind::DoubledValue, MistakeKind::HalvedValue],
            &DistractorConfig {
                count: 2,
                max_attempts: 64,
                jitter_magnitude: 4,
            },
            &mut rng(),
        )
        .unwrap();
        assert_eq!(out.len(), 2);
        assert_all_distinct(&correct, &out);
    }

    #[test]
    fn test_seeded_reproducibility() {
        let correct = ExactValue::Integer(42);
        let a = synthesize(&correct, &[], &[], &DistractorConfig::default(), &mut rng()).unwrap();
        let b = synthesize(&correct, &[], &[], &DistractorConfig::default(), &mut rng()).unwrap();
        assert_eq!(a, b);
    }
}
