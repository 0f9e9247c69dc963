//! Seeded question generation
//!
//! Randomness is an explicit, injectable parameter: the generator owns a
//! seeded RNG and threads it through every sampling call, so a given seed
//! reproduces an identical sequence of questions. Kernel failures during
//! a sampling attempt are recovered by resampling fresh parameters under
//! a bounded budget, never by substituting default geometry.

pub mod kinds;
pub mod question;

pub use kinds::{
    all_kinds, LineLineAngle, LinePlaneAngle, ParallelPlaneDistance, PlanePlaneAngle,
    PointLineDistance, PointPlaneDistance, PointPlaneReflection, SphereSectionRadius,
    SphereTangentPlanes,
};
pub use question::{Question, Statement};

use crate::distractor::DistractorConfig;
use crate::error::{KernelError, KernelResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A generatable question family
///
/// One implementation per problem kind; `generate` performs a single
/// sampling attempt and fails with a kernel error when the sampled
/// configuration is unusable.
pub trait QuestionKind: Send + Sync {
    /// Unique identifier for this kind
    fn id(&self) -> &'static str;

    /// One sampling attempt
    fn generate(&self, rng: &mut StdRng, config: &GeneratorConfig) -> KernelResult<Question>;
}

/// Sampling bounds and budgets for question generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Smallest sampled coordinate or offset
    pub coord_min: i64,

    /// Largest sampled coordinate or offset
    pub coord_max: i64,

    /// Smallest sampled plane/direction coefficient
    pub coeff_min: i64,

    /// Largest sampled plane/direction coefficient
    pub coeff_max: i64,

    /// Resample attempts per question before giving up
    pub max_attempts: u32,

    /// Wrong-answer synthesis settings
    pub distractors: DistractorConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            coord_min: -6,
            coord_max: 6,
            coeff_min: -3,
            coeff_max: 3,
            max_attempts: 64,
            distractors: DistractorConfig::default(),
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> KernelResult<()> {
        if self.coord_min >= self.coord_max {
            return Err(KernelError::InvalidConfig(
                "coord_min must be below coord_max".to_string(),
            ));
        }
        if self.coeff_min >= self.coeff_max {
            return Err(KernelError::InvalidConfig(
                "coeff_min must be below coeff_max".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(KernelError::InvalidConfig(
                "max_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Seeded question generator
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    /// Create a generator with validated config and a reproducible seed
    pub fn new(config: GeneratorConfig, seed: u64) -> KernelResult<Generator> {
        config.validate()?;
        Ok(Generator {
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one question of the given kind
    ///
    /// Failed attempts resample fresh parameters; the loop is bounded so
    /// an impossible parameter configuration surfaces as
    /// `GenerationBudgetExhausted` instead of spinning forever.
    pub fn generate(&mut self, kind: &dyn QuestionKind) -> KernelResult<Question> {
        let budget = self.config.max_attempts;
        for _ in 0..budget {
            match kind.generate(&mut self.rng, &self.config) {
                Ok(question) => return Ok(question),
                Err(KernelError::Serialization(err)) => {
                    return Err(KernelError::Serialization(err))
                }
                Err(_) => {}
            }
        }
        Err(KernelError::GenerationBudgetExhausted {
            kind: kind.id().to_string(),
            attempts: budget,
        })
    }

    /// Generate one question of every registered kind
    pub fn generate_each(&mut self) -> KernelResult<Vec<Question>> {
        all_kinds()
            .iter()
            .map(|kind| self.generate(kind.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            coord_min: 5,
            coord_max: 5,
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config, 1).unwrap_err(),
            KernelError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = GeneratorConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(Generator::new(config, 1).is_err());
    }

    #[test]
    fn test_budget_exhaustion_is_typed() {
        struct AlwaysDegenerate;
        impl QuestionKind for AlwaysDegenerate {
            fn id(&self) -> &'static str {
                "always_degenerate"
            }
            fn generate(
                &self,
                _rng: &mut StdRng,
                _config: &GeneratorConfig,
            ) -> KernelResult<Question> {
                Err(KernelError::DegenerateGeometry("forced".to_string()))
            }
        }

        let mut generator = Generator::new(GeneratorConfig::default(), 9).unwrap();
        let err = generator.generate(&AlwaysDegenerate).unwrap_err();
        assert!(matches!(
            err,
            KernelError::GenerationBudgetExhausted { attempts: 64, .. }
        ));
    }
}
