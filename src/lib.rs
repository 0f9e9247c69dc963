//! Stereogen Core
//!
//! Exact-rational 3D analytic-geometry kernel for generated stereometry
//! problems: canonical plane/line forms, metric/angle/tangency solvers,
//! and wrong-answer synthesis with guaranteed distinct options.

pub mod error;      // kernel error taxonomy
pub mod exact;      // exact value tier (integer | rational | coeff·sqrt)
pub mod geom;       // points, vectors, lines, planes, spheres
pub mod solve;      // metric, angle, intersection/tangency solvers
pub mod distractor; // wrong-answer synthesis
pub mod generator;  // seeded question generation

pub use error::{KernelError, KernelResult};
pub use exact::{ExactValue, Rat};
pub use geom::*;
pub use solve::*;
pub use distractor::{synthesize, DistractorConfig, MistakeKind};
pub use generator::{all_kinds, Generator, GeneratorConfig, Question, QuestionKind, Statement};
