//! Kernel error taxonomy
//!
//! Every kernel operation either returns a valid exact result or fails with
//! one of these kinds. There is no best-effort approximation path: the
//! calling generator is expected to catch a failure and resample fresh
//! parameters rather than emit a malformed question.

use thiserror::Error;

/// Result type for kernel operations
pub type KernelResult<T> = std::result::Result<T, KernelError>;

/// Errors produced by the geometry kernel and the question generator
#[derive(Debug, Error)]
pub enum KernelError {
    /// Attempted construction of a plane/line/sphere from degenerate
    /// defining data (zero normal or direction, negative squared radius)
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An otherwise valid operation invoked on inputs for which the answer
    /// is mathematically undefined
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Distance between planes requested on non-parallel planes
    #[error("planes are not parallel")]
    NotParallel,

    /// The wrong-answer synthesizer exhausted its attempt budget without
    /// achieving pairwise distinctness
    #[error("distractor generation failed: {0}")]
    DistractorGenerationFailed(String),

    /// The resample loop gave up on an impossible parameter configuration
    #[error("generation budget exhausted after {attempts} attempts for kind '{kind}'")]
    GenerationBudgetExhausted { kind: String, attempts: u32 },

    /// Invalid generator configuration
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
