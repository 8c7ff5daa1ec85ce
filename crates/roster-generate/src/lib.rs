//! Synthetic employee dataset generation for Roster.
//!
//! Records are drawn from fixed name and department pools with a seeded
//! ChaCha RNG, so a run is reproducible from the seed in its report.

pub mod engine;
pub mod errors;
pub mod model;
pub mod pools;

pub use engine::{GenerationEngine, GenerationResult, generate};
pub use errors::GenerationError;
pub use model::{DEFAULT_COUNT, GenerateOptions, GenerationReport};
