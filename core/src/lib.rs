//! Java Random Core - Rust Engine
//!
//! Bit-exact reimplementation of the 48-bit linear congruential generator
//! behind `java.util.Random`, including its derived distributions.
//!
//! # Architecture
//!
//! - **rng**: The generator (state recurrence, derived draws, Gaussian cache)
//!   and its snapshot format
//! - **error**: Errors raised when restoring persisted generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed + same call sequence = same output, in any runtime
//! 2. The state register never holds more than 48 significant bits
//! 3. Draw operations are infallible; only restore can fail

// Module declarations
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use error::{RandomError, RandomResult};
pub use rng::{GeneratorSnapshot, JavaRandom};
