//! Deterministic random number generation
//!
//! Reproduces the `java.util.Random` sequence bit-for-bit.
//! CRITICAL: Every derived draw must advance the state exactly as the
//! reference algorithm does, or cross-runtime reproducibility breaks.

mod java_random;
mod snapshot;

pub use java_random::{
    initial_scramble, JavaRandom, ADDEND, DOUBLE_UNIT, FLOAT_UNIT, MASK, MULTIPLIER,
};
pub use snapshot::GeneratorSnapshot;
