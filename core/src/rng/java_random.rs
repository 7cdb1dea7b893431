//! 48-bit linear congruential generator
//!
//! This is the generator behind `java.util.Random`. It is not a high-quality
//! PRNG by modern standards; it exists so that a Rust process and a JVM (or
//! any other faithful port) seeded alike produce identical sequences.
//!
//! # Algorithm
//!
//! The state is a 48-bit register advanced by
//!
//! ```text
//! state = (state * 0x5DEECE66D + 0xB) mod 2^48
//! ```
//!
//! Every draw takes its bits from the top of the new state. Derived draws
//! (`next_int_bounded`, `next_double`, `next_gaussian`, ...) are fixed
//! formulas over one or more calls to [`JavaRandom::next`].
//!
//! # Determinism
//!
//! Same seed → same sequence, forever. The order of `next` calls inside each
//! derived draw is part of the contract (high bits are always drawn first).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::snapshot::GeneratorSnapshot;
use crate::error::{RandomError, RandomResult};

/// LCG multiplier
pub const MULTIPLIER: u64 = 0x5_DEEC_E66D;

/// LCG increment
pub const ADDEND: u64 = 0xB;

/// Keeps the state register at 48 bits
pub const MASK: u64 = (1 << 48) - 1;

/// `2^-53`, the spacing of `next_double` results
pub const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// `2^-24`, the spacing of `next_float` results
pub const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// State register value produced by seeding with `seed`
///
/// # Example
/// ```
/// use java_random_core_rs::rng::initial_scramble;
///
/// assert_eq!(initial_scramble(0), 0x5DEECE66D);
/// ```
pub const fn initial_scramble(seed: i64) -> u64 {
    (seed as u64 ^ MULTIPLIER) & MASK
}

/// Deterministic random number generator compatible with `java.util.Random`
///
/// A plain owned value: methods take `&mut self` and there is no internal
/// locking. Share one instance across threads only behind a `Mutex`, or give
/// each thread its own.
///
/// # Example
/// ```
/// use java_random_core_rs::JavaRandom;
///
/// let mut rng = JavaRandom::new(0);
/// assert_eq!(rng.next_int(), -1155484576);
/// assert_eq!(rng.next_int_bounded(10), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeneratorSnapshot", into = "GeneratorSnapshot")]
pub struct JavaRandom {
    /// 48-bit state register
    state: u64,
    /// Second value of the last polar-method pair, if not yet returned
    next_next_gaussian: Option<f64>,
}

impl JavaRandom {
    /// Create a new generator with given seed
    ///
    /// # Arguments
    /// * `seed` - Any 64-bit value; it is scrambled into a 48-bit state
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let rng = JavaRandom::new(42);
    /// assert_eq!(rng.state(), 0x5DEECE647);
    /// ```
    pub fn new(seed: i64) -> Self {
        Self {
            state: initial_scramble(seed),
            next_next_gaussian: None,
        }
    }

    /// Reset the generator as if freshly constructed with `seed`
    ///
    /// Discards any cached Gaussian.
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut rng = JavaRandom::new(7);
    /// let first = rng.next_long();
    /// rng.set_seed(7);
    /// assert_eq!(rng.next_long(), first);
    /// ```
    pub fn set_seed(&mut self, seed: i64) {
        self.state = initial_scramble(seed);
        self.next_next_gaussian = None;
        trace!(seed, state = self.state, "generator reseeded");
    }

    /// Current 48-bit state register
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Whether the next `next_gaussian` call will return a cached value
    pub fn has_cached_gaussian(&self) -> bool {
        self.next_next_gaussian.is_some()
    }

    /// Advance the state and return its top `bits` bits
    ///
    /// `bits` is clamped to `1..=32`. With `bits == 32` the result spans the
    /// whole `i32` range, so it may be negative.
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut a = JavaRandom::new(0);
    /// let mut b = JavaRandom::new(0);
    /// assert_eq!(a.next(64), b.next(32));
    /// ```
    pub fn next(&mut self, bits: i32) -> i32 {
        let bits = bits.clamp(1, 32);
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Fill `bytes` with random bytes
    ///
    /// Each `next_int` supplies four bytes, least significant first. The last
    /// draw contributes only as many bytes as remain, so exactly
    /// `ceil(bytes.len() / 4)` ints are consumed. To fill a prefix, pass
    /// `&mut buf[..len]`.
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut rng = JavaRandom::new(0);
    /// let mut buf = [0u8; 6];
    /// rng.next_bytes(&mut buf);
    /// assert_eq!(buf, [96, 180, 32, 187, 56, 81]);
    /// ```
    pub fn next_bytes(&mut self, bytes: &mut [u8]) {
        for chunk in bytes.chunks_mut(4) {
            let rnd = self.next_int().to_le_bytes();
            chunk.copy_from_slice(&rnd[..chunk.len()]);
        }
    }

    /// Uniform value over the full `i32` range
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Uniform value in `[0, bound)`
    ///
    /// Powers of two take the top bits of a single `next(31)`. Other bounds
    /// use rejection sampling to remove modulo bias.
    ///
    /// # Panics
    /// Panics if `bound <= 0`
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut rng = JavaRandom::new(42);
    /// let roll = rng.next_int_bounded(6);
    /// assert!((0..6).contains(&roll));
    /// ```
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");

        if (bound as u32).is_power_of_two() {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let val = bits % bound;
            // Retry when the i32 expression wraps negative: `bits` fell in the
            // final partial bucket of width < bound.
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }

    /// Uniform `i64` built from two `next(32)` draws, high word first
    pub fn next_long(&mut self) -> i64 {
        let high = i64::from(self.next(32));
        let low = i64::from(self.next(32));
        (high << 32).wrapping_add(low)
    }

    /// Fair coin flip from a single bit
    pub fn next_boolean(&mut self) -> bool {
        self.next(1) != 0
    }

    /// Uniform `f32` in `[0, 1)` with 24 bits of precision
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 * FLOAT_UNIT
    }

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision
    ///
    /// Consumes `next(26)` then `next(27)`.
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut rng = JavaRandom::new(0);
    /// assert_eq!(rng.next_double(), 0.730967787376657);
    /// ```
    pub fn next_double(&mut self) -> f64 {
        let high = i64::from(self.next(26));
        let low = i64::from(self.next(27));
        ((high << 27) + low) as f64 * DOUBLE_UNIT
    }

    /// Standard normal value from the Marsaglia polar method
    ///
    /// Each accepted pair yields two values. The first is returned and the
    /// second is cached; the following call returns the cached value without
    /// advancing the state.
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut rng = JavaRandom::new(0);
    /// let first = rng.next_gaussian();
    /// let state = rng.state();
    /// let second = rng.next_gaussian();
    /// assert_eq!(rng.state(), state);
    /// assert!((first - 0.8025330637390305).abs() < 1e-12);
    /// assert!((second + 0.9015460884175122).abs() < 1e-12);
    /// ```
    pub fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.next_next_gaussian.take() {
            return cached;
        }

        loop {
            let v1 = 2.0 * self.next_double() - 1.0;
            let v2 = 2.0 * self.next_double() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.next_next_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }

    /// Capture the state register and Gaussian cache
    ///
    /// # Example
    /// ```
    /// use java_random_core_rs::JavaRandom;
    ///
    /// let mut rng = JavaRandom::new(99);
    /// rng.next_gaussian();
    ///
    /// let snapshot = rng.snapshot();
    /// let mut restored = JavaRandom::from_snapshot(snapshot).unwrap();
    /// assert_eq!(restored.next_gaussian(), rng.next_gaussian());
    /// ```
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            state: self.state,
            next_next_gaussian: self.next_next_gaussian,
        }
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// * `StateOutOfRange` - `state` has bits above bit 47
    /// * `NonFiniteGaussian` - cached Gaussian is NaN or infinite
    pub fn from_snapshot(snapshot: GeneratorSnapshot) -> RandomResult<Self> {
        snapshot.validate()?;
        debug!(
            state = snapshot.state,
            cached_gaussian = snapshot.next_next_gaussian.is_some(),
            "generator restored from snapshot"
        );
        Ok(Self {
            state: snapshot.state,
            next_next_gaussian: snapshot.next_next_gaussian,
        })
    }
}

impl TryFrom<GeneratorSnapshot> for JavaRandom {
    type Error = RandomError;

    fn try_from(snapshot: GeneratorSnapshot) -> RandomResult<Self> {
        Self::from_snapshot(snapshot)
    }
}

impl From<JavaRandom> for GeneratorSnapshot {
    fn from(rng: JavaRandom) -> Self {
        rng.snapshot()
    }
}
