//! Error types
//!
//! Drawing numbers never fails. Errors only arise when generator state comes
//! from outside the process (a snapshot or its JSON encoding) and does not
//! describe a state the recurrence could have produced.

use thiserror::Error;

/// Errors that can occur while restoring a generator
#[derive(Debug, Error)]
pub enum RandomError {
    #[error("State register out of range: {state:#x} has bits set above bit 47")]
    StateOutOfRange { state: u64 },

    #[error("Cached Gaussian must be finite, got {value}")]
    NonFiniteGaussian { value: f64 },

    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RandomResult<T> = Result<T, RandomError>;
