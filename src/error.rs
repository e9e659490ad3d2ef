//! Error type shared by every fallible operation in the crate.
//!
//! Only parameter validation, share decoding and homomorphic addition can
//! fail. Share generation and combination never return an error: their
//! preconditions are carried by [`Threshold`](crate::Threshold) and
//! [`Keyshare`](crate::Keyshare), and combination of bad shares silently
//! yields a wrong key.

use thiserror::Error;

/// Errors reported by keyshare operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyshareError {
    /// The number of shares to produce is outside `1..=255`.
    #[error("invalid share count {0}, expected 1..=255")]
    InvalidShareCount(u8),

    /// The threshold is zero or larger than the share count.
    #[error("invalid threshold {k} for {n} shares, expected 1..={n}")]
    InvalidThreshold { n: u8, k: u8 },

    /// A keyshare carried the identifier 0, which is reserved for the secret.
    #[error("keyshare identifier must be non-zero")]
    ZeroIdentifier,

    /// A serialized keyshare had the wrong number of bytes.
    #[error("keyshare must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Two shares being added were evaluated at different x-coordinates.
    #[error("keyshare identifiers differ ({left} != {right})")]
    IdMismatch { left: u8, right: u8 },

    /// Two share sets being added disagree on the identifier at `index`.
    #[error("keyshare identifiers differ at index {index} ({left} != {right})")]
    SetIdMismatch { index: usize, left: u8, right: u8 },

    /// Two share sets being added have different sizes.
    #[error("keyshare sets differ in size ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, KeyshareError>;
