//! Threshold parameters for a sharing instance.
//!
//! `n` (how many shares are produced) and `k` (how many are needed to
//! reconstruct) are public values. They are validated once, when a
//! [`Threshold`] is built, so the sharing functions never see an invalid
//! pair.

use core::fmt;

use crate::error::{KeyshareError, Result};

/// A validated `k`-of-`n` threshold, with `1 <= k <= n <= 255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Threshold {
    n: u8,
    k: u8,
}

impl Threshold {
    /// Builds a threshold producing `n` shares, any `k` of which recover
    /// the key.
    ///
    /// # Errors
    ///
    /// - [`KeyshareError::InvalidShareCount`] if `n` is zero
    /// - [`KeyshareError::InvalidThreshold`] if `k` is zero or exceeds `n`
    pub fn new(n: u8, k: u8) -> Result<Self> {
        if n < 1 {
            return Err(KeyshareError::InvalidShareCount(n));
        }

        if k < 1 || k > n {
            return Err(KeyshareError::InvalidThreshold { n, k });
        }

        Ok(Self { n, k })
    }

    /// Total number of shares produced (`n`).
    pub fn share_count(&self) -> u8 {
        self.n
    }

    /// Minimum number of shares needed to reconstruct (`k`).
    pub fn threshold(&self) -> u8 {
        self.k
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-of-{}", self.k, self.n)
    }
}
