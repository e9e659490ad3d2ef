//! Low-level Shamir secret sharing of 32-byte keys
//!
//! This crate splits a 32-byte cryptographic key into `n` shares such that
//! any `k` of them reconstruct it, and lets two share sets be added so that
//! they reconstruct the XOR of their keys.
//!
//! **This is a hazardous API.** It assumes the caller understands the
//! scheme's security requirements:
//!
//! - the key must be a uniformly random 32-byte string
//! - `n`, `k` and share identifiers are public values
//! - there is **no** integrity checking: combining forged or mismatched
//!   shares returns a wrong key without any error, and that wrong key may
//!   leak information about the real one
//!
//! Authenticated shares and secrets of arbitrary length belong to a higher
//! layer built on top of this one.
//!
//! # Module overview
//!
//! - `field`
//!   Constant-time arithmetic in GF(256): addition, multiplication and
//!   inversion, with no lookup tables and no secret-dependent branches.
//!
//! - `polynomial`
//!   Horner evaluation used to deal shares and Lagrange interpolation at
//!   zero used to recover a key byte.
//!
//! - `params`
//!   The validated [`Threshold`] (`k`-of-`n`) a sharing instance is dealt
//!   with.
//!
//! - `keyshare`
//!   The [`Key`] and [`Keyshare`] types and the 33-byte share encoding.
//!
//! - `sharing`
//!   Share generation, reconstruction and refresh.
//!
//! - `homomorphic`
//!   In-place addition of shares and share sets.
//!
//! # Example
//!
//! ```
//! use sss_hazmat::{Threshold, combine_keyshares, create_keyshares_with_rng};
//! use rand_chacha::ChaCha20Rng;
//! use rand_chacha::rand_core::SeedableRng;
//!
//! let key = [7u8; 32];
//! let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
//!
//! let threshold = Threshold::new(5, 3).unwrap();
//! let shares = create_keyshares_with_rng(&key, threshold, &mut rng);
//!
//! assert_eq!(combine_keyshares(&shares[1..4]), key);
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and works only on caller-owned buffers.
//! The crate has no global mutable state, so concurrent calls are safe as
//! long as no two of them mutate the same share.

pub mod constants;
pub mod error;
pub mod field;
pub mod homomorphic;
pub mod keyshare;
pub mod params;
pub mod polynomial;
pub mod sharing;

pub use constants::{KEY_SIZE, KEYSHARE_SIZE, MAX_SHARES};
pub use error::{KeyshareError, Result};
pub use homomorphic::{add_keyshares, add_two_keyshare};
pub use keyshare::{Key, Keyshare};
pub use params::Threshold;
#[cfg(feature = "os-rng")]
pub use sharing::{create_keyshares, refresh_keyshares};
pub use sharing::{combine_keyshares, create_keyshares_with_rng, refresh_keyshares_with_rng};
