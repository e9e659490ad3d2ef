//! Share generation, reconstruction and refresh.
//!
//! This is the hazardous low-level layer: it shares exactly one 32-byte key
//! and performs **no integrity checking**. Combining forged or mismatched
//! shares silently yields a wrong key, and that wrong key can still leak
//! information about the real one to whoever forged the shares. Callers that
//! need authenticated shares or arbitrary-length secrets must build that on
//! top of this module.
//!
//! ## Provided operations
//!
//! - `create_keyshares` / [`create_keyshares_with_rng`]
//!   Split a key into `n` shares with threshold `k`.
//!
//! - [`combine_keyshares`]
//!   Recover the key from `k` (or more) shares of one sharing instance.
//!
//! - `refresh_keyshares` / [`refresh_keyshares_with_rng`]
//!   Renew every share without reconstructing the key.
//!
//! ## Cryptographic notes
//!
//! Each key byte is the constant term of its own polynomial of degree
//! `k - 1`, whose other coefficients are drawn fresh from the random source
//! for every byte position and every call. The key should itself be a
//! uniformly random cryptographic key; `n` and `k` are treated as public.

use rand_core::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::constants::{KEY_SIZE, MAX_SHARES};
use crate::error::{KeyshareError, Result};
use crate::field::Gf256;
use crate::homomorphic::add_keyshares;
use crate::keyshare::{Key, Keyshare};
use crate::params::Threshold;
use crate::polynomial::{evaluate, interpolate_at_zero};

/// Splits `key` into `threshold.share_count()` shares using the operating
/// system's random number generator.
///
/// See [`create_keyshares_with_rng`].
#[cfg(feature = "os-rng")]
pub fn create_keyshares(key: &Key, threshold: Threshold) -> Vec<Keyshare> {
    create_keyshares_with_rng(key, threshold, &mut rand_core::OsRng)
}

/// Splits `key` into `n` shares, any `k` of which reconstruct it.
///
/// # Arguments
///
/// - `key`
///   The 32-byte key to split. It should be uniformly random.
/// - `threshold`
///   The public `k`-of-`n` parameters of this sharing instance.
/// - `rng`
///   A cryptographically secure generator. It supplies `32 * (k - 1)`
///   bytes per call.
///
/// # Returns
///
/// `threshold.share_count()` shares with identifiers `1..=n`, in order.
pub fn create_keyshares_with_rng<R>(key: &Key, threshold: Threshold, rng: &mut R) -> Vec<Keyshare>
where
    R: RngCore + CryptoRng + ?Sized,
{
    debug!(%threshold, "creating keyshares");

    let ids: Vec<u8> = (1..=threshold.share_count()).collect();
    deal(key, &ids, threshold.threshold(), rng)
}

/// Reconstructs a key from a set of shares.
///
/// # Arguments
///
/// - `shares`
///   At least `k` shares of one sharing instance, in any order.
///
/// # Returns
///
/// The 32-byte key. Nothing about it is verified.
///
/// Every key byte is recovered independently by Lagrange interpolation at
/// x = 0 over the shares' `(id, y)` points. The order of `shares` does not
/// matter, and passing more than `k` shares of the same instance still
/// yields the key.
///
/// This function never fails. If fewer than `k` shares are given, or the
/// shares come from different instances, carry duplicate identifiers or
/// were tampered with, the result is an unrelated 32-byte value. Treat the
/// output as secret either way.
pub fn combine_keyshares(shares: &[Keyshare]) -> Key {
    trace!(count = shares.len(), "combining keyshares");

    let mut key = [0u8; KEY_SIZE];
    let mut points = Vec::with_capacity(shares.len());

    for (index, byte) in key.iter_mut().enumerate() {
        points.clear();
        points.extend(
            shares
                .iter()
                .map(|s| (Gf256::new(s.id()), Gf256::new(s.y_values()[index]))),
        );

        *byte = interpolate_at_zero(&points).into_u8();
    }

    points.iter_mut().for_each(|(_, y)| y.zeroize());
    key
}

/// Refreshes shares using the operating system's random number generator.
///
/// See [`refresh_keyshares_with_rng`].
#[cfg(feature = "os-rng")]
pub fn refresh_keyshares(shares: &[Keyshare], threshold: Threshold) -> Result<Vec<Keyshare>> {
    refresh_keyshares_with_rng(shares, threshold, &mut rand_core::OsRng)
}

/// Renews a complete share set without reconstructing the key.
///
/// Fresh shares of the all-zero key are dealt at the same identifiers with
/// the same threshold and added to `shares`:
///
/// ```text
/// y' = y + g(x), where g(0) = 0
/// ```
///
/// The refreshed set reconstructs the same key, while old and refreshed
/// shares cannot be mixed.
///
/// # Arguments
///
/// - `shares`
///   The complete share set of one instance.
/// - `threshold`
///   The parameters the set was dealt with.
/// - `rng`
///   A cryptographically secure generator.
///
/// # Returns
///
/// A new share set with the same identifiers, in the same order.
///
/// # Errors
///
/// Returns [`KeyshareError::LengthMismatch`] if `shares` does not hold
/// exactly `threshold.share_count()` shares.
pub fn refresh_keyshares_with_rng<R>(
    shares: &[Keyshare],
    threshold: Threshold,
    rng: &mut R,
) -> Result<Vec<Keyshare>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let n = usize::from(threshold.share_count());
    if shares.len() != n {
        return Err(KeyshareError::LengthMismatch {
            left: shares.len(),
            right: n,
        });
    }

    debug!(%threshold, "refreshing keyshares");

    let ids: Vec<u8> = shares.iter().map(Keyshare::id).collect();
    let zero_shares = deal(&[0u8; KEY_SIZE], &ids, threshold.threshold(), rng);

    let mut refreshed = shares.to_vec();
    add_keyshares(&mut refreshed, &zero_shares)?;

    Ok(refreshed)
}

/// Evaluates one random degree-`(k - 1)` polynomial per key byte at every
/// identifier in `ids`.
///
/// `ids` must be non-zero and `k` in `1..=255`.
fn deal<R>(key: &Key, ids: &[u8], k: u8, rng: &mut R) -> Vec<Keyshare>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut shares: Vec<Keyshare> = ids
        .iter()
        .map(|&id| Keyshare::from_parts(id, [0u8; KEY_SIZE]))
        .collect();

    let k = usize::from(k);
    let mut coefficients = [Gf256::ZERO; MAX_SHARES as usize];
    let mut random = [0u8; MAX_SHARES as usize];

    for (index, &secret) in key.iter().enumerate() {
        rng.fill_bytes(&mut random[..k - 1]);

        coefficients[0] = Gf256::new(secret);
        for (c, &r) in coefficients[1..k].iter_mut().zip(&random[..k - 1]) {
            *c = Gf256::new(r);
        }

        for share in shares.iter_mut() {
            let x = Gf256::new(share.id());
            share.y_values_mut()[index] = evaluate(&coefficients[..k], x).into_u8();
        }
    }

    coefficients[..].zeroize();
    random[..].zeroize();

    shares
}
