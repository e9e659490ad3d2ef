//! Homomorphic addition of keyshares.
//!
//! Share generation is linear in the key: two instances dealt with the same
//! identifiers and the same threshold differ only in the constant terms of
//! their polynomials. Adding their shares point-wise therefore yields
//! shares of a polynomial whose constant term is the field sum of the two
//! keys, i.e. `key1 ^ key2`, without either key ever being reconstructed.
//!
//! Both operations write into their first argument and only read the
//! second. Callers sharing one buffer across threads must serialize calls
//! themselves.

use tracing::{trace, warn};

use crate::error::{KeyshareError, Result};
use crate::field::Gf256;
use crate::keyshare::Keyshare;

/// Adds `share2` into `share1`.
///
/// # Arguments
///
/// - `share1`
///   The share written to. On success every y-value becomes the field sum
///   (XOR) of the two shares' y-values and the identifier is kept.
/// - `share2`
///   The share read from. It must carry the same identifier.
///
/// # Errors
///
/// Returns [`KeyshareError::IdMismatch`] if the identifiers differ. In that
/// case `share1` is left unchanged.
pub fn add_two_keyshare(share1: &mut Keyshare, share2: &Keyshare) -> Result<()> {
    let (left, right) = (share1.id(), share2.id());
    if left != right {
        warn!(left, right, "refusing to add keyshares with different identifiers");
        return Err(KeyshareError::IdMismatch { left, right });
    }

    accumulate(share1, share2);
    Ok(())
}

/// Adds every share of `shares2` into the share at the same index of
/// `shares1`.
///
/// Both sets must have been dealt with identical identifiers, index by
/// index, and identical thresholds. Combining the result then recovers
/// `key1 ^ key2`.
///
/// The operation is all-or-nothing: every identifier pair is checked before
/// anything is written, so on error `shares1` is untouched.
///
/// # Arguments
///
/// - `shares1`
///   The set written to, in place.
/// - `shares2`
///   The set read from, index-aligned with `shares1`.
///
/// # Errors
///
/// - [`KeyshareError::LengthMismatch`] if the sets differ in size
/// - [`KeyshareError::SetIdMismatch`] for the first index whose identifiers
///   differ
pub fn add_keyshares(shares1: &mut [Keyshare], shares2: &[Keyshare]) -> Result<()> {
    if shares1.len() != shares2.len() {
        return Err(KeyshareError::LengthMismatch {
            left: shares1.len(),
            right: shares2.len(),
        });
    }

    if let Some((index, (a, b))) = shares1
        .iter()
        .zip(shares2)
        .enumerate()
        .find(|(_, (a, b))| a.id() != b.id())
    {
        let (left, right) = (a.id(), b.id());
        warn!(index, left, right, "refusing to add keyshare sets with different identifiers");
        return Err(KeyshareError::SetIdMismatch { index, left, right });
    }

    trace!(count = shares1.len(), "adding keyshare sets");

    for (a, b) in shares1.iter_mut().zip(shares2) {
        accumulate(a, b);
    }

    Ok(())
}

/// XORs the y-values of `src` into `dst`.
fn accumulate(dst: &mut Keyshare, src: &Keyshare) {
    for (d, &s) in dst.y_values_mut().iter_mut().zip(src.y_values()) {
        *d = (Gf256::new(*d) + Gf256::new(s)).into_u8();
    }
}
