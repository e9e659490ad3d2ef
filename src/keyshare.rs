//! Key and keyshare representations.
//!
//! A keyshare is a fixed 33-byte record:
//!
//! ```text
//! byte 0      identifier (x-coordinate, 1..=255)
//! bytes 1..33 y-values for key bytes 0..32, in order
//! ```
//!
//! All 33 bytes must be handled with the same care as the key itself: a
//! single share already leaks information once combined with others.
//! Shares are wiped from memory when dropped.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{KEY_SIZE, KEYSHARE_SIZE};
use crate::error::{KeyshareError, Result};

/// A 32-byte cryptographic key, the secret being shared.
pub type Key = [u8; KEY_SIZE];

/// One participant's share of a [`Key`].
///
/// The identifier is guaranteed non-zero: x = 0 is where the secret lives
/// on every sharing polynomial. Wiping a share, explicitly or on drop,
/// clears its y-values and keeps the identifier.
#[derive(Clone)]
pub struct Keyshare {
    id: u8,
    y: [u8; KEY_SIZE],
}

impl Keyshare {
    /// Builds a share from its identifier and y-values.
    ///
    /// # Errors
    ///
    /// Returns [`KeyshareError::ZeroIdentifier`] if `id` is zero.
    pub fn new(id: u8, y: [u8; KEY_SIZE]) -> Result<Self> {
        if id == 0 {
            return Err(KeyshareError::ZeroIdentifier);
        }

        Ok(Self { id, y })
    }

    /// Crate-internal constructor for identifiers already known non-zero.
    pub(crate) fn from_parts(id: u8, y: [u8; KEY_SIZE]) -> Self {
        debug_assert!(id != 0);
        Self { id, y }
    }

    /// Decodes a share from its 33-byte wire form.
    ///
    /// # Errors
    ///
    /// Returns [`KeyshareError::ZeroIdentifier`] if byte 0 is zero.
    pub fn from_bytes(bytes: &[u8; KEYSHARE_SIZE]) -> Result<Self> {
        let mut y = [0u8; KEY_SIZE];
        y.copy_from_slice(&bytes[1..]);

        Self::new(bytes[0], y)
    }

    /// Encodes the share into its 33-byte wire form.
    pub fn to_bytes(&self) -> [u8; KEYSHARE_SIZE] {
        let mut out = [0u8; KEYSHARE_SIZE];
        out[0] = self.id;
        out[1..].copy_from_slice(&self.y);
        out
    }

    /// The share's x-coordinate.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// The y-value for each key byte position.
    pub fn y_values(&self) -> &[u8; KEY_SIZE] {
        &self.y
    }

    pub(crate) fn y_values_mut(&mut self) -> &mut [u8; KEY_SIZE] {
        &mut self.y
    }
}

impl Zeroize for Keyshare {
    fn zeroize(&mut self) {
        self.y.zeroize();
    }
}

impl Drop for Keyshare {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Keyshare {}

impl TryFrom<&[u8]> for Keyshare {
    type Error = KeyshareError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; KEYSHARE_SIZE] =
            bytes.try_into().map_err(|_| KeyshareError::InvalidLength {
                expected: KEYSHARE_SIZE,
                actual: bytes.len(),
            })?;

        Self::from_bytes(bytes)
    }
}

impl ConstantTimeEq for Keyshare {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.id.ct_eq(&other.id) & self.y[..].ct_eq(&other.y[..])
    }
}

impl PartialEq for Keyshare {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Keyshare {}

// y-values never reach logs or panic messages
impl fmt::Debug for Keyshare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyshare")
            .field("id", &self.id)
            .field("y", &"<redacted>")
            .finish()
    }
}
