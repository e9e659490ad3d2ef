//! Fixed sizes and field parameters shared across the crate.
//!
//! Everything here is a compile-time constant. The crate keeps no runtime
//! tables, so nothing needs initialising before concurrent use and no
//! arithmetic ever indexes memory with a secret-derived value.

/// Length of a key shared by
/// [`create_keyshares_with_rng`](crate::create_keyshares_with_rng).
pub const KEY_SIZE: usize = 32;

/// Length of a serialized [`Keyshare`](crate::Keyshare): one identifier
/// byte followed by one y-value per key byte.
pub const KEYSHARE_SIZE: usize = 1 + KEY_SIZE;

/// Largest number of shares a single sharing instance can produce.
///
/// Identifiers live in GF(256) and zero is reserved for the secret itself.
pub const MAX_SHARES: u8 = 255;

/// Irreducible polynomial defining GF(256): x⁸ + x⁴ + x³ + x + 1.
///
/// This is the Rijndael polynomial, which keeps shares interoperable with
/// other implementations of the same scheme.
pub const REDUCTION_POLYNOMIAL: u16 = 0x11b;

/// Low byte of [`REDUCTION_POLYNOMIAL`], folded back in whenever a
/// multiplication step overflows past x⁷.
pub(crate) const REDUCTION: u8 = (REDUCTION_POLYNOMIAL & 0xff) as u8;
