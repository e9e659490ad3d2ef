//! Polynomial evaluation and interpolation over GF(256).
//!
//! Shares are points on a random polynomial whose constant term is one key
//! byte. [`evaluate`] produces those points during share generation and
//! [`interpolate_at_zero`] recovers the constant term from them.
//!
//! Polynomials are never stored beyond one call: they exist as a coefficient
//! slice owned by the caller.

use crate::field::Gf256;

/// Evaluates a polynomial at `x` using Horner's method.
///
/// Coefficients are given in increasing degree order:
///
/// ```text
/// f(x) = c[0] + c[1]·x + c[2]·x² + ... + c[k-1]·x^(k-1)
/// ```
///
/// The loop runs exactly `coefficients.len()` times and only uses field
/// addition and multiplication, so its timing depends on the (public)
/// degree alone. An empty slice is the zero polynomial.
pub fn evaluate(coefficients: &[Gf256], x: Gf256) -> Gf256 {
    coefficients
        .iter()
        .rev()
        .fold(Gf256::ZERO, |acc, &c| acc * x + c)
}

/// Recovers `f(0)` from points `(xᵢ, yᵢ)` of a polynomial `f`.
///
/// Computes the Lagrange form evaluated at zero:
///
/// ```text
/// f(0) = Σᵢ yᵢ · Πⱼ≠ᵢ xⱼ / (xⱼ - xᵢ)
/// ```
///
/// The result is a symmetric sum, so the order of `points` does not matter.
/// With more points than the polynomial's degree requires, the result is
/// still `f(0)`.
///
/// # Preconditions
///
/// The `x` values must be non-zero and pairwise distinct. This is not
/// checked: a repeated `x` makes a denominator zero, which inverts to zero,
/// and the function returns an unrelated value instead of failing.
pub fn interpolate_at_zero(points: &[(Gf256, Gf256)]) -> Gf256 {
    let mut acc = Gf256::ZERO;

    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut num = Gf256::ONE;
        let mut den = Gf256::ONE;

        for (j, &(xj, _)) in points.iter().enumerate() {
            if i != j {
                num *= xj;
                den *= xj - xi;
            }
        }

        acc += yi * (num / den);
    }

    acc
}
