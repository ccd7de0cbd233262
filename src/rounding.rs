//! Rounding to the nearest integer and to a number of significant digits.
//!
//! # Algorithms
//!
//! - **Nearest**: round half to even ("banker's rounding"), so that
//!   exact `.5` fractions do not bias sums upward.
//! - **Significant digits**: scale by a power of ten so that the requested
//!   digits land in the integer part, round, and scale back.

/// Rounds to the nearest integer, sending exact halves to the even neighbor.
///
/// # Examples
/// ```
/// use omnia::rounding::round_nearest;
/// assert_eq!(round_nearest(6.5), 6.0);
/// assert_eq!(round_nearest(17.5), 18.0);
/// assert_eq!(round_nearest(-std::f64::consts::PI), -3.0);
/// ```
pub fn round_nearest(x: f64) -> f64 {
    x.round_ties_even()
}

/// Rounds `x` to `n` significant decimal digits.
///
/// Exact halves at the last kept digit round to even, as in
/// [`round_nearest`].
///
/// # Returns
/// `x` unchanged when `n == 0`, when `n` exceeds the decimal precision of
/// `f64` (15 digits), or when `x` is zero or not finite.
///
/// # Examples
/// ```
/// use omnia::rounding::sig_digits;
/// assert_eq!(sig_digits(299792.4562, 6), 299792.0);
/// assert_eq!(sig_digits(299792.4562, 4), 299800.0);
/// assert_eq!(sig_digits(17.5, 2), 18.0);
/// ```
pub fn sig_digits(x: f64, n: u16) -> f64 {
    if n == 0 || u32::from(n) > f64::DIGITS || x == 0.0 || !x.is_finite() {
        return x;
    }

    let magnitude = x.abs().log10().floor() as i32;
    let exponent = i32::from(n) - 1 - magnitude;

    // Divide by 10^-k rather than multiply by 10^k for negative k: powers of
    // ten above one are exact in f64, their reciprocals are not.
    if exponent > f64::MAX_10_EXP {
        // Near the subnormal range 10^k itself overflows; scale in halves.
        let lo = 10f64.powi(exponent / 2);
        let hi = 10f64.powi(exponent - exponent / 2);
        round_nearest(x * lo * hi) / hi / lo
    } else if exponent >= 0 {
        let scale = 10f64.powi(exponent);
        round_nearest(x * scale) / scale
    } else {
        let scale = 10f64.powi(-exponent);
        round_nearest(x / scale) * scale
    }
}
