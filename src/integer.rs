//! Integer helpers: greatest common divisor, least common multiple, and
//! power-of-two sizing.

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(0, 0)` is `0`; `gcd(0, n)` is `n`.
///
/// # Complexity
/// Time: O(log min(x, y)), Space: O(1)
///
/// # Examples
/// ```
/// use omnia::integer::gcd;
/// assert_eq!(gcd(644, 805), 161);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(mut x: u64, mut y: u64) -> u64 {
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Least common multiple.
///
/// Divides the larger operand by the GCD before multiplying, so the
/// intermediate never exceeds the result.
///
/// # Returns
/// - `Some(0)` if either input is `0`.
/// - `None` if the result does not fit in a `u64`.
///
/// # Examples
/// ```
/// use omnia::integer::lcm;
/// assert_eq!(lcm(36, 125), Some(4500));
/// assert_eq!(lcm(0, 4), Some(0));
/// assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
/// ```
pub fn lcm(x: u64, y: u64) -> Option<u64> {
    if x == y {
        return Some(x);
    }
    let (small, large) = if x < y { (x, y) } else { (y, x) };
    if small == 0 {
        return Some(0);
    }
    (large / gcd(small, large)).checked_mul(small)
}

/// Smallest power of two that is greater than or equal to `n`.
///
/// # Returns
/// - `0` if `n <= 0`.
///
/// # Examples
/// ```
/// use omnia::integer::size_pow2;
/// assert_eq!(size_pow2(1), 1);
/// assert_eq!(size_pow2(1000), 1024);
/// assert_eq!(size_pow2(1024), 1024);
/// assert_eq!(size_pow2(-5), 0);
/// ```
pub fn size_pow2(n: i64) -> u64 {
    if n <= 0 {
        0
    } else {
        // n < 2^63, so the next power of two is at most 2^63.
        (n as u64).next_power_of_two()
    }
}
