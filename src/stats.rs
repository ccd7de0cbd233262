//! Basic descriptive statistics and smoothing.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent
//!   of n.
//! - **Variance**: two-pass over deviations from the compensated mean, with
//!   the **population** denominator `n`.
//! - **Moving average**: centred window of `distance` neighbors on each
//!   side, truncated at the edges (see [`moving_average`]).

use crate::error::Result;

/// Mean, population variance, and standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance (denominator `n`).
    pub variance: f64,
    /// Square root of [`variance`](Self::variance).
    pub std_dev: f64,
}

/// Computes mean, population variance, and standard deviation in two passes.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty.
///
/// NaN or infinite inputs propagate into the result.
///
/// # Examples
/// ```
/// use omnia::stats::basic_stats;
/// let s = basic_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.variance, 4.0);
/// assert_eq!(s.std_dev, 2.0);
/// ```
pub fn basic_stats(data: &[f64]) -> Option<BasicStats> {
    if data.is_empty() {
        return None;
    }
    let n = data.len() as f64;
    let mean = kahan_sum(data) / n;

    let mut sum_sq = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let d = x - mean;
        let y = d * d - c;
        let t = sum_sq + y;
        c = (t - sum_sq) - y;
        sum_sq = t;
    }

    let variance = sum_sq / n;
    Some(BasicStats {
        mean,
        variance,
        std_dev: variance.sqrt(),
    })
}

/// Centred moving average with `distance` neighbors on each side.
///
/// Element `i` of the output is the mean of `data[x]` over
/// `i − distance ≤ x ≤ i + distance`, keeping only indices that are inside
/// the slice **and** satisfy `x ≤ n − distance`. The second condition clips
/// the right edge harder than the left: with `distance ≥ 2` the last
/// `distance − 1` samples never contribute to any window.
///
/// When `distance > n` no index qualifies and every output is `NaN`.
/// With `distance == 0` the input is returned unchanged.
///
/// # Complexity
/// Time: O(n · distance), Space: O(n)
///
/// # Errors
/// Returns [`Error::Allocation`](crate::Error::Allocation) if the output
/// buffer cannot be reserved.
///
/// # Examples
/// ```
/// use omnia::stats::moving_average;
/// let avg = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2).unwrap();
/// assert_eq!(avg, vec![2.0, 2.5, 3.0, 3.5, 4.0, 4.5]);
/// ```
pub fn moving_average(data: &[f64], distance: usize) -> Result<Vec<f64>> {
    let n = data.len();
    let mut out = Vec::new();
    out.try_reserve_exact(n)?;

    let Some(cutoff) = n.checked_sub(distance) else {
        out.resize(n, f64::NAN);
        return Ok(out);
    };
    let last = cutoff.min(n.saturating_sub(1));

    for i in 0..n {
        let lo = i.saturating_sub(distance);
        let hi = i.saturating_add(distance).min(last);
        let value = if lo > hi {
            f64::NAN
        } else {
            let window = &data[lo..=hi];
            kahan_sum(window) / window.len() as f64
        };
        out.push(value);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
