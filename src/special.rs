//! Elementary special functions.
//!
//! Logarithms to an arbitrary base and the inverse hyperbolic functions,
//! written out in their closed logarithmic forms. Out-of-domain arguments
//! return `NaN` rather than panicking.

use std::f64::consts::LN_2;

// ============================================================================
// Logarithms
// ============================================================================

/// Logarithm of `x` to an arbitrary `base`: `ln(x) / ln(base)`.
///
/// # Returns
/// - `NaN` if `x < 1` or `x` is NaN.
///
/// # Examples
/// ```
/// use omnia::special::log_base;
/// assert!((log_base(1024.0, 2.0) - 10.0).abs() < 1e-12);
/// assert!((log_base(1000.0, 10.0) - 3.0).abs() < 1e-12);
/// assert!(log_base(0.5, 2.0).is_nan());
/// ```
pub fn log_base(x: f64, base: f64) -> f64 {
    if x >= 1.0 {
        x.ln() / base.ln()
    } else {
        f64::NAN
    }
}

// ============================================================================
// Inverse Hyperbolic Functions
// ============================================================================

/// Inverse hyperbolic sine.
///
/// # Definition
/// ```text
/// asinh(x) = ln(x + √(x² + 1))
/// ```
///
/// Evaluated on `|x|` and mirrored, since `x + √(x² + 1)` cancels to zero
/// for large negative `x`. Above 1e150, where `x²` would overflow, uses
/// `ln(2x)`.
///
/// # Examples
/// ```
/// use omnia::special::asinh;
/// assert!((asinh(1.0_f64.sinh()) - 1.0).abs() < 1e-12);
/// assert!((asinh(-1e9) + 21.416413017506358).abs() < 1e-12);
/// ```
pub fn asinh(x: f64) -> f64 {
    if x < 0.0 {
        return -asinh(-x);
    }
    if x > 1e150 {
        return x.ln() + LN_2;
    }
    (x + (x * x + 1.0).sqrt()).ln()
}

/// Inverse hyperbolic cosine (principal, non-negative branch).
///
/// # Definition
/// ```text
/// acosh(x) = ln(x + √(x² − 1)),  x ≥ 1
/// ```
///
/// # Returns
/// - `NaN` if `x < 1`.
///
/// # Examples
/// ```
/// use omnia::special::acosh;
/// assert!((acosh(1.5_f64.cosh()) - 1.5).abs() < 1e-12);
/// assert!(acosh(0.5).is_nan());
/// ```
pub fn acosh(x: f64) -> f64 {
    if x < 1.0 {
        return f64::NAN;
    }
    (x + (x * x - 1.0).sqrt()).ln()
}

/// Inverse hyperbolic tangent.
///
/// # Definition
/// ```text
/// atanh(x) = ½ ln((1 + x) / (1 − x)),  |x| < 1
/// ```
///
/// # Returns
/// - `NaN` if `|x| >= 1` or `x` is NaN.
///
/// # Examples
/// ```
/// use omnia::special::atanh;
/// assert!((atanh(1.0_f64.tanh()) - 1.0).abs() < 1e-12);
/// assert!(atanh(1.0).is_nan());
/// ```
pub fn atanh(x: f64) -> f64 {
    if x.is_nan() || x.abs() >= 1.0 {
        return f64::NAN;
    }
    ((1.0 + x) / (1.0 - x)).ln() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANGLES: [f64; 3] = [1.0, 1.333_333_333_333_333_3, 1.5];

    // --- log_base ---

    #[test]
    fn test_log_base_powers() {
        assert!((log_base(8.0, 2.0) - 3.0).abs() < 1e-12);
        assert!((log_base(81.0, 3.0) - 4.0).abs() < 1e-12);
        assert!((log_base(std::f64::consts::E, std::f64::consts::E) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_log_base_of_one_is_zero() {
        assert_eq!(log_base(1.0, 7.0), 0.0);
    }

    #[test]
    fn test_log_base_below_one_is_nan() {
        assert!(log_base(0.999, 10.0).is_nan());
        assert!(log_base(0.0, 10.0).is_nan());
        assert!(log_base(-4.0, 2.0).is_nan());
        assert!(log_base(f64::NAN, 2.0).is_nan());
    }

    // --- inverse hyperbolic round trips ---

    #[test]
    fn test_atanh_tanh_roundtrip() {
        for a in ANGLES {
            assert!((atanh(a.tanh()) - a).abs() < 1e-10, "atanh(tanh({a}))");
            assert!((atanh((-a).tanh()) + a).abs() < 1e-10, "atanh(tanh({}))", -a);
        }
    }

    #[test]
    fn test_asinh_sinh_roundtrip() {
        for a in ANGLES {
            assert!((asinh(a.sinh()) - a).abs() < 1e-10, "asinh(sinh({a}))");
            assert!((asinh((-a).sinh()) + a).abs() < 1e-10, "asinh(sinh({}))", -a);
        }
    }

    #[test]
    fn test_acosh_cosh_roundtrip_is_principal() {
        for a in ANGLES {
            assert!((acosh(a.cosh()) - a).abs() < 1e-10, "acosh(cosh({a}))");
            // cosh is even, so the negative angle maps back to +a.
            assert!((acosh((-a).cosh()) - a).abs() < 1e-10, "acosh(cosh({}))", -a);
        }
    }

    #[test]
    fn test_matches_std() {
        for x in [0.1, 0.5, 2.0, 10.0] {
            assert!((asinh(x) - x.asinh()).abs() < 1e-12);
            assert!((acosh(x + 1.0) - (x + 1.0).acosh()).abs() < 1e-12);
        }
        for x in [-0.9, -0.25, 0.0, 0.25, 0.9] {
            assert!((atanh(x) - x.atanh()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_domain_edges() {
        assert_eq!(acosh(1.0), 0.0);
        assert!(acosh(0.999).is_nan());
        assert!(atanh(1.0).is_nan());
        assert!(atanh(-1.0).is_nan());
        assert!(atanh(2.0).is_nan());
        assert!(atanh(f64::NAN).is_nan());
        assert_eq!(asinh(0.0), 0.0);
    }

    #[test]
    fn test_asinh_large_magnitude() {
        for x in [1e5_f64, 1e9, 1e20, 1e200] {
            let want = x.asinh();
            assert!((asinh(x) - want).abs() <= 1e-12 * want, "asinh({x})");
            assert!((asinh(-x) + want).abs() <= 1e-12 * want, "asinh({})", -x);
        }
        assert_eq!(asinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
