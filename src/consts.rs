//! Mathematical constants missing from [`std::f64::consts`].
//!
//! Use the standard library for π, e, √2, ln 2 and friends; this module
//! only fills the gaps.

#![allow(clippy::excessive_precision)]

/// √3
pub const SQRT_3: f64 = 1.73205080756887729352744634151;

/// π/9 (20°)
pub const FRAC_PI_9: f64 = 0.34906585039886591538473815370;

/// π/12 (15°)
pub const FRAC_PI_12: f64 = 0.26179938779914943653855361527;

/// π/18 (10°)
pub const FRAC_PI_18: f64 = 0.17453292519943295769236907685;

/// π/36 (5°)
pub const FRAC_PI_36: f64 = 0.08726646259971647884618453842;

/// Degrees per radian, 180/π.
pub const DEG_PER_RAD: f64 = 57.2957795130823208767981548141;

/// Radians per degree, π/180.
pub const RAD_PER_DEG: f64 = 0.01745329251994329576923690768;

/// √π
pub const SQRT_PI: f64 = 1.77245385090551602729816748334;

/// ln π
pub const LN_PI: f64 = 1.14472988584940017414342735135;

/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: f64 = 0.57721566490153286060651209008;

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_roots() {
        assert!((SQRT_3 * SQRT_3 - 3.0).abs() < 1e-14);
        assert!((SQRT_PI * SQRT_PI - PI).abs() < 1e-14);
        assert!((LN_PI.exp() - PI).abs() < 1e-14);
    }

    #[test]
    fn test_pi_fractions() {
        assert!((FRAC_PI_9 * 9.0 - PI).abs() < 1e-14);
        assert!((FRAC_PI_12 * 12.0 - PI).abs() < 1e-14);
        assert!((FRAC_PI_18 * 18.0 - PI).abs() < 1e-14);
        assert!((FRAC_PI_36 * 36.0 - PI).abs() < 1e-14);
    }

    #[test]
    fn test_angle_conversion() {
        assert!((DEG_PER_RAD * RAD_PER_DEG - 1.0).abs() < 1e-14);
        assert!((180.0 * RAD_PER_DEG - PI).abs() < 1e-14);
        assert!((DEG_PER_RAD - 1.0_f64.to_degrees()).abs() < 1e-12);
    }

    #[test]
    fn test_euler_gamma_digits() {
        assert!((EULER_GAMMA - 0.5772156649).abs() < 1e-10);
    }
}
