//! Standard normal cumulative distribution.
//!
//! Thin wrappers over [`statrs::distribution::Normal`] so callers can write
//! `norm_cdf(d1)` without carrying a distribution object around.

use statrs::distribution::{ContinuousCDF, Normal};

/// Cumulative distribution function of the standard normal, Φ(x).
///
/// Returns 0 and 1 at the infinities and propagates NaN.
///
/// # Example
///
/// ```rust
/// use zeroliq_math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    Normal::standard().cdf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cdf_reference_values() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(3.0), 0.998_650_101_968_370, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_tails() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [0.1, 0.5, 1.3, 2.7] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }
}
