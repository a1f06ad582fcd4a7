use crate::{CoreError, CoreResult};

/// Floating point type used for every volume and rate.
pub type Real = f64;

/// Absolute and relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Checks that a value is strictly positive; NaN is rejected.
pub fn ensure_positive(v: Real, what: &'static str) -> CoreResult<Real> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_scales_with_magnitude() {
        let tol = Tolerances::default();
        assert!(nearly_equal(2500.0, 2500.0 + 1e-7, tol));
        assert!(!nearly_equal(2500.0, 2500.1, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_detects_infinity() {
        assert!(ensure_finite(Real::INFINITY, "v0").is_err());
        assert_eq!(ensure_finite(42.0, "v0").unwrap(), 42.0);
    }

    #[test]
    fn ensure_positive_rejects_zero_and_nan() {
        assert!(ensure_positive(0.0, "capacity").is_err());
        assert!(ensure_positive(-1.0, "capacity").is_err());
        assert!(ensure_positive(Real::NAN, "capacity").is_err());
        assert_eq!(ensure_positive(2500.0, "capacity").unwrap(), 2500.0);
    }
}
