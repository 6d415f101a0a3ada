use crate::{MtError, MtResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
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

pub fn ensure_finite(v: Real, what: &'static str) -> MtResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MtError::NonFinite { what, value: v })
    }
}

pub fn ensure_positive(v: Real, what: &'static str) -> MtResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MtError::NonPositive { what, value: v })
    }
}

/// True when an optional value is present, finite, and strictly positive.
///
/// The engine's warning path collapses everything else: a missing value,
/// NaN/inf from a raw text box, zero, or a negative entry.
pub fn is_valid_positive(v: Option<Real>) -> bool {
    matches!(v, Some(x) if x.is_finite() && x > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1e-9, "dab").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "dab"),
            Err(MtError::NonPositive { .. })
        ));
        assert!(matches!(
            ensure_positive(-2.0, "dab"),
            Err(MtError::NonPositive { .. })
        ));
    }

    #[test]
    fn valid_positive_filters_bad_inputs() {
        assert!(is_valid_positive(Some(1e-9)));
        assert!(!is_valid_positive(None));
        assert!(!is_valid_positive(Some(0.0)));
        assert!(!is_valid_positive(Some(-1.0)));
        assert!(!is_valid_positive(Some(Real::NAN)));
        assert!(!is_valid_positive(Some(Real::INFINITY)));
    }

    proptest! {
        #[test]
        fn nearly_equal_separates_noise_from_error(v in 1e-3_f64..1e12) {
            let tol = Tolerances::default();
            prop_assert!(nearly_equal(v, v, tol));
            prop_assert!(nearly_equal(v, v * (1.0 + 1e-12), tol));
            prop_assert!(!nearly_equal(v, v * (1.0 + 1e-6), tol));
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e9_f64..1e9, b in -1e9_f64..1e9) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn positivity_guards_agree(v in -1e12_f64..1e12) {
            prop_assert_eq!(
                ensure_positive(v, "value").is_ok(),
                is_valid_positive(Some(v))
            );
        }
    }
}
