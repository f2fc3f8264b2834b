//! Input validation helpers shared by the sizing entry points.
//!
//! Every public computation validates eagerly through these, so NaN or
//! infinity never propagates into a result.

use hoist_core::error::SizingError;

/// Finite and strictly positive.
pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<(), SizingError> {
    if !value.is_finite() {
        return Err(SizingError::NonFinite { quantity, value });
    }
    if value <= 0.0 {
        return Err(SizingError::NonPositive { quantity, value });
    }
    Ok(())
}

/// Finite and non-negative.
pub(crate) fn require_non_negative(quantity: &'static str, value: f64) -> Result<(), SizingError> {
    if !value.is_finite() {
        return Err(SizingError::NonFinite { quantity, value });
    }
    if value < 0.0 {
        return Err(SizingError::Negative { quantity, value });
    }
    Ok(())
}

/// Finite and strictly positive, reporting zero as a division-by-zero since
/// the caller divides by this quantity.
pub(crate) fn require_positive_divisor(
    quantity: &'static str,
    value: f64,
) -> Result<(), SizingError> {
    if !value.is_finite() {
        return Err(SizingError::NonFinite { quantity, value });
    }
    if value == 0.0 {
        return Err(SizingError::DivideByZero { quantity });
    }
    if value < 0.0 {
        return Err(SizingError::NonPositive { quantity, value });
    }
    Ok(())
}

/// Finite and within (0, 1].
pub(crate) fn require_efficiency(value: f64) -> Result<(), SizingError> {
    if !value.is_finite() {
        return Err(SizingError::NonFinite {
            quantity: "efficiency",
            value,
        });
    }
    if value <= 0.0 || value > 1.0 {
        return Err(SizingError::EfficiencyRange { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_accepts_positive() {
        assert!(require_positive("x", 1.0).is_ok());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(matches!(
            require_positive("x", 0.0),
            Err(SizingError::NonPositive { .. })
        ));
        assert!(matches!(
            require_positive("x", -1.0),
            Err(SizingError::NonPositive { .. })
        ));
    }

    #[test]
    fn positive_rejects_nan_and_infinity() {
        assert!(matches!(
            require_positive("x", f64::NAN),
            Err(SizingError::NonFinite { .. })
        ));
        assert!(matches!(
            require_positive("x", f64::INFINITY),
            Err(SizingError::NonFinite { .. })
        ));
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(require_non_negative("x", 0.0).is_ok());
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert!(matches!(
            require_non_negative("x", -0.5),
            Err(SizingError::Negative { .. })
        ));
    }

    #[test]
    fn divisor_reports_zero_as_division_by_zero() {
        assert!(matches!(
            require_positive_divisor("x", 0.0),
            Err(SizingError::DivideByZero { quantity: "x" })
        ));
        assert!(matches!(
            require_positive_divisor("x", -2.0),
            Err(SizingError::NonPositive { .. })
        ));
        assert!(require_positive_divisor("x", 2.0).is_ok());
    }

    #[test]
    fn efficiency_bounds() {
        assert!(require_efficiency(1.0).is_ok());
        assert!(require_efficiency(0.85).is_ok());
        assert!(matches!(
            require_efficiency(0.0),
            Err(SizingError::EfficiencyRange { .. })
        ));
        assert!(matches!(
            require_efficiency(1.01),
            Err(SizingError::EfficiencyRange { .. })
        ));
        assert!(matches!(
            require_efficiency(-0.5),
            Err(SizingError::EfficiencyRange { .. })
        ));
        assert!(matches!(
            require_efficiency(f64::NAN),
            Err(SizingError::NonFinite { .. })
        ));
    }
}
