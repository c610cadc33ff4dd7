use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a valuation request is rejected.
///
/// Both are detected before any cash flow is generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error(
        "shape mismatch: {periods} periods, {forward_rates} forward rates, \
         {discount_factors} discount factors"
    )]
    ShapeMismatch {
        periods: usize,
        forward_rates: usize,
        discount_factors: usize,
    },
    #[error("invalid {field} {value}: {reason}")]
    InvalidInput {
        field: String,
        value: Decimal,
        reason: &'static str,
    },
}

impl ValuationError {
    pub(crate) fn invalid(field: impl Into<String>, value: Decimal, reason: &'static str) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value,
            reason,
        }
    }

    /// Arithmetic on `value` left the range `Decimal` can represent.
    pub(crate) fn out_of_range(field: impl Into<String>, value: Decimal) -> Self {
        Self::invalid(field, value, "out of representable range")
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
