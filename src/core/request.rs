use crate::core::curve::RateCurve;
use crate::core::terms::SwapTerms;
use crate::valuation::analysis::SwapAnalysis;
use crate::valuation::error::ValuationError;
use crate::valuation::valuator::{SwapValuator, ValuationResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing and evaluating a [`ValuationRequest`].
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed valuation request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize valuation result: {0}")]
    Output(serde_json::Error),
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

/// A swap and the curve to value it on, as handed over by an upstream
/// collaborator.
///
/// JSON schema (decimals as strings, `spread` optional):
///
/// ```json
/// {
///   "terms": {
///     "notional": "100000000",
///     "fixed_rate": "0.03",
///     "spread": "0.005",
///     "periods": [1, 2, 3]
///   },
///   "curve": {
///     "forward_rates": ["0.025", "0.027", "0.03"],
///     "discount_factors": ["0.99", "0.97", "0.94"]
///   }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use swap_valuation::core::request::ValuationRequest;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// let request = ValuationRequest::from_json(r#"{
///     "terms": { "notional": "1000000", "fixed_rate": "0.03", "periods": [1] },
///     "curve": { "forward_rates": ["0.025"], "discount_factors": ["0.99"] }
/// }"#).unwrap();
///
/// assert_eq!(request.evaluate().unwrap().npv(), Decimal::ZERO);
/// assert_eq!(request.terms.spread(), dec!(0.005));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub terms: SwapTerms,
    pub curve: RateCurve,
}

impl ValuationRequest {
    pub fn new(terms: SwapTerms, curve: RateCurve) -> Self {
        Self { terms, curve }
    }

    /// Parse a request. Shape and domain checks happen on evaluation.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn evaluate(&self) -> Result<ValuationResult, ValuationError> {
        SwapValuator::value(&self.terms, &self.curve)
    }

    pub fn analyze(&self) -> Result<SwapAnalysis, ValuationError> {
        SwapAnalysis::compute(&self.terms, &self.curve)
    }

    /// Parse, value, and serialize the result in one step.
    pub fn evaluate_json(json: &str) -> Result<String, RequestError> {
        let request = Self::from_json(json)?;
        let result = request.evaluate()?;
        serde_json::to_string(&result).map_err(RequestError::Output)
    }
}
