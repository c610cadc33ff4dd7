//! Parallel forward-rate shift scenarios.
//!
//! Revalues a swap with every forward rate moved by a fixed number of basis
//! points, keeping discount factors fixed, and reports the NPV impact.

use crate::core::curve::RateCurve;
use crate::core::terms::SwapTerms;
use crate::valuation::analysis::BASIS_POINT;
use crate::valuation::error::ValuationError;
use crate::valuation::valuator::SwapValuator;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one shift scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftScenarioResult {
    /// Shift applied to every forward rate, in basis points.
    pub shift_bps: i32,
    /// NPV on the unshifted curve.
    pub baseline_npv: Decimal,
    /// NPV on the shifted curve.
    pub shifted_npv: Decimal,
    /// `shifted_npv - baseline_npv`.
    pub impact: Decimal,
}

/// Value the swap under each forward-rate shift, in the order given.
pub fn forward_shift_scenarios(
    terms: &SwapTerms,
    curve: &RateCurve,
    shifts_bps: &[i32],
) -> Result<Vec<ShiftScenarioResult>, ValuationError> {
    let baseline_npv = SwapValuator::value(terms, curve)?.npv();

    shifts_bps
        .iter()
        .map(|&shift_bps| {
            let shift = Decimal::from(shift_bps) * BASIS_POINT;
            let shifted = curve
                .with_forward_shift(shift)
                .ok_or_else(|| ValuationError::out_of_range("forward_rates", shift))?;
            let shifted_npv = SwapValuator::value(terms, &shifted)?.npv();
            debug!("forward shift {}bp: npv {}", shift_bps, shifted_npv);
            let impact = shifted_npv
                .checked_sub(baseline_npv)
                .ok_or_else(|| ValuationError::out_of_range("notional", terms.notional()))?;
            Ok(ShiftScenarioResult {
                shift_bps,
                baseline_npv,
                shifted_npv,
                impact,
            })
        })
        .collect()
}
