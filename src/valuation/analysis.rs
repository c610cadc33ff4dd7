use crate::core::curve::RateCurve;
use crate::core::terms::{PaymentPeriod, SwapTerms};
use crate::valuation::error::ValuationError;
use crate::valuation::valuator::{SwapValuator, ValuationResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One basis point as a decimal rate.
pub const BASIS_POINT: Decimal = dec!(0.0001);

/// Derived analytics for a valued swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapAnalysis {
    /// Leg and net present values.
    pub valuation: ValuationResult,
    /// Present value of one unit of rate paid on the notional every period.
    pub annuity: Decimal,
    /// Fixed rate at which the swap has zero NPV. `None` for a swap without
    /// periods, or when the rate is outside the `Decimal` range.
    pub par_rate: Option<Decimal>,
    /// NPV change for a +1bp parallel move in forward rates.
    pub forward_pv01: Decimal,
    /// Floating minus fixed payment, per period, undiscounted.
    pub net_cash_flows: Vec<(PaymentPeriod, Decimal)>,
}

impl SwapAnalysis {
    /// Value the swap and derive its analytics.
    pub fn compute(terms: &SwapTerms, curve: &RateCurve) -> Result<Self, ValuationError> {
        let flows = SwapValuator::cash_flows(terms, curve)?;
        let valuation = SwapValuator::reduce(terms, &flows)?;
        let out_of_range = || ValuationError::out_of_range("notional", terms.notional());

        let annuity = curve
            .discount_factors()
            .iter()
            .try_fold(Decimal::ZERO, |acc, df| acc.checked_add(*df))
            .and_then(|discount_sum| terms.notional().checked_mul(discount_sum))
            .ok_or_else(out_of_range)?;

        let par_rate = if annuity.is_zero() {
            None
        } else {
            valuation.pv_floating_leg().checked_div(annuity)
        };

        Ok(Self {
            valuation,
            annuity,
            par_rate,
            forward_pv01: annuity * BASIS_POINT,
            net_cash_flows: flows.net_amounts().ok_or_else(out_of_range)?,
        })
    }

    /// Distance of the contract's fixed rate from par, in basis points.
    /// Positive when the contract rate is below par (floating receiver ahead).
    pub fn par_gap_bps(&self, terms: &SwapTerms) -> Option<f64> {
        let par = self.par_rate?;
        par.checked_sub(terms.fixed_rate())?
            .checked_div(BASIS_POINT)?
            .to_f64()
    }
}

impl std::fmt::Display for SwapAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.valuation)?;
        writeln!(f, "\n=== Swap Analysis ===")?;
        writeln!(f, "Annuity:          {}", self.annuity.round_dp(2))?;
        match self.par_rate {
            Some(rate) => writeln!(f, "Par Rate:         {}", rate.round_dp(6))?,
            None => writeln!(f, "Par Rate:         n/a")?,
        }
        writeln!(f, "Forward PV01:     {}", self.forward_pv01.round_dp(2))?;

        writeln!(f, "\nNet Cash Flows:")?;
        for (period, amount) in &self.net_cash_flows {
            writeln!(f, "  {:<6} {:>18}", period, amount.round_dp(2))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SwapTerms, RateCurve) {
        let terms = SwapTerms::new(dec!(100_000_000), dec!(0.03), PaymentPeriod::schedule(5));
        let curve = RateCurve::new(
            vec![dec!(0.025), dec!(0.027), dec!(0.03), dec!(0.032), dec!(0.034)],
            vec![dec!(0.99), dec!(0.97), dec!(0.94), dec!(0.91), dec!(0.88)],
        );
        (terms, curve)
    }

    #[test]
    fn test_annuity_and_pv01() {
        let (terms, curve) = sample();
        let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
        assert_eq!(analysis.annuity, dec!(469_000_000));
        assert_eq!(analysis.forward_pv01, dec!(46_900));
    }

    #[test]
    fn test_par_rate_zeroes_npv() {
        let (terms, curve) = sample();
        let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
        let par = analysis.par_rate.unwrap();

        let at_par = SwapTerms::new(terms.notional(), par, terms.periods().to_vec());
        let npv = SwapValuator::value(&at_par, &curve).unwrap().npv();
        assert!(npv.abs() < dec!(0.01), "npv at par was {}", npv);
    }

    #[test]
    fn test_pv01_matches_bumped_forwards() {
        let (terms, curve) = sample();
        let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
        let bumped = SwapValuator::value(&terms, &curve.with_forward_shift(BASIS_POINT).unwrap()).unwrap();
        assert_eq!(bumped.npv() - analysis.valuation.npv(), analysis.forward_pv01);
    }

    #[test]
    fn test_par_gap() {
        let (terms, curve) = sample();
        let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
        let gap = analysis.par_gap_bps(&terms).unwrap();
        // par ≈ 3.4463%
        assert!((gap - 44.6268).abs() < 0.001, "gap was {}", gap);
    }

    #[test]
    fn test_no_periods_has_no_par_rate() {
        let terms = SwapTerms::new(dec!(1_000), dec!(0.03), Vec::new());
        let curve = RateCurve::new(Vec::new(), Vec::new());
        let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
        assert_eq!(analysis.annuity, Decimal::ZERO);
        assert!(analysis.par_rate.is_none());
        assert!(analysis.par_gap_bps(&terms).is_none());
    }

    #[test]
    fn test_unrepresentable_annuity_rejected() {
        // Every payment is zero, so only the annuity leaves the range.
        let half = Decimal::MAX / Decimal::TWO;
        let terms = SwapTerms::new(half, Decimal::ZERO, PaymentPeriod::schedule(3))
            .with_spread(Decimal::ZERO);
        let curve = RateCurve::new(vec![Decimal::ZERO; 3], vec![Decimal::ONE; 3]);

        assert_eq!(SwapValuator::value(&terms, &curve).unwrap().npv(), Decimal::ZERO);
        let err = SwapAnalysis::compute(&terms, &curve).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        let (terms, _) = sample();
        let curve = RateCurve::new(vec![dec!(0.03)], vec![dec!(0.99)]);
        assert!(SwapAnalysis::compute(&terms, &curve).unwrap_err().is_shape_mismatch());
    }
}
