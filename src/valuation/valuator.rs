use crate::core::cashflow::{CashFlow, Leg, LegCashFlows, SwapCashFlows};
use crate::core::curve::RateCurve;
use crate::core::terms::SwapTerms;
use crate::valuation::error::ValuationError;
use log::{debug, trace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Leg and net present values of a swap.
///
/// `npv` is always exactly `pv_floating_leg - pv_fixed_leg` of the values
/// held here, including after deserialization. A positive NPV favors the
/// floating-rate receiver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LegValues")]
pub struct ValuationResult {
    pv_fixed_leg: Decimal,
    pv_floating_leg: Decimal,
    npv: Decimal,
}

/// Serialized form of a [`ValuationResult`]. A stored `npv` must agree with the legs.
#[derive(Deserialize)]
struct LegValues {
    pv_fixed_leg: Decimal,
    pv_floating_leg: Decimal,
    #[serde(default)]
    npv: Option<Decimal>,
}

impl TryFrom<LegValues> for ValuationResult {
    type Error = String;

    fn try_from(values: LegValues) -> Result<Self, Self::Error> {
        let result = Self::from_legs(values.pv_fixed_leg, values.pv_floating_leg)
            .ok_or_else(|| "leg values out of representable range".to_string())?;
        match values.npv {
            Some(npv) if npv != result.npv => Err(format!(
                "npv {} does not equal pv_floating_leg - pv_fixed_leg ({})",
                npv, result.npv
            )),
            _ => Ok(result),
        }
    }
}

impl ValuationResult {
    /// Combine leg values into a result, `None` if their difference leaves
    /// the `Decimal` range.
    pub fn from_legs(pv_fixed_leg: Decimal, pv_floating_leg: Decimal) -> Option<Self> {
        Some(Self {
            pv_fixed_leg,
            pv_floating_leg,
            npv: pv_floating_leg.checked_sub(pv_fixed_leg)?,
        })
    }

    pub fn pv_fixed_leg(&self) -> Decimal {
        self.pv_fixed_leg
    }

    pub fn pv_floating_leg(&self) -> Decimal {
        self.pv_floating_leg
    }

    pub fn npv(&self) -> Decimal {
        self.npv
    }

    /// Whether the floating-rate receiver is in the money.
    pub fn favors_floating_receiver(&self) -> bool {
        self.npv > Decimal::ZERO
    }
}

impl std::fmt::Display for ValuationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Swap Valuation ===")?;
        writeln!(f, "PV Fixed Leg:     {}", self.pv_fixed_leg.round_dp(2))?;
        writeln!(f, "PV Floating Leg:  {}", self.pv_floating_leg.round_dp(2))?;
        writeln!(f, "NPV:              {}", self.npv.round_dp(2))
    }
}

/// Values fixed-for-floating interest rate swaps.
///
/// Stateless: every call is a pure function of its arguments.
pub struct SwapValuator;

impl SwapValuator {
    /// Value a swap against a curve.
    ///
    /// # Algorithm
    ///
    /// 1. Validate shapes and domains (see [`SwapValuator::cash_flows`]).
    /// 2. Fixed flow per period = `notional * fixed_rate`.
    /// 3. Floating flow per period = `notional * (forward_rate + spread)`.
    /// 4. Each leg's PV = Σ flow × discount factor, accumulated in period order.
    /// 5. NPV = PV floating − PV fixed.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_valuation::core::curve::RateCurve;
    /// use swap_valuation::core::terms::{PaymentPeriod, SwapTerms};
    /// use swap_valuation::valuation::valuator::SwapValuator;
    /// use rust_decimal_macros::dec;
    ///
    /// let terms = SwapTerms::new(dec!(1_000_000), dec!(0.03), PaymentPeriod::schedule(2));
    /// let curve = RateCurve::new(vec![dec!(0.025), dec!(0.030)], vec![dec!(0.99), dec!(0.97)]);
    ///
    /// let result = SwapValuator::value(&terms, &curve).unwrap();
    /// assert_eq!(result.pv_fixed_leg(), dec!(58_800));
    /// assert_eq!(result.pv_floating_leg(), dec!(63_650));
    /// assert_eq!(result.npv(), dec!(4_850));
    /// ```
    pub fn value(terms: &SwapTerms, curve: &RateCurve) -> Result<ValuationResult, ValuationError> {
        let flows = Self::cash_flows(terms, curve)?;
        let result = Self::reduce(terms, &flows)?;
        debug!(
            "valued swap: pv fixed {}, pv floating {}, npv {}",
            result.pv_fixed_leg, result.pv_floating_leg, result.npv
        );
        Ok(result)
    }

    /// Reduce a validated schedule to leg and net present values.
    pub(crate) fn reduce(
        terms: &SwapTerms,
        flows: &SwapCashFlows,
    ) -> Result<ValuationResult, ValuationError> {
        let out_of_range = || ValuationError::out_of_range("notional", terms.notional());
        let pv_fixed_leg = flows.fixed.present_value().ok_or_else(out_of_range)?;
        let pv_floating_leg = flows.floating.present_value().ok_or_else(out_of_range)?;
        ValuationResult::from_legs(pv_fixed_leg, pv_floating_leg).ok_or_else(out_of_range)
    }

    /// Generate both legs' cash flows after validating the inputs.
    ///
    /// Fails with [`ValuationError::ShapeMismatch`] unless the curve has one
    /// forward rate and one discount factor per period, and with
    /// [`ValuationError::InvalidInput`] for a non-positive notional or a
    /// discount factor outside (0, 1]. Fixed and forward rates are not
    /// range-checked: negative rates are legitimate. A notional so large that
    /// its payments leave the `Decimal` range is also `InvalidInput`.
    pub fn cash_flows(terms: &SwapTerms, curve: &RateCurve) -> Result<SwapCashFlows, ValuationError> {
        Self::validate(terms, curve)?;
        debug!(
            "generating cash flows: {} periods, notional {}",
            terms.period_count(),
            terms.notional()
        );

        let notional = terms.notional();
        let out_of_range = || ValuationError::out_of_range("notional", notional);
        let fixed_amount = notional
            .checked_mul(terms.fixed_rate())
            .ok_or_else(out_of_range)?;
        let mut fixed = Vec::with_capacity(terms.period_count());
        let mut floating = Vec::with_capacity(terms.period_count());

        for ((period, forward), df) in terms
            .periods()
            .iter()
            .zip(curve.forward_rates())
            .zip(curve.discount_factors())
        {
            let floating_amount = forward
                .checked_add(terms.spread())
                .and_then(|rate| notional.checked_mul(rate))
                .ok_or_else(out_of_range)?;
            trace!(
                "{}: fixed {}, floating {}, df {}",
                period,
                fixed_amount,
                floating_amount,
                df
            );
            fixed.push(CashFlow::new(Leg::Fixed, *period, fixed_amount, *df));
            floating.push(CashFlow::new(Leg::Floating, *period, floating_amount, *df));
        }

        Ok(SwapCashFlows {
            fixed: LegCashFlows::new(Leg::Fixed, fixed),
            floating: LegCashFlows::new(Leg::Floating, floating),
        })
    }

    fn validate(terms: &SwapTerms, curve: &RateCurve) -> Result<(), ValuationError> {
        let periods = terms.period_count();
        let forward_rates = curve.forward_rates().len();
        let discount_factors = curve.discount_factors().len();
        if forward_rates != periods || discount_factors != periods {
            debug!(
                "rejecting curve: {} periods, {} forwards, {} discount factors",
                periods, forward_rates, discount_factors
            );
            return Err(ValuationError::ShapeMismatch {
                periods,
                forward_rates,
                discount_factors,
            });
        }

        if terms.notional() <= Decimal::ZERO {
            debug!("rejecting notional {}", terms.notional());
            return Err(ValuationError::invalid(
                "notional",
                terms.notional(),
                "must be positive",
            ));
        }

        if let Some((i, df)) = curve
            .discount_factors()
            .iter()
            .enumerate()
            .find(|(_, df)| **df <= Decimal::ZERO || **df > Decimal::ONE)
        {
            debug!("rejecting discount factor {} at period index {}", df, i);
            return Err(ValuationError::invalid(
                format!("discount_factors[{}]", i),
                *df,
                "must lie in (0, 1]",
            ));
        }

        Ok(())
    }
}
