use crate::core::curve::RateCurve;
use crate::core::terms::{PaymentPeriod, SwapTerms};
use log::warn;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Smallest discount factor the generator will emit.
const MIN_DISCOUNT_FACTOR: Decimal = dec!(0.000001);

/// Configuration for generating a random, well-formed rate curve.
#[derive(Debug, Clone)]
pub struct CurveScenarioConfig {
    /// Number of periods on the curve.
    pub periods: u32,
    /// Forward rate of the first period.
    pub base_forward: f64,
    /// Largest move in the forward rate from one period to the next, either way.
    pub max_forward_step: f64,
    /// Largest fractional drop in the discount factor per period.
    pub max_discount_decay: f64,
}

impl Default for CurveScenarioConfig {
    fn default() -> Self {
        Self {
            periods: 10,
            base_forward: 0.03,
            max_forward_step: 0.002,
            max_discount_decay: 0.06,
        }
    }
}

fn to_decimal(value: f64, dp: u32) -> Decimal {
    match Decimal::from_f64_retain(value) {
        Some(d) => d.round_dp(dp),
        None => {
            warn!("{} is not representable as a decimal, using 0", value);
            Decimal::ZERO
        }
    }
}

/// NaN and infinite settings disable the corresponding move.
fn finite_or_zero(name: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("curve scenario {} is {}, using 0", name, value);
        0.0
    }
}

/// Generate a random curve for testing and benchmarking.
///
/// Forward rates follow a bounded random walk from `base_forward` (rounded to
/// 1/100 bp). Discount factors start at or below 1 and decay geometrically,
/// so they stay in (0, 1] and never increase.
pub fn generate_random_curve(config: &CurveScenarioConfig) -> RateCurve {
    let mut rng = rand::thread_rng();
    let max_forward_step = finite_or_zero("max_forward_step", config.max_forward_step);
    let max_discount_decay = finite_or_zero("max_discount_decay", config.max_discount_decay);
    let mut forward = finite_or_zero("base_forward", config.base_forward);
    let mut discount = 1.0_f64;
    let mut points = Vec::with_capacity(config.periods as usize);
    let mut last_df = Decimal::ONE;

    for _ in 0..config.periods {
        if max_forward_step > 0.0 {
            forward += rng.gen_range(-max_forward_step..=max_forward_step);
        }
        if max_discount_decay > 0.0 {
            discount *= 1.0 - rng.gen_range(0.0..max_discount_decay.min(0.99));
        }

        // Rounding can nudge a factor above its predecessor; clamp to keep the curve monotone.
        let df = to_decimal(discount, 6)
            .clamp(MIN_DISCOUNT_FACTOR, Decimal::ONE)
            .min(last_df);
        last_df = df;
        points.push((to_decimal(forward, 6), df));
    }

    RateCurve::from_points(points)
}

/// Swap terms matching a generated curve's length.
pub fn terms_for_curve(notional: Decimal, fixed_rate: Decimal, curve: &RateCurve) -> SwapTerms {
    let count = curve.discount_factors().len() as u32;
    SwapTerms::new(notional, fixed_rate, PaymentPeriod::schedule(count))
}
