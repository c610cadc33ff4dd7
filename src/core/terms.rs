use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spread added to the floating reference rate when none is given (50bp).
pub const DEFAULT_SPREAD: Decimal = dec!(0.005);

/// One accrual/payment period of a swap.
///
/// Periods are ordinal: the `n`-th period's cash flows are discounted with
/// the `n`-th discount factor of the curve. The number carried here is a
/// label for reporting, it does not drive any arithmetic.
///
/// # Examples
///
/// ```
/// use swap_valuation::core::terms::PaymentPeriod;
///
/// let periods = PaymentPeriod::schedule(3);
/// assert_eq!(periods.len(), 3);
/// assert_eq!(periods[0].to_string(), "P1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentPeriod(u32);

impl PaymentPeriod {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Periods `1..=count`, in payment order.
    pub fn schedule(count: u32) -> Vec<Self> {
        (1..=count).map(Self).collect()
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PaymentPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("P{}", self.0))
    }
}

impl From<u32> for PaymentPeriod {
    fn from(n: u32) -> Self {
        Self::new(n)
    }
}

fn default_spread() -> Decimal {
    DEFAULT_SPREAD
}

/// Economic terms of a fixed-for-floating interest rate swap.
///
/// The fixed leg pays `notional * fixed_rate` every period; the floating leg
/// pays `notional * (forward_rate + spread)`. Rates are decimals (0.03 for 3%)
/// and are applied per period as given: the caller is responsible for making
/// them consistent with the period length.
///
/// Terms are immutable once created. Domain checks (positive notional) are
/// made by the valuator, which reports them as errors.
///
/// # Examples
///
/// ```
/// use swap_valuation::core::terms::{PaymentPeriod, SwapTerms, DEFAULT_SPREAD};
/// use rust_decimal_macros::dec;
///
/// let terms = SwapTerms::new(dec!(100_000_000), dec!(0.03), PaymentPeriod::schedule(5));
///
/// assert_eq!(terms.spread(), DEFAULT_SPREAD);
/// assert_eq!(terms.period_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapTerms {
    /// Contract principal. Never exchanged.
    notional: Decimal,
    /// Fixed coupon rate.
    fixed_rate: Decimal,
    /// Additive adjustment to the floating reference rate.
    #[serde(default = "default_spread")]
    spread: Decimal,
    /// Accrual/payment periods, in payment order.
    periods: Vec<PaymentPeriod>,
}

impl SwapTerms {
    /// Create swap terms with the default floating spread.
    pub fn new(notional: Decimal, fixed_rate: Decimal, periods: Vec<PaymentPeriod>) -> Self {
        Self {
            notional,
            fixed_rate,
            spread: DEFAULT_SPREAD,
            periods,
        }
    }

    /// Override the floating spread.
    pub fn with_spread(mut self, spread: Decimal) -> Self {
        self.spread = spread;
        self
    }

    /// Same terms on a different notional.
    pub fn with_notional(mut self, notional: Decimal) -> Self {
        self.notional = notional;
        self
    }

    // --- Accessors ---

    pub fn notional(&self) -> Decimal {
        self.notional
    }

    pub fn fixed_rate(&self) -> Decimal {
        self.fixed_rate
    }

    pub fn spread(&self) -> Decimal {
        self.spread
    }

    pub fn periods(&self) -> &[PaymentPeriod] {
        &self.periods
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }
}
