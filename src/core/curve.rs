use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Forward reference rates and discount factors, aligned by period index.
///
/// Entry `i` of each sequence belongs to the `i`-th payment period of the
/// swap being valued. Discount factors are expected in (0, 1] and
/// non-increasing; the valuator rejects values outside (0, 1].
///
/// The curve is an input prepared upstream (bootstrapped from an OIS curve,
/// for example). This type only carries it.
///
/// # Examples
///
/// ```
/// use swap_valuation::core::curve::RateCurve;
/// use rust_decimal_macros::dec;
///
/// let curve = RateCurve::new(
///     vec![dec!(0.025), dec!(0.027)],
///     vec![dec!(0.99), dec!(0.97)],
/// );
///
/// assert!(curve.is_aligned());
/// assert_eq!(curve.discount_factors()[1], dec!(0.97));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCurve {
    /// Floating reference rate observed or projected for each period.
    forward_rates: Vec<Decimal>,
    /// Present value of one unit paid at each period's payment date.
    discount_factors: Vec<Decimal>,
}

impl RateCurve {
    pub fn new(forward_rates: Vec<Decimal>, discount_factors: Vec<Decimal>) -> Self {
        Self {
            forward_rates,
            discount_factors,
        }
    }

    /// Build a curve from `(forward_rate, discount_factor)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (Decimal, Decimal)>) -> Self {
        let (forward_rates, discount_factors) = points.into_iter().unzip();
        Self {
            forward_rates,
            discount_factors,
        }
    }

    pub fn forward_rates(&self) -> &[Decimal] {
        &self.forward_rates
    }

    pub fn discount_factors(&self) -> &[Decimal] {
        &self.discount_factors
    }

    /// Whether both sequences have the same length.
    pub fn is_aligned(&self) -> bool {
        self.forward_rates.len() == self.discount_factors.len()
    }

    /// Whether discount factors never increase from one period to the next.
    pub fn is_monotone(&self) -> bool {
        self.discount_factors.windows(2).all(|w| w[1] <= w[0])
    }

    /// A copy of this curve with every forward rate moved by `shift`.
    /// Discount factors are left untouched. `None` if a shifted rate leaves
    /// the `Decimal` range.
    pub fn with_forward_shift(&self, shift: Decimal) -> Option<Self> {
        let forward_rates = self
            .forward_rates
            .iter()
            .map(|r| r.checked_add(shift))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            forward_rates,
            discount_factors: self.discount_factors.clone(),
        })
    }
}
