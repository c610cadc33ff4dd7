use crate::core::terms::PaymentPeriod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a swap's cash-flow stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Fixed,
    Floating,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::Fixed => write!(f, "fixed"),
            Leg::Floating => write!(f, "floating"),
        }
    }
}

/// A single period's payment on one leg, with its discount factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub leg: Leg,
    pub period: PaymentPeriod,
    /// Undiscounted payment.
    pub amount: Decimal,
    pub discount_factor: Decimal,
}

impl CashFlow {
    pub fn new(leg: Leg, period: PaymentPeriod, amount: Decimal, discount_factor: Decimal) -> Self {
        Self {
            leg,
            period,
            amount,
            discount_factor,
        }
    }

    /// Discounted payment, `None` if it leaves the `Decimal` range.
    pub fn present_value(&self) -> Option<Decimal> {
        self.amount.checked_mul(self.discount_factor)
    }
}

/// The cash flows of one leg, in payment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegCashFlows {
    leg: Leg,
    flows: Vec<CashFlow>,
}

impl LegCashFlows {
    pub fn new(leg: Leg, flows: Vec<CashFlow>) -> Self {
        Self { leg, flows }
    }

    pub fn leg(&self) -> Leg {
        self.leg
    }

    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Sum of undiscounted amounts, `None` if it leaves the `Decimal` range.
    pub fn total_amount(&self) -> Option<Decimal> {
        self.flows
            .iter()
            .try_fold(Decimal::ZERO, |acc, cf| acc.checked_add(cf.amount))
    }

    /// Present value of the leg, `None` if it leaves the `Decimal` range.
    ///
    /// Accumulates strictly in payment order so that results are reproducible
    /// to the last digit.
    pub fn present_value(&self) -> Option<Decimal> {
        self.flows
            .iter()
            .try_fold(Decimal::ZERO, |acc, cf| acc.checked_add(cf.present_value()?))
    }
}

/// Both legs of a swap, period-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapCashFlows {
    pub fixed: LegCashFlows,
    pub floating: LegCashFlows,
}

impl SwapCashFlows {
    pub fn leg(&self, leg: Leg) -> &LegCashFlows {
        match leg {
            Leg::Fixed => &self.fixed,
            Leg::Floating => &self.floating,
        }
    }

    /// Floating minus fixed amount for each period (receiver-of-floating view).
    /// `None` if any difference leaves the `Decimal` range.
    pub fn net_amounts(&self) -> Option<Vec<(PaymentPeriod, Decimal)>> {
        self.fixed
            .flows()
            .iter()
            .zip(self.floating.flows())
            .map(|(fixed, floating)| {
                floating
                    .amount
                    .checked_sub(fixed.amount)
                    .map(|net| (fixed.period, net))
            })
            .collect()
    }
}
