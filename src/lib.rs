//! # swap-valuation
//!
//! Fixed-for-floating interest rate swap valuation.
//!
//! Given a swap's economic terms and a curve of forward reference rates and
//! discount factors, this crate computes the present value of each leg and
//! the net present value of the swap.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: swap terms, rate curve, cash flows, requests
//! - **valuation** — The swap valuator and derived analytics
//! - **simulation** — Random curve generation and rate shift scenarios

pub mod core;
pub mod simulation;
pub mod valuation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::cashflow::{CashFlow, Leg, LegCashFlows, SwapCashFlows};
    pub use crate::core::curve::RateCurve;
    pub use crate::core::request::{RequestError, ValuationRequest};
    pub use crate::core::terms::{PaymentPeriod, SwapTerms, DEFAULT_SPREAD};
    pub use crate::valuation::analysis::SwapAnalysis;
    pub use crate::valuation::error::ValuationError;
    pub use crate::valuation::valuator::{SwapValuator, ValuationResult};
}
