//! Reference SOFR swap valuation example.
//!
//! Values a 5-year, $100M pay-fixed 3% swap against SOFR forwards with a
//! 50bp floating spread. Set `RUST_LOG=debug` (or `trace`) to see the
//! valuation log.

use rust_decimal_macros::dec;
use swap_valuation::core::curve::RateCurve;
use swap_valuation::core::terms::{PaymentPeriod, SwapTerms};
use swap_valuation::valuation::analysis::SwapAnalysis;
use swap_valuation::valuation::valuator::SwapValuator;

fn main() {
    env_logger::init();

    println!("╔══════════════════════════════════════════╗");
    println!("║  swap-valuation: Reference SOFR Swap     ║");
    println!("╚══════════════════════════════════════════╝\n");

    let terms = SwapTerms::new(dec!(100_000_000), dec!(0.03), PaymentPeriod::schedule(5));
    let curve = RateCurve::new(
        vec![dec!(0.025), dec!(0.027), dec!(0.03), dec!(0.032), dec!(0.034)],
        vec![dec!(0.99), dec!(0.97), dec!(0.94), dec!(0.91), dec!(0.88)],
    );

    println!("━━━ Cash Flows ━━━\n");
    let flows = match SwapValuator::cash_flows(&terms, &curve) {
        Ok(flows) => flows,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("  {:<6} {:>14} {:>14} {:>8}", "Period", "Fixed", "Floating", "DF");
    for (fixed, floating) in flows.fixed.flows().iter().zip(flows.floating.flows()) {
        println!(
            "  {:<6} {:>14} {:>14} {:>8}",
            fixed.period, fixed.amount, floating.amount, fixed.discount_factor
        );
    }
    println!();

    match SwapAnalysis::compute(&terms, &curve) {
        Ok(analysis) => println!("{}", analysis),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
