//! Forward-rate shift scenarios on a randomly generated curve.
//!
//! Demonstrates how NPV moves as the whole forward curve shifts while
//! discounting is held fixed.

use rust_decimal_macros::dec;
use swap_valuation::simulation::curve_generator::{
    generate_random_curve, terms_for_curve, CurveScenarioConfig,
};
use swap_valuation::simulation::rate_shift::forward_shift_scenarios;

fn main() {
    env_logger::init();

    let config = CurveScenarioConfig {
        periods: 10,
        base_forward: 0.035,
        ..Default::default()
    };
    let curve = generate_random_curve(&config);
    let terms = terms_for_curve(dec!(250_000_000), dec!(0.0375), &curve);

    println!("━━━ Generated Curve ━━━\n");
    for (i, (fwd, df)) in curve
        .forward_rates()
        .iter()
        .zip(curve.discount_factors())
        .enumerate()
    {
        println!("  P{:<4} forward {:>10}  df {:>10}", i + 1, fwd, df);
    }

    println!("\n━━━ Parallel Forward Shifts ━━━\n");
    let shifts = [-100, -50, -25, -1, 0, 1, 25, 50, 100];
    match forward_shift_scenarios(&terms, &curve, &shifts) {
        Ok(results) => {
            for r in results {
                println!(
                    "  {:>+5}bp  npv {:>18}  impact {:>18}",
                    r.shift_bps,
                    r.shifted_npv.round_dp(2),
                    r.impact.round_dp(2)
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
