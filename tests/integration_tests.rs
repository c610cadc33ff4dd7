use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swap_valuation::core::cashflow::Leg;
use swap_valuation::core::curve::RateCurve;
use swap_valuation::core::request::{RequestError, ValuationRequest};
use swap_valuation::core::terms::{PaymentPeriod, SwapTerms};
use swap_valuation::simulation::curve_generator::{
    generate_random_curve, terms_for_curve, CurveScenarioConfig,
};
use swap_valuation::simulation::rate_shift::forward_shift_scenarios;
use swap_valuation::valuation::analysis::SwapAnalysis;
use swap_valuation::valuation::error::ValuationError;
use swap_valuation::valuation::valuator::SwapValuator;

fn sofr_swap() -> (SwapTerms, RateCurve) {
    let terms = SwapTerms::new(dec!(100_000_000), dec!(0.03), PaymentPeriod::schedule(5));
    let curve = RateCurve::new(
        vec![dec!(0.025), dec!(0.027), dec!(0.03), dec!(0.032), dec!(0.034)],
        vec![dec!(0.99), dec!(0.97), dec!(0.94), dec!(0.91), dec!(0.88)],
    );
    (terms, curve)
}

/// Full pipeline: terms + curve → cash flows → valuation → analytics → shifts.
#[test]
fn full_pipeline_sofr_scenario() {
    let (terms, curve) = sofr_swap();

    // Cash flows
    let flows = SwapValuator::cash_flows(&terms, &curve).unwrap();
    assert_eq!(flows.fixed.len(), 5);
    assert_eq!(flows.floating.len(), 5);
    assert_eq!(flows.fixed.total_amount(), Some(dec!(15_000_000)));
    assert_eq!(flows.floating.total_amount(), Some(dec!(17_300_000)));
    assert!(flows.fixed.flows().iter().all(|cf| cf.leg == Leg::Fixed));
    assert_eq!(flows.floating.flows()[4].period, PaymentPeriod::new(5));

    // Valuation
    let result = SwapValuator::value(&terms, &curve).unwrap();
    assert_eq!(result.pv_fixed_leg(), dec!(14_070_000.00));
    assert_eq!(result.pv_floating_leg(), dec!(16_163_000.00));
    assert_eq!(result.npv(), dec!(2_093_000.00));
    assert_eq!(Some(result.pv_fixed_leg()), flows.fixed.present_value());
    assert_eq!(Some(result.pv_floating_leg()), flows.floating.present_value());

    // Analytics
    let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
    assert_eq!(analysis.valuation, result);
    assert_eq!(analysis.net_cash_flows.len(), 5);
    assert_eq!(analysis.net_cash_flows[0], (PaymentPeriod::new(1), Decimal::ZERO));
    assert_eq!(analysis.net_cash_flows[4], (PaymentPeriod::new(5), dec!(900_000)));
    assert!(analysis.par_rate.unwrap() > terms.fixed_rate());

    // Shift scenarios
    let shifts = forward_shift_scenarios(&terms, &curve, &[-50, 50]).unwrap();
    assert_eq!(shifts[0].impact, -shifts[1].impact);
    assert_eq!(shifts[1].impact, analysis.forward_pv01 * Decimal::from(50));
}

#[test]
fn json_request_to_json_result() {
    let json = r#"{
        "terms": {
            "notional": "100000000",
            "fixed_rate": "0.03",
            "spread": "0.005",
            "periods": [1, 2, 3, 4, 5]
        },
        "curve": {
            "forward_rates": ["0.025", "0.027", "0.03", "0.032", "0.034"],
            "discount_factors": ["0.99", "0.97", "0.94", "0.91", "0.88"]
        }
    }"#;

    let request = ValuationRequest::from_json(json).unwrap();
    let (terms, curve) = sofr_swap();
    assert_eq!(request, ValuationRequest::new(terms, curve));

    let output: serde_json::Value =
        serde_json::from_str(&ValuationRequest::evaluate_json(json).unwrap()).unwrap();
    let npv: Decimal = output["npv"].as_str().unwrap().parse().unwrap();
    assert_eq!(npv, dec!(2_093_000));

    let analysis = request.analyze().unwrap();
    assert_eq!(analysis.annuity, dec!(469_000_000));
}

#[test]
fn request_with_bad_discount_factor_is_rejected() {
    let json = r#"{
        "terms": { "notional": "1000", "fixed_rate": "0.03", "periods": [1, 2] },
        "curve": { "forward_rates": ["0.03", "0.03"], "discount_factors": ["0.99", "1.01"] }
    }"#;

    match ValuationRequest::evaluate_json(json) {
        Err(RequestError::Valuation(ValuationError::InvalidInput { field, .. })) => {
            assert_eq!(field, "discount_factors[1]");
        }
        other => panic!("expected invalid discount factor, got {:?}", other),
    }
}

#[test]
fn error_messages_are_descriptive() {
    let (terms, _) = sofr_swap();
    let curve = RateCurve::new(vec![dec!(0.03); 5], vec![dec!(0.9); 3]);
    let err = SwapValuator::value(&terms, &curve).unwrap_err();
    assert_eq!(
        err.to_string(),
        "shape mismatch: 5 periods, 5 forward rates, 3 discount factors"
    );

    let err = SwapValuator::value(&terms.with_notional(dec!(-1000)), &sofr_swap().1).unwrap_err();
    assert_eq!(err.to_string(), "invalid notional -1000: must be positive");
}

#[test]
fn random_curves_value_consistently() {
    let config = CurveScenarioConfig {
        periods: 30,
        ..Default::default()
    };

    for _ in 0..20 {
        let curve = generate_random_curve(&config);
        let terms = terms_for_curve(dec!(25_000_000), dec!(0.031), &curve);
        let result = SwapValuator::value(&terms, &curve).unwrap();
        assert_eq!(result.npv(), result.pv_floating_leg() - result.pv_fixed_leg());

        let analysis = SwapAnalysis::compute(&terms, &curve).unwrap();
        assert!(analysis.annuity > Decimal::ZERO);
        assert!(analysis.annuity <= terms.notional() * Decimal::from(30));
    }
}

#[test]
fn concurrent_valuations_agree() {
    let (terms, curve) = sofr_swap();
    let expected = SwapValuator::value(&terms, &curve).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let terms = terms.clone();
            let curve = curve.clone();
            std::thread::spawn(move || SwapValuator::value(&terms, &curve).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
