//! Engine contract tests over the UI input domain.

use mt_core::{Tolerances, nearly_equal};
use mt_correlations::{
    EngineConfig, Geometry, Interpretation, SimulationInput, compute_result, compute_sherwood,
};
use proptest::prelude::*;

fn expected_sherwood(geometry: Geometry, re: f64, sc: f64) -> f64 {
    let sc_third = sc.powf(1.0 / 3.0);
    match geometry {
        Geometry::FlatPlate => 0.037 * re.powf(0.8) * sc_third,
        Geometry::Tube => 0.023 * re.powf(0.8) * sc_third,
        Geometry::Sphere | Geometry::Droplet => 2.0 + 0.6 * re.powf(0.5) * sc_third,
        Geometry::PackedBed => 1.15 * re.powf(0.6) * sc_third,
    }
}

fn any_geometry() -> impl Strategy<Value = Geometry> {
    prop::sample::select(Geometry::ALL.to_vec())
}

proptest! {
    // Re and Sc ranges match the UI sliders.
    #[test]
    fn sherwood_matches_the_correlation_table(
        geometry in any_geometry(),
        re in 100.0_f64..10_000.0,
        sc in 0.6_f64..3_000.0,
    ) {
        let sh = compute_sherwood(geometry, re, sc);
        let expected = expected_sherwood(geometry, re, sc);
        prop_assert!(nearly_equal(sh, expected, Tolerances::default()));
        prop_assert!(sh >= 0.0);
    }

    #[test]
    fn evaluation_is_deterministic(
        geometry in any_geometry(),
        re in 100.0_f64..10_000.0,
        sc in 0.6_f64..3_000.0,
        dab in 1e-12_f64..1e-4,
    ) {
        let config = EngineConfig::default();
        let input = SimulationInput::new(geometry, re, sc, true, Some(dab));
        let first = compute_result(&config, &input);
        let second = compute_result(&config, &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn enabled_inputs_always_produce_a_full_report(
        geometry in any_geometry(),
        re in 100.0_f64..10_000.0,
        sc in 0.6_f64..3_000.0,
    ) {
        let input = SimulationInput::new(geometry, re, sc, true, Some(1e-9));
        let result = compute_result(&EngineConfig::default(), &input);
        match result.interpretation {
            Interpretation::Report(ref statements) => prop_assert_eq!(statements.len(), 3),
            Interpretation::MissingDiffusivity => prop_assert!(false, "unexpected warning"),
        }
        prop_assert!(result.sherwood > 0.0);
        prop_assert!(result.kc_m_s() > 0.0);
    }

    #[test]
    fn disabled_diffusivity_ignores_all_other_inputs(
        geometry in any_geometry(),
        re in 100.0_f64..10_000.0,
        sc in 0.6_f64..3_000.0,
        dab in prop::option::of(-1e-3_f64..1e-3),
    ) {
        let input = SimulationInput::new(geometry, re, sc, false, dab);
        let result = compute_result(&EngineConfig::default(), &input);
        prop_assert_eq!(result.sherwood, 0.0);
        prop_assert_eq!(result.kc_m_s(), 0.0);
        prop_assert_eq!(result.interpretation, Interpretation::MissingDiffusivity);
    }
}
