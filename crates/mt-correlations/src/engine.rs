//! The correlation engine: one stateless evaluation per input change.

use crate::interpretation::{Interpretation, RuleContext, interpret};
use crate::{SimulationInput, compute_sherwood};
use mt_core::units::constants::CHARACTERISTIC_LENGTH_M;
use mt_core::{Length, Real, Velocity, m, mps};
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

/// Explicit engine configuration, passed by the caller instead of living in
/// any global application object.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Characteristic length L in kc = Sh * DAB / L.
    pub characteristic_length: Length,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            characteristic_length: m(CHARACTERISTIC_LENGTH_M),
        }
    }
}

/// Outcome of one evaluation. Ephemeral: consumed by the display step and
/// discarded on the next recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Sherwood number, dimensionless
    pub sherwood: Real,
    /// Convective mass-transfer coefficient
    pub kc: Velocity,
    pub interpretation: Interpretation,
}

impl SimulationResult {
    pub fn kc_m_s(&self) -> Real {
        self.kc.get::<meter_per_second>()
    }

    fn zeroed(interpretation: Interpretation) -> Self {
        Self {
            sherwood: 0.0,
            kc: mps(0.0),
            interpretation,
        }
    }
}

/// Evaluate one input snapshot.
///
/// Without a usable diffusivity (flag off, or DAB absent/non-finite/<= 0)
/// the result is Sh = 0, kc = 0 and the fixed warning; no regime reasoning
/// runs. Otherwise Sh, kc and the three-statement report all derive from the
/// same snapshot.
pub fn compute_result(config: &EngineConfig, input: &SimulationInput) -> SimulationResult {
    let Some(dab_m2_s) = input.usable_diffusivity() else {
        return SimulationResult::zeroed(Interpretation::MissingDiffusivity);
    };

    let sherwood = compute_sherwood(input.geometry, input.reynolds, input.schmidt);
    let length_m = config.characteristic_length.get::<meter>();
    let kc = mps(sherwood * dab_m2_s / length_m);

    let statements = interpret(&RuleContext {
        geometry: input.geometry,
        reynolds: input.reynolds,
        schmidt: input.schmidt,
        sherwood,
    });

    SimulationResult {
        sherwood,
        kc,
        interpretation: Interpretation::Report(statements),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;

    fn sphere_input() -> SimulationInput {
        SimulationInput::new(Geometry::Sphere, 1000.0, 500.0, true, Some(1e-9))
    }

    #[test]
    fn kc_follows_sh_dab_over_length() {
        let result = compute_result(&EngineConfig::default(), &sphere_input());
        let expected_sh = 2.0 + 0.6 * 1000.0_f64.powf(0.5) * 500.0_f64.powf(1.0 / 3.0);
        assert!((result.sherwood - expected_sh).abs() < 1e-9);
        assert!((result.kc_m_s() - expected_sh * 1e-9).abs() < 1e-18);
        // Sanity against the reference point: Sh = 152.59, kc = 1.53e-7
        assert!((result.kc_m_s() - 1.53e-7).abs() < 1e-9);
    }

    #[test]
    fn characteristic_length_scales_kc() {
        let config = EngineConfig {
            characteristic_length: m(2.0),
        };
        let halved = compute_result(&config, &sphere_input());
        let baseline = compute_result(&EngineConfig::default(), &sphere_input());
        assert!((halved.kc_m_s() - baseline.kc_m_s() / 2.0).abs() < 1e-18);
    }

    #[test]
    fn disabled_diffusivity_short_circuits() {
        let mut input = sphere_input();
        input.diffusivity_enabled = false;
        let result = compute_result(&EngineConfig::default(), &input);
        assert_eq!(result.sherwood, 0.0);
        assert_eq!(result.kc_m_s(), 0.0);
        assert_eq!(result.interpretation, Interpretation::MissingDiffusivity);
    }

    #[test]
    fn missing_zero_or_negative_dab_short_circuits() {
        for dab in [None, Some(0.0), Some(-1e-9), Some(f64::NAN)] {
            let mut input = sphere_input();
            input.dab_m2_s = dab;
            let result = compute_result(&EngineConfig::default(), &input);
            assert_eq!(result.sherwood, 0.0, "dab={dab:?}");
            assert_eq!(result.interpretation, Interpretation::MissingDiffusivity);
        }
    }

    #[test]
    fn report_has_three_ordered_statements() {
        let result = compute_result(&EngineConfig::default(), &sphere_input());
        match result.interpretation {
            Interpretation::Report(ref statements) => assert_eq!(statements.len(), 3),
            Interpretation::MissingDiffusivity => panic!("expected a report"),
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let input = sphere_input();
        let config = EngineConfig::default();
        let first = compute_result(&config, &input);
        let second = compute_result(&config, &input);
        assert_eq!(first, second);
    }
}
