//! Simulation input record.

use crate::{CorrelationError, CorrelationResult, Geometry};
use mt_core::{Real, is_valid_positive};

/// One snapshot of the user controls. Constructed fresh for every
/// recomputation; carries no identity beyond its values.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub geometry: Geometry,
    /// Reynolds number, UI-constrained to [100, 10000]
    pub reynolds: Real,
    /// Schmidt number, UI-constrained to [0.6, 3000]
    pub schmidt: Real,
    /// Whether the diffusivity entry participates at all
    pub diffusivity_enabled: bool,
    /// Binary diffusion coefficient DAB [m^2/s], absent when the box is empty
    pub dab_m2_s: Option<Real>,
}

impl SimulationInput {
    pub fn new(
        geometry: Geometry,
        reynolds: Real,
        schmidt: Real,
        diffusivity_enabled: bool,
        dab_m2_s: Option<Real>,
    ) -> Self {
        Self {
            geometry,
            reynolds,
            schmidt,
            diffusivity_enabled,
            dab_m2_s,
        }
    }

    /// As [`new`](Self::new), but resolving a free-form geometry tag with a
    /// descriptive error for unknown tags.
    pub fn from_tag(
        tag: &str,
        reynolds: Real,
        schmidt: Real,
        diffusivity_enabled: bool,
        dab_m2_s: Option<Real>,
    ) -> CorrelationResult<Self> {
        let geometry = Geometry::from_tag(tag).ok_or_else(|| CorrelationError::UnknownGeometry {
            tag: tag.to_string(),
            expected: Geometry::ALL.map(|g| g.tag()).join(", "),
        })?;
        Ok(Self::new(
            geometry,
            reynolds,
            schmidt,
            diffusivity_enabled,
            dab_m2_s,
        ))
    }

    /// The diffusivity to compute with, if enabled and usable.
    ///
    /// Returns `None` when the flag is off or the value is absent,
    /// non-finite, or not strictly positive, which is exactly the engine's
    /// warning path.
    pub fn usable_diffusivity(&self) -> Option<Real> {
        if self.diffusivity_enabled && is_valid_positive(self.dab_m2_s) {
            self.dab_m2_s
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_diffusivity_requires_flag_and_positive_value() {
        let base = SimulationInput::new(Geometry::Sphere, 1000.0, 500.0, true, Some(1e-9));
        assert_eq!(base.usable_diffusivity(), Some(1e-9));

        let disabled = SimulationInput { diffusivity_enabled: false, ..base.clone() };
        assert_eq!(disabled.usable_diffusivity(), None);

        let missing = SimulationInput { dab_m2_s: None, ..base.clone() };
        assert_eq!(missing.usable_diffusivity(), None);

        let zero = SimulationInput { dab_m2_s: Some(0.0), ..base.clone() };
        assert_eq!(zero.usable_diffusivity(), None);

        let nan = SimulationInput { dab_m2_s: Some(f64::NAN), ..base };
        assert_eq!(nan.usable_diffusivity(), None);
    }

    #[test]
    fn from_tag_rejects_unknown_geometry() {
        let err = SimulationInput::from_tag("annulus", 1000.0, 500.0, true, Some(1e-9))
            .unwrap_err();
        assert!(matches!(err, CorrelationError::UnknownGeometry { .. }));
    }

    #[test]
    fn from_tag_accepts_legacy_labels() {
        let input = SimulationInput::from_tag("esfera", 1000.0, 500.0, true, Some(1e-9)).unwrap();
        assert_eq!(input.geometry, Geometry::Sphere);
    }
}
