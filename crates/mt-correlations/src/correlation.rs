//! Sherwood number correlations.
//!
//! Each geometry maps to one closed-form power law of the shape
//! Sh = a + c * Re^m * Sc^n. Keeping the coefficients in a table makes a new
//! geometry a one-row addition.

use crate::Geometry;
use mt_core::Real;

/// Coefficients of Sh = additive + coefficient * Re^re_exponent * Sc^sc_exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawCorrelation {
    pub additive: Real,
    pub coefficient: Real,
    pub re_exponent: Real,
    pub sc_exponent: Real,
}

impl PowerLawCorrelation {
    /// Evaluate the correlation. Caller guarantees Re > 0 and Sc > 0.
    pub fn sherwood(&self, re: Real, sc: Real) -> Real {
        self.additive + self.coefficient * re.powf(self.re_exponent) * sc.powf(self.sc_exponent)
    }

    /// Short formula rendering for catalog listings.
    pub fn describe(&self) -> String {
        if self.additive == 0.0 {
            format!(
                "Sh = {} * Re^{} * Sc^(1/3)",
                self.coefficient, self.re_exponent
            )
        } else {
            format!(
                "Sh = {} + {} * Re^{} * Sc^(1/3)",
                self.additive, self.coefficient, self.re_exponent
            )
        }
    }
}

const SC_CUBE_ROOT: Real = 1.0 / 3.0;

impl Geometry {
    /// Correlation row for this geometry.
    pub fn correlation(&self) -> PowerLawCorrelation {
        let (additive, coefficient, re_exponent) = match self {
            Geometry::FlatPlate => (0.0, 0.037, 0.8),
            Geometry::Tube => (0.0, 0.023, 0.8),
            // Ranz-Marshall, shared by sphere and droplet
            Geometry::Sphere | Geometry::Droplet => (2.0, 0.6, 0.5),
            Geometry::PackedBed => (0.0, 1.15, 0.6),
        };
        PowerLawCorrelation {
            additive,
            coefficient,
            re_exponent,
            sc_exponent: SC_CUBE_ROOT,
        }
    }
}

/// Sherwood number for a known geometry. Deterministic, no side effects.
pub fn compute_sherwood(geometry: Geometry, re: Real, sc: Real) -> Real {
    geometry.correlation().sherwood(re, sc)
}

/// Sherwood number for a free-form geometry tag.
///
/// An unrecognized tag yields 0.0 rather than an error; callers that want a
/// diagnostic should resolve the tag with [`Geometry::from_tag`] first.
pub fn sherwood_for_tag(tag: &str, re: Real, sc: Real) -> Real {
    match Geometry::from_tag(tag) {
        Some(geometry) => compute_sherwood(geometry, re, sc),
        None => 0.0,
    }
}
