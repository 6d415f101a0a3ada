//! Geometry catalog for the correlation table.

use std::fmt;

/// Flow geometries with an established Sherwood correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Flat plate in parallel flow
    FlatPlate,
    /// Fully developed flow inside a tube
    Tube,
    /// Single solid sphere (Ranz-Marshall)
    Sphere,
    /// Liquid droplet (same Ranz-Marshall form as the sphere)
    Droplet,
    /// Packed bed of particles
    PackedBed,
}

impl Geometry {
    pub const ALL: [Geometry; 5] = [
        Geometry::FlatPlate,
        Geometry::Tube,
        Geometry::Sphere,
        Geometry::Droplet,
        Geometry::PackedBed,
    ];

    /// Canonical tag, used in scenario files and on the CLI.
    pub fn tag(&self) -> &'static str {
        match self {
            Geometry::FlatPlate => "flat-plate",
            Geometry::Tube => "tube",
            Geometry::Sphere => "sphere",
            Geometry::Droplet => "droplet",
            Geometry::PackedBed => "packed-bed",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Geometry::FlatPlate => "Flat plate",
            Geometry::Tube => "Tube",
            Geometry::Sphere => "Sphere",
            Geometry::Droplet => "Droplet",
            Geometry::PackedBed => "Packed bed",
        }
    }

    /// Resolve a tag to a geometry.
    ///
    /// Accepts the canonical tags plus the legacy labels used by the first
    /// version of the simulator ("placa", "tubo", "esfera", "gota",
    /// "lecho empacado"). Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Geometry> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flat-plate" | "flat_plate" | "plate" | "placa" => Some(Geometry::FlatPlate),
            "tube" | "tubo" => Some(Geometry::Tube),
            "sphere" | "esfera" => Some(Geometry::Sphere),
            "droplet" | "gota" => Some(Geometry::Droplet),
            "packed-bed" | "packed_bed" | "lecho empacado" => Some(Geometry::PackedBed),
            _ => None,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
