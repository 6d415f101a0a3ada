//! mt-correlations: convective mass-transfer correlations for masstran.
//!
//! Provides:
//! - Geometry catalog (flat plate, tube, sphere, droplet, packed bed)
//! - Power-law Sherwood correlations as a per-geometry lookup table
//! - Simulation input/result value records
//! - Qualitative interpretation rules (flow, diffusion, combined regime)
//!
//! # Architecture
//!
//! The engine is a stateless pure evaluation: a `SimulationInput` plus an
//! explicit `EngineConfig` map to a `SimulationResult`, re-run in full on
//! every input change. Correlations live in a data table
//! (`Geometry::correlation`) and the interpretation is an ordered list of
//! independent rules, so adding a geometry or a regime statement is a data
//! change rather than a code change.
//!
//! # Example
//!
//! ```
//! use mt_correlations::{EngineConfig, Geometry, SimulationInput, compute_result};
//!
//! let input = SimulationInput::new(Geometry::Sphere, 1000.0, 500.0, true, Some(1e-9));
//! let result = compute_result(&EngineConfig::default(), &input);
//! assert!(result.sherwood > 50.0);
//! ```

pub mod correlation;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod interpretation;

// Re-exports for ergonomics
pub use correlation::{PowerLawCorrelation, compute_sherwood, sherwood_for_tag};
pub use engine::{EngineConfig, SimulationResult, compute_result};
pub use error::{CorrelationError, CorrelationResult};
pub use geometry::Geometry;
pub use input::SimulationInput;
pub use interpretation::{
    CombinedRegime, DiffusionRegime, FlowRegime, Interpretation, MISSING_DIFFUSIVITY_WARNING,
    RuleContext, Statement, interpret,
};
