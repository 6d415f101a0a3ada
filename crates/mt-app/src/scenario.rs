//! Scenario files: a saved set of control values.
//!
//! A scenario is the YAML form of one `SimulationInput`, with the geometry
//! kept as a tag string so files stay hand-editable.

use crate::error::{AppError, AppResult};
use mt_correlations::SimulationInput;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Geometry tag (canonical or legacy, see `Geometry::from_tag`)
    pub geometry: String,
    /// Reynolds number
    pub reynolds: f64,
    /// Schmidt number
    pub schmidt: f64,
    /// Whether the diffusivity entry participates
    #[serde(default = "default_true")]
    pub use_dab: bool,
    /// Binary diffusion coefficient [m^2/s]
    #[serde(default)]
    pub dab_m2_s: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Scenario {
    /// Snapshot the typed input back into a savable scenario.
    pub fn from_input(input: &SimulationInput) -> Self {
        Self {
            geometry: input.geometry.tag().to_string(),
            reynolds: input.reynolds,
            schmidt: input.schmidt,
            use_dab: input.diffusivity_enabled,
            dab_m2_s: input.dab_m2_s,
        }
    }

    /// Resolve the scenario into a typed input. Unknown geometry tags are a
    /// scenario error here, unlike the silent tag-boundary fallback.
    pub fn to_input(&self) -> AppResult<SimulationInput> {
        let input = SimulationInput::from_tag(
            &self.geometry,
            self.reynolds,
            self.schmidt,
            self.use_dab,
            self.dab_m2_s,
        )?;
        Ok(input)
    }
}

/// Load a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario: Scenario = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Scenario(format!("Failed to parse scenario YAML: {}", e)))?;

    debug!(path = %path.display(), geometry = %scenario.geometry, "loaded scenario");
    Ok(scenario)
}

/// Save a scenario to a YAML file.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    let content = serde_yaml::to_string(scenario)
        .map_err(|e| AppError::Scenario(format!("Failed to serialize scenario: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
