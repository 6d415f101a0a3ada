//! One synchronous recomputation-and-redraw cycle.
//!
//! The frontend collects the current control values into a
//! `SimulationInput`, calls [`evaluate`], and forwards the output to its
//! text displays and plot widget. Each cycle is self-contained; nothing is
//! shared or cached between invocations.

use crate::format::format_result;
use mt_chart::ReferenceFigure;
use mt_correlations::{EngineConfig, SimulationInput, SimulationResult, compute_result};
use tracing::debug;

/// Everything one cycle hands to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOutput {
    pub result: SimulationResult,
    /// Sh formatted for the text display (two decimals)
    pub sherwood_text: String,
    /// kc formatted for the text display (scientific, two-decimal mantissa)
    pub kc_text: String,
    pub figure: ReferenceFigure,
}

impl EvaluationOutput {
    /// Interpretation lines for the analysis panel.
    pub fn interpretation_lines(&self) -> Vec<String> {
        self.result.interpretation.lines()
    }
}

/// Run the engine on one input snapshot and prepare the display payload.
///
/// The figure is built from the *formatted* pair, not the raw numbers; the
/// chart step's contract is to re-parse what the text display shows.
pub fn evaluate(config: &EngineConfig, input: &SimulationInput) -> EvaluationOutput {
    let result = compute_result(config, input);
    let (sherwood_text, kc_text) = format_result(&result);
    debug!(
        geometry = input.geometry.tag(),
        re = input.reynolds,
        sc = input.schmidt,
        sh = %sherwood_text,
        kc = %kc_text,
        "evaluated operating point"
    );

    let figure = ReferenceFigure::from_display_text(&sherwood_text, &kc_text);

    EvaluationOutput {
        result,
        sherwood_text,
        kc_text,
        figure,
    }
}
