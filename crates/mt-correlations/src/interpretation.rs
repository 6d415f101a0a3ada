//! Qualitative interpretation of a computed operating point.
//!
//! The report is built from an ordered table of independent rules. Each rule
//! looks at the same [`RuleContext`] and always yields exactly one
//! [`Statement`]; adding a rule means appending to [`RULES`].

use crate::Geometry;
use mt_core::Real;
use std::fmt;

/// Fixed warning shown when no usable diffusivity is available.
pub const MISSING_DIFFUSIVITY_WARNING: &str = "Enable 'Use DAB' and enter a diffusion \
     coefficient (DAB) greater than zero to compute the Sherwood number and kc.";

/// Flow regime, a function of Re alone. Boundaries are exclusive: Re = 5000
/// and Re = 500 both classify as transitional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Turbulent,
    Laminar,
    Transitional,
}

impl FlowRegime {
    pub fn classify(re: Real) -> Self {
        if re > 5000.0 {
            FlowRegime::Turbulent
        } else if re < 500.0 {
            FlowRegime::Laminar
        } else {
            FlowRegime::Transitional
        }
    }
}

/// Diffusion regime, a function of Sc alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffusionRegime {
    /// Sc > 1000: liquid-like, high diffusive resistance
    SlowLiquidLike,
    /// Sc < 1: gas-like, fast diffusion
    FastGasLike,
    Moderate,
}

impl DiffusionRegime {
    pub fn classify(sc: Real) -> Self {
        if sc > 1000.0 {
            DiffusionRegime::SlowLiquidLike
        } else if sc < 1.0 {
            DiffusionRegime::FastGasLike
        } else {
            DiffusionRegime::Moderate
        }
    }
}

/// Combined regime, evaluated independently of the two above from Sh plus
/// the original Re/Sc. Each extreme branch needs both of its conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinedRegime {
    ForcedConvectionDominant,
    SlowDiffusionDominant,
    Combined,
}

impl CombinedRegime {
    pub fn classify(sh: Real, re: Real, sc: Real) -> Self {
        if sh > 1000.0 && re > 5000.0 {
            CombinedRegime::ForcedConvectionDominant
        } else if sh < 100.0 && sc > 1000.0 {
            CombinedRegime::SlowDiffusionDominant
        } else {
            CombinedRegime::Combined
        }
    }
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub geometry: Geometry,
    pub reynolds: Real,
    pub schmidt: Real,
    pub sherwood: Real,
}

/// One derived statement, carrying the values it was derived from so the
/// rendering can echo them.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Flow { regime: FlowRegime, reynolds: Real },
    Diffusion { regime: DiffusionRegime, schmidt: Real },
    Combined { regime: CombinedRegime, geometry: Geometry },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Flow { regime, reynolds } => match regime {
                FlowRegime::Turbulent => write!(
                    f,
                    "High Re ({reynolds:.0}): turbulent flow, convection-dominated transfer, higher kc"
                ),
                FlowRegime::Laminar => {
                    write!(f, "Low Re ({reynolds:.0}): laminar flow, lower kc")
                }
                FlowRegime::Transitional => {
                    write!(f, "Moderate Re ({reynolds:.0}): transitional flow")
                }
            },
            Statement::Diffusion { regime, schmidt } => match regime {
                DiffusionRegime::SlowLiquidLike => write!(
                    f,
                    "High Sc ({schmidt:.0}): slow diffusion (liquid-like), higher diffusive resistance"
                ),
                DiffusionRegime::FastGasLike => write!(
                    f,
                    "Low Sc ({schmidt:.1}): fast diffusion (gas-like), higher kc"
                ),
                DiffusionRegime::Moderate => write!(f, "Moderate Sc ({schmidt:.1})"),
            },
            Statement::Combined { regime, geometry } => match regime {
                CombinedRegime::ForcedConvectionDominant => write!(
                    f,
                    "Current combination: forced convection dominant for the {geometry} geometry"
                ),
                CombinedRegime::SlowDiffusionDominant => write!(
                    f,
                    "Current combination: slow diffusion dominant for the {geometry} geometry"
                ),
                CombinedRegime::Combined => write!(
                    f,
                    "Current combination: combined convection/diffusion transfer for the {geometry} geometry"
                ),
            },
        }
    }
}

fn flow_rule(ctx: &RuleContext) -> Statement {
    Statement::Flow {
        regime: FlowRegime::classify(ctx.reynolds),
        reynolds: ctx.reynolds,
    }
}

fn diffusion_rule(ctx: &RuleContext) -> Statement {
    Statement::Diffusion {
        regime: DiffusionRegime::classify(ctx.schmidt),
        schmidt: ctx.schmidt,
    }
}

fn combined_rule(ctx: &RuleContext) -> Statement {
    Statement::Combined {
        regime: CombinedRegime::classify(ctx.sherwood, ctx.reynolds, ctx.schmidt),
        geometry: ctx.geometry,
    }
}

/// Ordered rule table. Order is the display order of the report.
pub const RULES: &[fn(&RuleContext) -> Statement] = &[flow_rule, diffusion_rule, combined_rule];

/// Run every rule against the context, in table order.
pub fn interpret(ctx: &RuleContext) -> Vec<Statement> {
    RULES.iter().map(|rule| rule(ctx)).collect()
}

/// Either the fixed warning or a non-empty ordered report.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    MissingDiffusivity,
    Report(Vec<Statement>),
}

impl Interpretation {
    /// Rendered lines for the text display.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Interpretation::MissingDiffusivity => vec![MISSING_DIFFUSIVITY_WARNING.to_string()],
            Interpretation::Report(statements) => {
                statements.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}
