//! mt-chart: chart-data contract for the Sh vs kc reference plot.
//!
//! This crate produces plot *data*, not pixels: line points as `[x, y]`
//! pairs ready for any plotting widget, the operating-point marker, and the
//! log10 axis ranges. Rendering backends stay out of the workspace.

pub mod figure;

pub use figure::{
    FALLBACK_KC, FALLBACK_SHERWOOD, REFERENCE_LINE_POINTS, ReferenceFigure, parse_display_point,
};
