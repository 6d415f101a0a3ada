//! Log-log reference figure for one operating point.
//!
//! The chart step consumes the *formatted* Sh/kc pair from the display
//! boundary and re-parses it. A pair that fails to parse must still render,
//! so it falls back to a fixed default point instead of failing.

use mt_core::Real;

/// Safe default operating point when the formatted pair does not parse.
pub const FALLBACK_SHERWOOD: Real = 1.0;
pub const FALLBACK_KC: Real = 1e-10;

/// Number of points on the log-spaced reference line.
pub const REFERENCE_LINE_POINTS: usize = 50;

/// Baseline log10 axis ranges; upper bounds grow when the point exceeds them.
const SH_AXIS_LOG_MIN: Real = 0.0;
const SH_AXIS_LOG_MAX: Real = 4.3;
const KC_AXIS_LOG_MIN: Real = -12.0;
const KC_AXIS_LOG_MAX: Real = -3.0;

/// Extra log-decades above an out-of-range point.
const AXIS_HEADROOM: Real = 0.5;

/// Reference-line slope when Sh is zero and kc/Sh is undefined.
const DEGENERATE_SLOPE: Real = 1e-10;

/// Re-parse the display-formatted (Sh, kc) pair, falling back to the
/// default point on any parse failure.
pub fn parse_display_point(sh_text: &str, kc_text: &str) -> (Real, Real) {
    match (sh_text.trim().parse::<Real>(), kc_text.trim().parse::<Real>()) {
        (Ok(sh), Ok(kc)) => (sh, kc),
        _ => (FALLBACK_SHERWOOD, FALLBACK_KC),
    }
}

/// Everything the plot widget needs to redraw the Sh vs kc chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFigure {
    /// Proportionality line through the origin region, as `[sh, kc]` pairs.
    pub reference_line: Vec<[Real; 2]>,
    /// Marker at the current operating point.
    pub operating_point: [Real; 2],
    /// Marker annotation text.
    pub point_label: String,
    /// Sh axis range as log10 bounds.
    pub sh_axis_log10: (Real, Real),
    /// kc axis range as log10 bounds.
    pub kc_axis_log10: (Real, Real),
}

impl ReferenceFigure {
    /// Build the figure from the display-formatted pair, applying the parse
    /// fallback.
    pub fn from_display_text(sh_text: &str, kc_text: &str) -> Self {
        let (sh, kc) = parse_display_point(sh_text, kc_text);
        Self::from_values(sh, kc)
    }

    /// Build the figure from numeric Sh and kc.
    pub fn from_values(sh: Real, kc: Real) -> Self {
        let sh_log_max = if sh > 0.0 {
            SH_AXIS_LOG_MAX.max(sh.log10() + AXIS_HEADROOM)
        } else {
            SH_AXIS_LOG_MAX
        };
        let kc_log_max = if kc > 0.0 {
            KC_AXIS_LOG_MAX.max(kc.log10() + AXIS_HEADROOM)
        } else {
            KC_AXIS_LOG_MAX
        };

        let slope = if sh > 0.0 { kc / sh } else { DEGENERATE_SLOPE };
        let reference_line = logspace(SH_AXIS_LOG_MIN, sh_log_max, REFERENCE_LINE_POINTS)
            .into_iter()
            .map(|x| [x, x * slope])
            .collect();

        Self {
            reference_line,
            operating_point: [sh, kc],
            point_label: format!("Sh: {sh:.2}\nkc: {kc:.2e}"),
            sh_axis_log10: (SH_AXIS_LOG_MIN, sh_log_max),
            kc_axis_log10: (KC_AXIS_LOG_MIN, kc_log_max),
        }
    }
}

/// `count` points from 10^log_start to 10^log_end, log-uniform, with the
/// endpoints landed exactly.
fn logspace(log_start: Real, log_end: Real, count: usize) -> Vec<Real> {
    if count <= 1 {
        return vec![10.0_f64.powf(log_start)];
    }

    let mut points = Vec::with_capacity(count);
    let delta = (log_end - log_start) / (count - 1) as Real;
    for i in 0..count {
        points.push(10.0_f64.powf(log_start + i as Real * delta));
    }

    // Ensure exact endpoint
    points[count - 1] = 10.0_f64.powf(log_end);
    points
}
