//! Display formatting boundary.
//!
//! Both text displays and the chart step consume these exact renderings, so
//! they live in one place: Sh with two decimals, kc in scientific notation
//! with a two-decimal mantissa.

use mt_core::Real;
use mt_correlations::SimulationResult;

pub fn format_sherwood(sh: Real) -> String {
    format!("{sh:.2}")
}

pub fn format_kc(kc_m_s: Real) -> String {
    format!("{kc_m_s:.2e}")
}

/// Formatted (Sh, kc) pair for a result.
pub fn format_result(result: &SimulationResult) -> (String, String) {
    (
        format_sherwood(result.sherwood),
        format_kc(result.kc_m_s()),
    )
}
