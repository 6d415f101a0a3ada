//! Correlation engine errors.

use thiserror::Error;

/// Result type for correlation operations.
pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Errors surfaced at the boundaries of the correlation engine.
///
/// The engine itself never fails: invalid diffusivity input is a defined
/// output (the warning interpretation), and an unrecognized tag silently
/// yields Sh = 0 at the tag boundary. This error exists for structured
/// callers (scenario files, CLI flags) that want a diagnostic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// Geometry tag not in the catalog.
    #[error("Unknown geometry tag '{tag}' (expected one of: {expected})")]
    UnknownGeometry { tag: String, expected: String },
}
