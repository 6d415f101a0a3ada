//! Shared application service layer for masstran.
//!
//! This crate provides a unified interface for frontends: one synchronous
//! evaluate-and-format cycle per input change, the display formatting
//! boundary, and scenario file handling.

pub mod error;
pub mod evaluate;
pub mod format;
pub mod scenario;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use evaluate::{EvaluationOutput, evaluate};
pub use format::{format_kc, format_result, format_sherwood};
pub use scenario::{Scenario, load_scenario, save_scenario};
