//! Shared data structures for the pediatric scoring engines
//!
//! - Selectors: the closed categorical keys that pick a reference table
//! - Results: per-call output records returned to the caller
//! - Thresholds: clinical constants from the source guidelines

mod selectors;
mod results;
// Public so callers can reach `types::thresholds::clinical_thresholds`.
pub mod thresholds;

pub use selectors::*;
pub use results::*;
pub use thresholds::*;
