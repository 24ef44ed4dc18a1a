//! pedstat: Pediatric Reference Scoring
//!
//! Interpolates published pediatric reference tables and turns a single
//! measurement into a Z-score, percentile or treatment category.
//!
//! ## Architecture
//!
//! - **Reference**: static WHO/AAP tables plus startup validation
//! - **Stats**: interpolation, LMS transform, normal CDF approximation
//! - **Engine**: growth, blood-pressure and bilirubin scoring
//! - **Batch**: parallel JSON Lines evaluation for the CLI
//!
//! Every engine call is a pure function of its inputs and the shared
//! read-only tables, so it is safe to call from any number of threads.

pub mod batch;
pub mod config;
pub mod engine;
pub mod reference;
pub mod stats;
pub mod types;

pub use config::EngineConfig;

pub use engine::{
    bilirubin_classification, bp_classification, growth_percentile, risk_category, EngineError,
};

pub use types::{
    BilirubinInterpretation, BilirubinResult, BilirubinRiskCategory, BpClassification, BpResult,
    CutPoints, GestationalAge, GrowthMeasurement, GrowthResult, HeightPercentile, Sex,
};

pub use reference::{verify_registry, TableError};
pub use stats::{percentile_from_z, z_score, LmsError};
