//! Clinical constants shared by the scoring engines
//!
//! These come straight from the source guidelines (WHO 2006, AAP 2017,
//! AAP 2022) and are deliberately not exposed through the config file.

/// Constants used by the statistical transforms and staged classifiers
pub mod clinical_thresholds {
    // === LMS Transform ===
    /// |L| below this is treated as the L = 0 (log) limit of the Box-Cox transform
    pub const LMS_L_EPSILON: f64 = 0.001;

    // === Percentile Display ===
    /// Lowest percentile ever reported; the UI never shows "0th"
    pub const PERCENTILE_FLOOR: f64 = 0.1;
    /// Highest percentile ever reported; the UI never shows "100th"
    pub const PERCENTILE_CEILING: f64 = 99.9;

    // === Abramowitz & Stegun 7.1.26 erf approximation ===
    pub const AS_A1: f64 = 0.254_829_592;
    pub const AS_A2: f64 = -0.284_496_736;
    pub const AS_A3: f64 = 1.421_413_741;
    pub const AS_A4: f64 = -1.453_152_027;
    pub const AS_A5: f64 = 1.061_405_429;
    pub const AS_P: f64 = 0.327_591_1;

    // === Blood Pressure (AAP 2017) ===
    /// Standard-normal quantile used for the 90th percentile cut-point
    pub const BP_Z_P90: f64 = 1.282;
    /// Standard-normal quantile used for the 95th percentile cut-point
    pub const BP_Z_P95: f64 = 1.645;
    /// Fixed escalation from stage 1 to stage 2 hypertension (mmHg above p95)
    pub const BP_STAGE2_OFFSET_MMHG: f64 = 12.0;
    /// Youngest age (years) covered by the normative tables
    pub const BP_MIN_AGE_YEARS: i32 = 1;
    /// Oldest age (years) covered by the normative tables
    pub const BP_MAX_AGE_YEARS: i32 = 17;

    // === Bilirubin Nomogram (AAP 2022) ===
    /// Number of hour-specific points in each nomogram curve
    pub const NOMOGRAM_POINTS: usize = 11;
    /// Last postnatal hour covered by the nomogram; later hours clamp here
    pub const NOMOGRAM_MAX_HOURS: f64 = 120.0;
}
