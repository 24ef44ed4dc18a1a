//! System-wide default constants.
//!
//! File locations and hard limits for the configurable surface. Clinical
//! constants live in `types::clinical_thresholds`, not here.

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable holding an explicit config path.
pub const CONFIG_ENV_VAR: &str = "PEDSTAT_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const LOCAL_CONFIG_FILE: &str = "pedstat.toml";

// ============================================================================
// Logging
// ============================================================================

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Output
// ============================================================================

/// Upper bound for `output.decimals`.
///
/// Table values carry at most 5 significant decimals; 6 is already noise.
pub const MAX_OUTPUT_DECIMALS: usize = 6;

// ============================================================================
// Batch
// ============================================================================

/// Upper bound for `batch.threads`.
pub const MAX_BATCH_THREADS: usize = 256;

/// Thread counts above this draw a warning; scoring is too cheap to need more.
pub const BATCH_THREADS_WARN_ABOVE: usize = 64;
