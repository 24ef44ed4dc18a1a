//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks.
//!
//! The raw TOML is first walked as a `toml::Value` tree and every dotted key
//! is compared against the known field names. Unknown keys only warn; serde
//! deserialization then proceeds normally and ignores them.

use std::collections::HashSet;

use super::defaults::{BATCH_THREADS_WARN_ABOVE, LOG_LEVELS, MAX_BATCH_THREADS, MAX_OUTPUT_DECIMALS};
use super::EngineConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path for `EngineConfig`.
///
/// Kept by hand in step with engine_config.rs; a new field needs a line here.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [logging]
        "logging",
        "logging.level",
        "logging.json",
        // [output]
        "output",
        "output.format",
        "output.decimals",
        // [batch]
        "batch",
        "batch.threads",
        "batch.fail_fast",
        // [startup]
        "startup",
        "startup.verify_tables",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collect dotted key paths from a `toml::Value` tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Closest known key within edit distance 3; ties go to the
/// alphabetically first key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Warnings for every unknown key in `raw_toml`.
///
/// Never fails; malformed TOML is left for the serde pass to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Check a parsed config for values the runtime cannot honour.
///
/// Returns (errors, warnings): errors must prevent startup, warnings are
/// suspicious but usable.
pub fn validate_ranges(config: &EngineConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = '{}' is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if config.output.decimals > MAX_OUTPUT_DECIMALS {
        errors.push(format!(
            "output.decimals = {} exceeds the maximum of {MAX_OUTPUT_DECIMALS}",
            config.output.decimals
        ));
    }

    let threads = config.batch.threads;
    if threads > MAX_BATCH_THREADS {
        errors.push(format!(
            "batch.threads = {threads} exceeds the maximum of {MAX_BATCH_THREADS}"
        ));
    } else if threads > BATCH_THREADS_WARN_ABOVE {
        warnings.push(ValidationWarning {
            field: "batch.threads".to_string(),
            message: format!(
                "batch.threads = {threads} is unusually high (typical: 0-{BATCH_THREADS_WARN_ABOVE})"
            ),
            suggestion: None,
        });
    }

    if !config.startup.verify_tables {
        warnings.push(ValidationWarning {
            field: "startup.verify_tables".to_string(),
            message: "startup.verify_tables = false skips reference table checks".to_string(),
            suggestion: None,
        });
    }

    (errors, warnings)
}
