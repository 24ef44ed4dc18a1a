//! Batch evaluation over JSON Lines
//!
//! Each non-blank, non-comment line is one request tagged by `"calculator"`:
//!
//! ```text
//! {"calculator":"growth","sex":"male","measurement":"weight_for_age","age_months":6,"value":7.9}
//! {"calculator":"blood_pressure","systolic":112,"diastolic":70,"age_years":10,"sex":"female","height_percentile":50}
//! {"calculator":"bilirubin","bilirubin":12.4,"postnatal_age_hours":30,"gestational_age":"term","has_risk_factors":false}
//! ```
//!
//! Requests are scored in parallel against the shared read-only tables and
//! returned in input order.

use std::io::{BufRead, Write};

use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::BatchConfig;
use crate::engine::{self, EngineError};
use crate::types::{
    BilirubinResult, BpResult, GestationalAge, GrowthMeasurement, GrowthResult, HeightPercentile,
    Sex,
};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read batch input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: malformed request: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: EngineError,
    },

    #[error("Failed to build batch thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

// ============================================================================
// Requests & Results
// ============================================================================

/// One calculator invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum BatchRequest {
    Growth {
        sex: Sex,
        measurement: GrowthMeasurement,
        age_months: f64,
        value: f64,
    },
    BloodPressure {
        systolic: f64,
        diastolic: f64,
        age_years: i32,
        sex: Sex,
        height_percentile: HeightPercentile,
    },
    Bilirubin {
        bilirubin: f64,
        postnatal_age_hours: f64,
        gestational_age: GestationalAge,
        #[serde(default)]
        has_risk_factors: bool,
    },
}

impl BatchRequest {
    pub fn evaluate(&self) -> Result<CalculatorResult, EngineError> {
        match *self {
            BatchRequest::Growth {
                sex,
                measurement,
                age_months,
                value,
            } => engine::growth_percentile(sex, measurement, age_months, value)
                .map(CalculatorResult::Growth),
            BatchRequest::BloodPressure {
                systolic,
                diastolic,
                age_years,
                sex,
                height_percentile,
            } => engine::bp_classification(systolic, diastolic, age_years, sex, height_percentile)
                .map(CalculatorResult::BloodPressure),
            BatchRequest::Bilirubin {
                bilirubin,
                postnatal_age_hours,
                gestational_age,
                has_risk_factors,
            } => engine::bilirubin_classification(
                bilirubin,
                postnatal_age_hours,
                gestational_age,
                has_risk_factors,
            )
            .map(CalculatorResult::Bilirubin),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorResult {
    Growth(GrowthResult),
    BloodPressure(BpResult),
    Bilirubin(BilirubinResult),
}

/// Result for one input line. Serialises as `{"line":N,"result":{..}}` or
/// `{"line":N,"error":".."}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// 1-based line number in the input
    pub line: usize,
    pub result: Result<CalculatorResult, EngineError>,
}

impl Serialize for BatchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            line: usize,
            #[serde(skip_serializing_if = "Option::is_none")]
            result: Option<&'a CalculatorResult>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<String>,
        }

        Wire {
            line: self.line,
            result: self.result.as_ref().ok(),
            error: self.result.as_ref().err().map(ToString::to_string),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub scored: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let scored = outcomes.iter().filter(|o| o.result.is_ok()).count();
        Self {
            total: outcomes.len(),
            scored,
            rejected: outcomes.len() - scored,
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse JSON Lines into `(line_number, request)` pairs.
///
/// Blank lines and lines starting with `#` are skipped. The first malformed
/// line aborts parsing.
pub fn parse_requests<R: BufRead>(reader: R) -> Result<Vec<(usize, BatchRequest)>, BatchError> {
    let mut requests = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let request = serde_json::from_str(trimmed).map_err(|source| BatchError::Parse {
            line: line_no,
            source,
        })?;
        requests.push((line_no, request));
    }
    debug!(count = requests.len(), "Parsed batch requests");
    Ok(requests)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Score every request in parallel, preserving input order.
///
/// `config.threads > 0` runs on a dedicated pool of that size. With
/// `config.fail_fast` the first rejected request (by line) becomes the error.
pub fn evaluate_all(
    requests: &[(usize, BatchRequest)],
    config: &BatchConfig,
) -> Result<Vec<BatchOutcome>, BatchError> {
    let run = || -> Vec<BatchOutcome> {
        requests
            .par_iter()
            .map(|&(line, request)| BatchOutcome {
                line,
                result: request.evaluate(),
            })
            .collect()
    };

    let outcomes = if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?
            .install(run)
    } else {
        run()
    };

    if config.fail_fast {
        if let Some((line, Err(source))) = outcomes
            .iter()
            .map(|o| (o.line, &o.result))
            .find(|(_, r)| r.is_err())
        {
            return Err(BatchError::Rejected {
                line,
                source: source.clone(),
            });
        }
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(
        total = summary.total,
        scored = summary.scored,
        rejected = summary.rejected,
        threads = config.threads,
        "Batch evaluated"
    );
    Ok(outcomes)
}

/// Write one JSON object per outcome.
pub fn write_jsonl<W: Write>(mut writer: W, outcomes: &[BatchOutcome]) -> Result<(), BatchError> {
    for outcome in outcomes {
        serde_json::to_writer(&mut writer, outcome).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
