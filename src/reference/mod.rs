//! Reference Tables - immutable clinical data assets
//!
//! Every table is a `'static` slice of breakpoints compiled into the binary.
//! Nothing here is ever mutated, so tables are shared by reference across any
//! number of concurrent callers without locking.
//!
//! ## Registry
//!
//! - `who_growth`: WHO 2006 LMS parameters, 0-24 months, by sex x measurement
//! - `aap_bp`: AAP 2017 BP means/SDs, ages 1-17 x 7 height percentiles, by sex
//! - `aap_bilirubin`: AAP 2022 hour-specific curves, 3 risk categories x 2 curves
//!
//! `verify_registry()` validates every table once at startup. A failure there
//! is a build defect, not a user error.

pub mod aap_bilirubin;
pub mod aap_bp;
pub mod who_growth;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::types::{BilirubinRiskCategory, GrowthMeasurement, NomogramCurve, Sex};

pub use aap_bp::{BpParams, BpTable};

// ============================================================================
// Table Keys & Errors
// ============================================================================

/// Categorical tuple that selects a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableKey {
    Growth {
        sex: Sex,
        measurement: GrowthMeasurement,
    },
    BloodPressure {
        sex: Sex,
    },
    Bilirubin {
        risk: BilirubinRiskCategory,
        curve: NomogramCurve,
    },
    /// Ad-hoc tables built outside the registry (tests, tooling)
    Custom(&'static str),
}

impl std::fmt::Display for TableKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKey::Growth { sex, measurement } => write!(f, "who/{measurement}/{sex}"),
            TableKey::BloodPressure { sex } => write!(f, "aap-bp/{sex}"),
            TableKey::Bilirubin { risk, curve } => write!(f, "aap-bili/{risk}/{curve}"),
            TableKey::Custom(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("Reference table {0} is empty")]
    Empty(TableKey),

    #[error("Reference table {key}: breakpoint {index} (x={x}) is not above x={prev}")]
    NonIncreasing {
        key: TableKey,
        index: usize,
        prev: f64,
        x: f64,
    },

    #[error("Reference table {key}: breakpoint {index} has a non-finite x")]
    NonFinite { key: TableKey, index: usize },

    #[error("Reference table {key}: entry {index} has out-of-domain parameters")]
    InvalidParams { key: TableKey, index: usize },

    #[error("Reference table {key}: expected {expected} rows, found {found}")]
    RowCount {
        key: TableKey,
        expected: usize,
        found: usize,
    },

    #[error("Cannot interpolate {0} at a non-finite x")]
    NonFiniteAbscissa(TableKey),
}

// ============================================================================
// Parameter Sets
// ============================================================================

/// Dependent parameters stored at each breakpoint.
///
/// `lerp` is applied field by field; `fraction == 0.0` must return `self`
/// bit-for-bit so breakpoint lookups are exact.
pub trait ParamSet: Copy {
    fn lerp(&self, hi: &Self, fraction: f64) -> Self;

    /// Domain check used by table validation
    fn is_valid(&self) -> bool;
}

/// A single nomogram threshold value (mg/dL)
impl ParamSet for f64 {
    fn lerp(&self, hi: &Self, fraction: f64) -> Self {
        self + fraction * (hi - self)
    }

    fn is_valid(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }
}

/// Box-Cox power (L), median (M) and coefficient of variation (S)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lms {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl Lms {
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }
}

impl ParamSet for Lms {
    fn lerp(&self, hi: &Self, fraction: f64) -> Self {
        Self {
            l: self.l + fraction * (hi.l - self.l),
            m: self.m + fraction * (hi.m - self.m),
            s: self.s + fraction * (hi.s - self.s),
        }
    }

    fn is_valid(&self) -> bool {
        self.l.is_finite() && self.m.is_finite() && self.s.is_finite() && self.m > 0.0 && self.s > 0.0
    }
}

// ============================================================================
// Breakpoints & Tables
// ============================================================================

/// Independent variable `x` (months or hours) and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint<P> {
    pub x: f64,
    pub params: P,
}

impl<P> Breakpoint<P> {
    pub const fn new(x: f64, params: P) -> Self {
        Self { x, params }
    }
}

/// Ordered breakpoints plus the key that selects them.
///
/// Registry tables borrow `'static` data; ad-hoc tables may borrow locals.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable<'a, P> {
    key: TableKey,
    points: &'a [Breakpoint<P>],
}

impl<'a, P: ParamSet> ReferenceTable<'a, P> {
    /// Wrap breakpoints without checking them; call `validate()` before use.
    pub const fn new(key: TableKey, points: &'a [Breakpoint<P>]) -> Self {
        Self { key, points }
    }

    /// Wrap and validate in one step.
    pub fn checked(key: TableKey, points: &'a [Breakpoint<P>]) -> Result<Self, TableError> {
        let table = Self::new(key, points);
        table.validate()?;
        Ok(table)
    }

    pub fn key(&self) -> TableKey {
        self.key
    }

    pub fn points(&self) -> &'a [Breakpoint<P>] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `[first.x, last.x]`, or `None` for an empty table
    pub fn coverage(&self) -> Option<(f64, f64)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// Non-empty, finite, strictly increasing in `x`, parameters in domain.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.points.is_empty() {
            return Err(TableError::Empty(self.key));
        }
        let mut prev: Option<f64> = None;
        for (index, bp) in self.points.iter().enumerate() {
            if !bp.x.is_finite() {
                return Err(TableError::NonFinite {
                    key: self.key,
                    index,
                });
            }
            if let Some(p) = prev {
                if bp.x <= p {
                    return Err(TableError::NonIncreasing {
                        key: self.key,
                        index,
                        prev: p,
                        x: bp.x,
                    });
                }
            }
            if !bp.params.is_valid() {
                return Err(TableError::InvalidParams {
                    key: self.key,
                    index,
                });
            }
            prev = Some(bp.x);
        }
        Ok(())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Validate every table shipped in the registry.
///
/// Returns the number of tables checked.
pub fn verify_registry() -> Result<usize, TableError> {
    let mut count = 0usize;
    match verify_all(&mut count) {
        Ok(()) => {
            info!(tables = count, "Reference table registry verified");
            Ok(count)
        }
        Err(e) => {
            error!(error = %e, verified = count, "Reference table registry is malformed");
            Err(e)
        }
    }
}

fn verify_all(count: &mut usize) -> Result<(), TableError> {
    for sex in Sex::ALL {
        for measurement in GrowthMeasurement::ALL {
            who_growth::table(sex, measurement).validate()?;
            *count += 1;
        }
        aap_bp::table(sex).validate()?;
        *count += 1;
    }
    for risk in BilirubinRiskCategory::ALL {
        for curve in NomogramCurve::ALL {
            aap_bilirubin::curve(risk, curve).validate()?;
            *count += 1;
        }
    }
    Ok(())
}
