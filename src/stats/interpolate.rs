//! Piecewise-linear interpolation over a reference table
//!
//! Queries outside `[first.x, last.x]` clamp to the nearest edge; the table
//! is never extrapolated. A query landing exactly on a breakpoint returns that
//! breakpoint's parameters untouched.

use crate::reference::{ParamSet, ReferenceTable, TableError};

/// Interpolated parameters plus whether the query was clamped to an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated<P> {
    pub params: P,
    pub clamped: bool,
}

/// Interpolate `table` at `x`.
///
/// Fails on an empty table or a NaN `x`. Infinite `x` clamps like any other
/// out-of-range value.
pub fn interpolate<P: ParamSet>(table: &ReferenceTable<'_, P>, x: f64) -> Result<P, TableError> {
    locate(table, x).map(|found| found.params)
}

/// Same as [`interpolate`] but also reports edge clamping.
pub fn locate<P: ParamSet>(
    table: &ReferenceTable<'_, P>,
    x: f64,
) -> Result<Interpolated<P>, TableError> {
    let points = table.points();
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TableError::Empty(table.key())),
    };
    if x.is_nan() {
        return Err(TableError::NonFiniteAbscissa(table.key()));
    }

    if x <= first.x {
        return Ok(Interpolated {
            params: first.params,
            clamped: x < first.x,
        });
    }
    if x >= last.x {
        return Ok(Interpolated {
            params: last.params,
            clamped: x > last.x,
        });
    }

    // first.x < x < last.x, so 1 <= idx <= len - 1 and lo.x <= x < hi.x
    let idx = points.partition_point(|bp| bp.x <= x);
    let (lo, hi) = (&points[idx - 1], &points[idx]);
    if x == lo.x {
        return Ok(Interpolated {
            params: lo.params,
            clamped: false,
        });
    }

    let fraction = (x - lo.x) / (hi.x - lo.x);
    Ok(Interpolated {
        params: lo.params.lerp(&hi.params, fraction),
        clamped: false,
    })
}
