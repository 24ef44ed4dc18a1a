//! Statistical primitives shared by every engine
//!
//! - `interpolate`: piecewise-linear lookup with edge clamping
//! - `lms`: Box-Cox (LMS) measurement-to-Z transform
//! - `normal`: Abramowitz & Stegun normal CDF and clamped percentile

pub mod interpolate;
pub mod lms;
pub mod normal;

pub use interpolate::{interpolate, locate, Interpolated};
pub use lms::{z_score, LmsError};
pub use normal::{percentile_from_z, standard_normal_cdf};
