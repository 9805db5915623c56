//! Approximate-error rules shared by all solvers.
//!
//! Two variants exist, and the difference is intentional. The
//! bracketing methods report infinity when the new estimate is zero;
//! the open methods fall back to the absolute difference instead,
//! which is *not* on the percentage scale. Downstream consumers of the
//! traces depend on these exact shapes, so neither form is normalized
//! to the other.

/// Approximate relative error, as a percentage, between successive
/// estimates.
///
/// Returns positive infinity when `new` is zero, where the relative
/// form divides by zero. Used by bisection and false position.
#[must_use]
pub fn percent_error(new: f64, prev: f64) -> f64 {
    if new == 0.0 {
        f64::INFINITY
    } else {
        ((new - prev) / new).abs() * 100.0
    }
}

/// Approximate relative error with an absolute-difference fallback.
///
/// Identical to [`percent_error`] for nonzero `new`; when `new` is
/// zero it returns `|new - prev|` unscaled. Used by fixed point,
/// Newton-Raphson, and secant.
#[must_use]
pub fn percent_error_or_abs(new: f64, prev: f64) -> f64 {
    if new == 0.0 {
        (new - prev).abs()
    } else {
        ((new - prev) / new).abs() * 100.0
    }
}
