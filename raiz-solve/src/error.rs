use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a root-finding solve.
///
/// All variants are fatal: the solve aborts and any partial trace is
/// discarded. Exhausting the iteration cap is deliberately *not* an
/// error; it returns the full trace instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The tolerance or iteration cap is out of range. Detected before
    /// any iteration runs.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The bracket endpoints do not straddle a root.
    #[error("no sign change over [{a}, {b}]: f(a) = {f_a}, f(b) = {f_b}")]
    NoSignChange { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// The derivative vanished at the current estimate (Newton-Raphson).
    #[error("derivative is zero at x = {x} in iteration {iteration}")]
    ZeroDerivative { x: f64, iteration: usize },

    /// Two function values coincide where their difference is the
    /// divisor (false position, secant).
    #[error("zero denominator in iteration {iteration}: f({x0}) and f({x1}) are both {value}")]
    ZeroDenominator {
        iteration: usize,
        x0: f64,
        x1: f64,
        value: f64,
    },

    /// The function or derivative capability failed to produce a finite
    /// value. `iteration` is 1-based; 0 marks the bracket check that
    /// runs before the first iteration.
    #[error("function evaluation failed at x = {x} in iteration {iteration}")]
    Evaluation {
        x: f64,
        iteration: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
