//! Secant: Newton-like steps with a finite-difference slope from two
//! seeds.

use raiz_core::Function;

use crate::{Config, Error, convergence::percent_error_or_abs, evaluate::evaluate};

/// One secant iteration.
///
/// `x0` and `x1` are the seed pair used to produce `x_new`, before the
/// shift to the next pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub x0: f64,
    pub x1: f64,
    pub x_new: f64,
    pub f_x_new: f64,
    /// Percent error of `x_new` against `x1` (the most recent seed, not
    /// a separate previous-estimate variable), or the absolute
    /// difference when `x_new` is zero; `None` on the first iteration.
    pub approx_error: Option<f64>,
}

/// Finds a root of `f` from the two seeds `x0` and `x1`.
///
/// Each step replaces the derivative in Newton's formula with the
/// slope of the secant line through the two most recent points:
/// `x_new = x1 - f(x1)(x1 - x0) / (f(x1) - f(x0))`. The seeds then
/// shift to `(x1, x_new)`.
///
/// # Errors
///
/// Returns an error if the config is invalid, `f` cannot be evaluated,
/// or `f(x1) - f(x0)` is exactly zero within an iteration.
pub fn solve<F>(f: &F, x0: f64, x1: f64, config: &Config) -> Result<Vec<Iteration>, Error>
where
    F: Function,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut x0, mut x1) = (x0, x1);
    let mut trace = Vec::new();

    for iteration in 1..=config.max_iters {
        let f_x0 = evaluate(f, x0, iteration)?;
        let f_x1 = evaluate(f, x1, iteration)?;

        #[allow(clippy::float_cmp)]
        if f_x1 - f_x0 == 0.0 {
            return Err(Error::ZeroDenominator {
                iteration,
                x0,
                x1,
                value: f_x1,
            });
        }

        let x_new = x1 - f_x1 * (x1 - x0) / (f_x1 - f_x0);
        let approx_error = (iteration > 1).then(|| percent_error_or_abs(x_new, x1));
        let f_x_new = evaluate(f, x_new, iteration)?;

        trace.push(Iteration {
            x0,
            x1,
            x_new,
            f_x_new,
            approx_error,
        });

        if approx_error.is_some_and(|e| e < config.tolerance) {
            break;
        }

        (x0, x1) = (x1, x_new);
    }

    Ok(trace)
}
