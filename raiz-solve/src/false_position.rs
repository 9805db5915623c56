//! False position (regula falsi): bracketed secant-line interpolation.

use raiz_core::Function;

use crate::{Config, Error, convergence::percent_error, evaluate::evaluate};

/// One false-position iteration.
///
/// `a` and `b` are the bracket as it stood when `x_root` was computed,
/// not the bracket after this iteration's update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub a: f64,
    pub b: f64,
    /// Secant-line intercept, the iteration's root estimate.
    pub x_root: f64,
    pub f_x_root: f64,
    /// Percent error against the previous estimate; `None` on the
    /// first iteration.
    pub approx_error: Option<f64>,
}

/// Finds a root of `f` over the bracket `[a, b]` by false position.
///
/// Unlike bisection there is no exact-zero stop: a zero function value
/// at the estimate is absorbed by the error check on the following
/// iteration. The endpoints are re-evaluated every iteration, so a
/// capability whose values drift can trip the denominator check at any
/// point of the solve.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket endpoints
/// cannot be evaluated, `f(a) * f(b) >= 0`, or `f(a)` and `f(b)` are
/// exactly equal within an iteration.
pub fn solve<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Vec<Iteration>, Error>
where
    F: Function,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [mut a, mut b] = bracket;

    let f_a = evaluate(f, a, 0)?;
    let f_b = evaluate(f, b, 0)?;
    if f_a * f_b >= 0.0 {
        return Err(Error::NoSignChange { a, b, f_a, f_b });
    }

    let mut trace = Vec::new();
    let mut x_prev: Option<f64> = None;

    for iteration in 1..=config.max_iters {
        let f_a = evaluate(f, a, iteration)?;
        let f_b = evaluate(f, b, iteration)?;

        #[allow(clippy::float_cmp)]
        if f_a == f_b {
            return Err(Error::ZeroDenominator {
                iteration,
                x0: a,
                x1: b,
                value: f_a,
            });
        }

        let x_root = b - (f_b * (a - b)) / (f_a - f_b);
        let f_x_root = evaluate(f, x_root, iteration)?;
        let approx_error = x_prev.map(|prev| percent_error(x_root, prev));

        trace.push(Iteration {
            a,
            b,
            x_root,
            f_x_root,
            approx_error,
        });

        if approx_error.is_some_and(|e| e < config.tolerance) {
            break;
        }

        if f_a * f_x_root < 0.0 {
            b = x_root;
        } else {
            a = x_root;
        }

        x_prev = Some(x_root);
    }

    Ok(trace)
}
