//! Fixed-point iteration: `x = g(x)`.

use raiz_core::Function;

use crate::{Config, Error, convergence::percent_error_or_abs, evaluate::evaluate};

/// One fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub x_prev: f64,
    pub x_new: f64,
    /// Percent error against `x_prev`, or the absolute difference when
    /// `x_new` is zero; `None` on the first iteration.
    pub approx_error: Option<f64>,
}

/// Iterates `g` from `x0` until successive values agree within the
/// tolerance.
///
/// A root of the original problem corresponds to a fixed point
/// `x = g(x)` of the iteration function. There is no bracket and no
/// denominator, so the only failure modes are an invalid config and a
/// failed evaluation of `g`.
///
/// # Errors
///
/// Returns an error if the config is invalid or `g` cannot be
/// evaluated at the current estimate.
pub fn solve<G>(g: &G, x0: f64, config: &Config) -> Result<Vec<Iteration>, Error>
where
    G: Function,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut trace = Vec::new();
    let mut x_prev = x0;

    for iteration in 1..=config.max_iters {
        let x_new = evaluate(g, x_prev, iteration)?;
        let approx_error = (iteration > 1).then(|| percent_error_or_abs(x_new, x_prev));

        trace.push(Iteration {
            x_prev,
            x_new,
            approx_error,
        });

        if approx_error.is_some_and(|e| e < config.tolerance) {
            break;
        }

        x_prev = x_new;
    }

    Ok(trace)
}
