//! Newton-Raphson: tangent-line steps using a supplied derivative.

use raiz_core::Function;

use crate::{Config, Error, convergence::percent_error_or_abs, evaluate::evaluate};

/// One Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub x_prev: f64,
    pub x_new: f64,
    /// `f` evaluated at `x_new`, a separate call from the one that
    /// produced the step.
    pub f_x_new: f64,
    /// Percent error against `x_prev`, or the absolute difference when
    /// `x_new` is zero; `None` on the first iteration.
    pub approx_error: Option<f64>,
}

/// Finds a root of `f` from the seed `x0` using its derivative `df`.
///
/// Each step is `x_new = x_prev - f(x_prev) / df(x_prev)`. A vanishing
/// derivative is fatal: the solve aborts rather than skipping the
/// step, and the partial trace is discarded.
///
/// # Errors
///
/// Returns an error if the config is invalid, `f` or `df` cannot be
/// evaluated, or `df` is exactly zero at the current estimate.
pub fn solve<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Vec<Iteration>, Error>
where
    F: Function,
    D: Function,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut trace = Vec::new();
    let mut x_prev = x0;

    for iteration in 1..=config.max_iters {
        let f_x = evaluate(f, x_prev, iteration)?;
        let df_x = evaluate(df, x_prev, iteration)?;

        if df_x == 0.0 {
            return Err(Error::ZeroDerivative {
                x: x_prev,
                iteration,
            });
        }

        let x_new = x_prev - f_x / df_x;
        let approx_error = (iteration > 1).then(|| percent_error_or_abs(x_new, x_prev));
        let f_x_new = evaluate(f, x_new, iteration)?;

        trace.push(Iteration {
            x_prev,
            x_new,
            f_x_new,
            approx_error,
        });

        if approx_error.is_some_and(|e| e < config.tolerance) {
            break;
        }

        x_prev = x_new;
    }

    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use raiz_core::RealFn;

    fn parabola() -> RealFn<impl Fn(f64) -> f64> {
        RealFn::new(|x: f64| x * x - 4.0)
    }

    fn slope() -> RealFn<impl Fn(f64) -> f64> {
        RealFn::new(|x: f64| 2.0 * x)
    }

    #[test]
    fn converges_on_parabola() {
        let trace = solve(&parabola(), &slope(), 3.0, &Config::default()).expect("should solve");

        let last = trace.last().expect("non-empty trace");
        assert_relative_eq!(last.x_new, 2.0, epsilon = 1e-3);
        assert!(last.approx_error.expect("converged") < 1e-3);
        assert_eq!(trace[0].approx_error, None);
    }

    #[test]
    fn first_step_is_the_tangent_intercept() {
        let trace = solve(&parabola(), &slope(), 3.0, &Config::default()).expect("should solve");

        // x1 = 3 - 5/6 = 13/6, and the record re-evaluates f there.
        assert_relative_eq!(trace[0].x_prev, 3.0);
        assert_relative_eq!(trace[0].x_new, 13.0 / 6.0);
        assert_relative_eq!(trace[0].f_x_new, (13.0 / 6.0) * (13.0 / 6.0) - 4.0);
    }

    #[test]
    fn zero_derivative_at_seed_is_fatal() {
        let result = solve(&parabola(), &slope(), 0.0, &Config::default());
        assert!(matches!(
            result,
            Err(Error::ZeroDerivative { iteration: 1, .. })
        ));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            tolerance: 0.0,
            ..Config::default()
        };
        let result = solve(&parabola(), &slope(), 3.0, &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
