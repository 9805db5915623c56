//! Bisection: repeatedly halves a sign-changing bracket.

use raiz_core::Function;

use crate::{Config, Error, convergence::percent_error, evaluate::evaluate};

/// One bisection iteration.
///
/// `a` and `b` are the bracket as it stood when `x_root` was computed,
/// not the bracket after this iteration's update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub a: f64,
    pub b: f64,
    /// Midpoint of the bracket, the iteration's root estimate.
    pub x_root: f64,
    pub f_x_root: f64,
    /// Percent error against the previous estimate; `None` on the
    /// first iteration.
    pub approx_error: Option<f64>,
}

/// Finds a root of `f` over the bracket `[a, b]` by bisection.
///
/// Iterates until the approximate error drops below the tolerance,
/// `f` is exactly zero at a midpoint, or the iteration cap is reached.
/// Reaching the cap is not an error: the trace is returned as-is and
/// its last record carries the best available estimate.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket endpoints
/// cannot be evaluated, or `f(a) * f(b) >= 0`.
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
        let x_root = (a + b) / 2.0;
        let f_x_root = evaluate(f, x_root, iteration)?;
        let approx_error = x_prev.map(|prev| percent_error(x_root, prev));

        trace.push(Iteration {
            a,
            b,
            x_root,
            f_x_root,
            approx_error,
        });

        #[allow(clippy::float_cmp)]
        if approx_error.is_some_and(|e| e < config.tolerance) || f_x_root == 0.0 {
            break;
        }

        let f_a = evaluate(f, a, iteration)?;
        if f_a * f_x_root < 0.0 {
            b = x_root;
        } else {
            a = x_root;
        }

        x_prev = Some(x_root);
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

    #[test]
    fn converges_on_parabola() {
        let trace = solve(&parabola(), [0.0, 3.0], &Config::default()).expect("should solve");

        assert!(trace.len() <= 20);
        let last = trace.last().expect("non-empty trace");
        assert_relative_eq!(last.x_root, 2.0, epsilon = 1e-3);
        assert!(last.approx_error.expect("converged") < 1e-3);
    }

    #[test]
    fn first_iteration_has_no_error() {
        let trace = solve(&parabola(), [0.0, 3.0], &Config::default()).expect("should solve");

        assert_eq!(trace[0].approx_error, None);
        assert!(trace[1..].iter().all(|it| it.approx_error.is_some()));
    }

    #[test]
    fn records_hold_pre_update_bracket() {
        let trace = solve(&parabola(), [0.0, 3.0], &Config::default()).expect("should solve");

        // First midpoint is 1.5; f(0) and f(1.5) are both negative,
        // so the bracket moves to [1.5, 3] for the second record.
        assert_relative_eq!(trace[0].a, 0.0);
        assert_relative_eq!(trace[0].b, 3.0);
        assert_relative_eq!(trace[0].x_root, 1.5);
        assert_relative_eq!(trace[1].a, 1.5);
        assert_relative_eq!(trace[1].b, 3.0);
    }

    #[test]
    fn stops_on_exact_zero() {
        let trace = solve(&parabola(), [0.0, 4.0], &Config::default()).expect("should solve");

        assert_eq!(trace.len(), 1);
        assert_relative_eq!(trace[0].x_root, 2.0);
        assert_relative_eq!(trace[0].f_x_root, 0.0);
        assert_eq!(trace[0].approx_error, None);
    }

    #[test]
    fn cap_exhaustion_returns_trace_silently() {
        let config = Config {
            max_iters: 3,
            ..Config::default()
        };
        let trace = solve(&parabola(), [0.0, 3.0], &config).expect("should not error");

        assert_eq!(trace.len(), 3);
        let last = trace.last().expect("non-empty trace");
        assert!(last.approx_error.expect("second or later") >= config.tolerance);
    }

    #[test]
    fn errors_on_no_sign_change() {
        let result = solve(&parabola(), [5.0, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn root_at_endpoint_is_no_sign_change() {
        // f(2) = 0 makes the product zero, which the precondition
        // rejects rather than treating as a solved problem.
        let result = solve(&parabola(), [2.0, 3.0], &Config::default());
        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            tolerance: 0.0,
            ..Config::default()
        };
        let result = solve(&parabola(), [0.0, 3.0], &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
