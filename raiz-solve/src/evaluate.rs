use thiserror::Error;

use raiz_core::Function;

use crate::Error as SolveError;

/// The capability produced a value the solvers cannot iterate on.
#[derive(Debug, Error)]
#[error("non-finite value {value}")]
pub(crate) struct NonFinite {
    pub(crate) value: f64,
}

/// Evaluates `f` at `x`, mapping capability failures and non-finite
/// results to [`Error::Evaluation`](crate::Error::Evaluation) tagged
/// with the iteration index.
pub(crate) fn evaluate<F>(f: &F, x: f64, iteration: usize) -> Result<f64, SolveError>
where
    F: Function,
{
    let value = f.eval(x).map_err(|source| SolveError::Evaluation {
        x,
        iteration,
        source: Box::new(source),
    })?;

    if !value.is_finite() {
        return Err(SolveError::Evaluation {
            x,
            iteration,
            source: Box::new(NonFinite { value }),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use raiz_core::RealFn;

    #[test]
    fn passes_finite_values_through() {
        let f = RealFn::new(|x: f64| x + 1.0);
        assert_eq!(evaluate(&f, 1.0, 1).expect("finite"), 2.0);
    }

    #[test]
    fn rejects_non_finite_values_with_iteration_index() {
        let f = RealFn::new(|x: f64| 1.0 / x);
        let err = evaluate(&f, 0.0, 3).expect_err("division blows up");
        assert!(matches!(
            err,
            SolveError::Evaluation { iteration: 3, .. }
        ));
    }
}
