use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Evaluation may fail (domain violations, overflow, a parser backing
/// the capability rejecting the point). Solvers treat any error as
/// fatal and propagate it with the iteration where it occurred.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot produce a value at `x`.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for fallible closures.
impl<F, E> Function for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn eval(&self, x: f64) -> Result<f64, E> {
        self(x)
    }
}

/// Adapts an infallible closure into a [`Function`].
///
/// Most hand-written functions cannot fail; this wrapper saves callers
/// from spelling out `Ok::<_, Infallible>(..)` at every use.
#[derive(Debug, Clone, Copy)]
pub struct RealFn<F>(F);

impl<F> RealFn<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Function for RealFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Infallible> {
        Ok((self.0)(x))
    }
}
