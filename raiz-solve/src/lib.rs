//! Iterative root-finding methods with full iteration traces.
//!
//! Five classical methods, each a standalone `solve` function:
//! [`bisection`], [`false_position`], [`fixed_point`],
//! [`newton_raphson`], and [`secant`]. All of them share one contract:
//! given a [`Function`](raiz_core::Function), starting data, and a
//! [`Config`], they return the ordered trace of every iteration
//! performed. Each module defines its own `Iteration` record because
//! the methods expose different intermediate state.
//!
//! A solve ends one of three ways:
//!
//! - **Convergence** — the approximate error of an iteration drops
//!   below `Config::tolerance`; the trace ends at that iteration.
//! - **A fatal [`Error`]** — invalid config, a bracket without a sign
//!   change, a vanishing derivative or denominator, or a failed
//!   function evaluation. The partial trace is discarded.
//! - **Cap exhaustion** — `Config::max_iters` iterations without
//!   convergence. This is *not* an error: the full trace is returned
//!   and the last record holds the best available estimate. Callers
//!   that care can compare the last record's `approx_error` against
//!   the tolerance.
//!
//! Solvers are pure: they hold no state across calls, and identical
//! inputs produce identical traces.

mod config;
mod convergence;
mod error;
mod evaluate;

pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod newton_raphson;
pub mod secant;

pub use config::Config;
pub use convergence::{percent_error, percent_error_or_abs};
pub use error::Error;
