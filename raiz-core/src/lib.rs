//! Core capability for the `raiz` root-finding crates.
//!
//! A solver never inspects the textual form of the function it is
//! given; it only calls it. The [`Function`] trait is that seam: a
//! fallible map from one real number to another. Anything that parses,
//! composes, or differentiates expressions lives behind it.

mod function;

pub use function::{Function, RealFn};
