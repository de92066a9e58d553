//! Builder API for item construction.
//!
//! Builders collect configuration, then validate everything in `build()`.
//! A failed build returns a [`BuildError`] and no item, so simulation code
//! never has to handle malformed input.

pub mod continuous;
pub mod discrete;
pub mod error;
pub mod macros;

pub use continuous::ContinuousItemBuilder;
pub use discrete::DiscreteItemBuilder;
pub use error::BuildError;

/// An initial state: given directly, or produced by a zero-argument closure.
pub(crate) enum Initial<T> {
    Value(T),
    With(Box<dyn FnOnce() -> T>),
}

impl<T> Initial<T> {
    pub(crate) fn resolve(self) -> T {
        match self {
            Initial::Value(value) => value,
            Initial::With(f) => f(),
        }
    }
}
