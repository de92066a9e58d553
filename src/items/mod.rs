//! The three built-in item kinds.
//!
//! - [`ConstantItem`]: the same value every step
//! - [`DiscreteItem`]: named states evolving as a Markov chain
//! - [`ContinuousItem`]: values produced by a recurrence

mod constant;
mod continuous;
mod discrete;

pub use constant::ConstantItem;
pub use continuous::{ContinuousItem, Recurrence};
pub(crate) use continuous::Stepper;
pub use discrete::DiscreteItem;
