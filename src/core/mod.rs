//! Core item abstraction.
//!
//! This module contains the capability set shared by every simulated item:
//! - The `Item` trait (one step, many steps)
//! - `Label`, the label half of each `(label, value)` observation
//!
//! Concrete items live in [`crate::items`].

mod item;
mod label;

pub use item::{Item, Observation, Trajectory, DEFAULT_STEPS};
pub use label::Label;
