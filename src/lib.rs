//! Budget Sim: a composable discrete-time stochastic simulator
//!
//! A budget is a set of items, each a small random process with its own
//! evolution rule. Items are advanced one step at a time or simulated over
//! many steps, and a [`Budget`] lines their outputs up into time-indexed
//! tables.
//!
//! # Core Concepts
//!
//! - **Item**: anything that can `transition` and `simulate` via the `Item` trait
//! - **ConstantItem**: a fixed amount
//! - **DiscreteItem**: named states driven by a validated transition matrix
//! - **ContinuousItem**: a recurrence, optionally depending on the last value
//! - **Budget**: items in lockstep, reshaped into label and value tables
//!
//! Every item is validated when it is built; simulation itself cannot fail.
//!
//! # Example
//!
//! ```rust
//! use budget_sim::budget;
//! use budget_sim::items::{ConstantItem, ContinuousItem, DiscreteItem};
//!
//! let mut salary = ConstantItem::new("salary", 3000.0);
//!
//! let mut groceries = DiscreteItem::builder("groceries")
//!     .state("Frugal", -300.0)
//!     .state("Normal", -450.0)
//!     .state("Feast", -700.0)
//!     .matrix(vec![
//!         vec![0.6, 0.3, 0.1],
//!         vec![0.2, 0.6, 0.2],
//!         vec![0.1, 0.6, 0.3],
//!     ])
//!     .init("Normal")
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut rent = ContinuousItem::builder("rent")
//!     .recurrence_from_prior(|prior: &f64, _| prior * 1.002)
//!     .init(-1200.0)
//!     .build()
//!     .unwrap();
//!
//! let mut budget = budget![&mut salary, &mut groceries, &mut rent];
//! let (labels, values) = budget.simulate(12);
//!
//! assert_eq!(values.n_rows(), 12);
//! assert_eq!(labels.columns(), &["salary", "groceries", "rent"]);
//! assert_eq!(values.row_totals().len(), 12);
//! ```

pub mod budget;
pub mod builder;
pub mod config;
pub mod core;
pub mod items;
pub mod matrix;

// Re-export commonly used types
pub use budget::{Budget, SimulationRun, Timeline};
pub use builder::BuildError;
pub use config::SimConfig;
pub use core::{Item, Label};
pub use items::{ConstantItem, ContinuousItem, DiscreteItem};
