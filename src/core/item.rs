//! The `Item` trait every evolving budget quantity implements.
//!
//! An item owns a current state (its *prior*) and knows how to advance it.
//! Constants, Markov chains and recurrences all share this capability set,
//! which is all the [`Budget`](crate::Budget) relies on.

use super::label::Label;

/// Number of steps used by [`Item::simulate_default`].
pub const DEFAULT_STEPS: usize = 10;

/// A single step's observation: the label and the value it carries.
pub type Observation<V> = (Label<V>, V);

/// A trajectory: labels and values, aligned step by step.
pub type Trajectory<V> = (Vec<Label<V>>, Vec<V>);

/// Trait for simulated budget items.
///
/// `transition` advances the item by one step and updates its prior as a
/// side effect. `simulate` chains `n` transitions in strict order, so step
/// `t` always sees the result of step `t - 1`.
///
/// The trait is object safe; a [`Budget`](crate::Budget) stores items as
/// `&mut dyn Item<V>`.
///
/// # Example
///
/// ```rust
/// use budget_sim::core::{Item, Label};
///
/// /// Grows by a fixed amount every step.
/// struct Savings {
///     balance: f64,
/// }
///
/// impl Item<f64> for Savings {
///     fn name(&self) -> &str {
///         "savings"
///     }
///
///     fn transition(&mut self) -> (Label<f64>, f64) {
///         self.balance += 100.0;
///         (Label::Value(self.balance), self.balance)
///     }
/// }
///
/// let mut savings = Savings { balance: 0.0 };
/// let (labels, values) = savings.simulate(3);
///
/// assert_eq!(values, vec![100.0, 200.0, 300.0]);
/// assert_eq!(labels[2], Label::Value(300.0));
/// ```
pub trait Item<V> {
    /// The item's name, used as its column in budget tables.
    fn name(&self) -> &str;

    /// Advance one step and return the new observation.
    fn transition(&mut self) -> Observation<V>;

    /// Advance `n` steps, collecting labels and values in generation order.
    ///
    /// Overrides must return exactly `n` labels and `n` values;
    /// [`Budget::simulate`](crate::Budget::simulate) panics otherwise.
    fn simulate(&mut self, n: usize) -> Trajectory<V> {
        let mut labels = Vec::with_capacity(n);
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            let (label, value) = self.transition();
            labels.push(label);
            values.push(value);
        }
        (labels, values)
    }

    /// Advance [`DEFAULT_STEPS`] steps.
    fn simulate_default(&mut self) -> Trajectory<V> {
        self.simulate(DEFAULT_STEPS)
    }
}
