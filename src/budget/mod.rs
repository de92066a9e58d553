//! Budgets: items advanced together and reshaped into aligned tables.
//!
//! A [`Budget`] mutably borrows each item for its own lifetime. Items keep
//! their state between calls, and when the budget is dropped the caller
//! sees every prior as the budget left it.

mod run;
mod timeline;

pub use run::SimulationRun;
pub use timeline::{TableError, Timeline, INDEX_NAME};

use crate::config::SimConfig;
use crate::core::{Item, Label, DEFAULT_STEPS};
use tracing::debug;

/// An ordered collection of items driven in lockstep.
///
/// Item order is fixed at construction and is the column order of every
/// table a budget produces. Names are not checked for uniqueness.
///
/// # Example
///
/// ```rust
/// use budget_sim::budget;
/// use budget_sim::items::{ConstantItem, ContinuousItem};
///
/// let mut rent = ConstantItem::new("rent", -1200.0);
/// let mut savings = ContinuousItem::builder("savings")
///     .recurrence_from_prior(|prior: &f64, _| prior + 250.0)
///     .init(0.0)
///     .build()
///     .unwrap();
///
/// let mut budget = budget![&mut rent, &mut savings];
/// let (labels, values) = budget.simulate(4);
///
/// assert_eq!(values.columns(), &["rent", "savings"]);
/// assert_eq!(values.n_rows(), 4);
/// assert_eq!(labels.n_cols(), 2);
/// assert_eq!(values.column("savings"), Some(&[250.0, 500.0, 750.0, 1000.0][..]));
/// ```
pub struct Budget<'a, V> {
    items: Vec<&'a mut (dyn Item<V> + 'a)>,
}

impl<'a, V> Budget<'a, V> {
    pub fn new(items: Vec<&'a mut (dyn Item<V> + 'a)>) -> Self {
        Self { items }
    }

    /// A budget with no items; add them with [`with_item`](Self::with_item).
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item.
    pub fn with_item<I: Item<V> + 'a>(mut self, item: &'a mut I) -> Self {
        self.items.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names in budget order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }

    /// Advance every item one step, in budget order.
    ///
    /// Returns labels and values aligned to item order.
    pub fn transition(&mut self) -> (Vec<Label<V>>, Vec<V>) {
        self.items.iter_mut().map(|item| item.transition()).unzip()
    }

    /// Run each item for `n` steps and assemble the label and value tables.
    ///
    /// Every item runs its whole trajectory before the next one starts.
    /// Both tables have `n` rows and one column per item.
    ///
    /// # Panics
    ///
    /// Panics if an [`Item`] implementation returns a trajectory whose
    /// length is not `n`.
    #[tracing::instrument(skip_all, fields(items = self.items.len(), steps = n))]
    pub fn simulate(&mut self, n: usize) -> (Timeline<Label<V>>, Timeline<V>) {
        let mut labels = Timeline::with_rows(n);
        let mut values = Timeline::with_rows(n);

        for item in self.items.iter_mut() {
            let (item_labels, item_values) = item.simulate(n);
            let name = item.name().to_string();
            assert!(
                item_labels.len() == n && item_values.len() == n,
                "item '{name}' returned {} labels and {} values for {n} steps",
                item_labels.len(),
                item_values.len(),
            );

            debug!(item = %name, "simulated item");
            labels.insert_column(name.clone(), item_labels);
            values.insert_column(name, item_values);
        }

        (labels, values)
    }

    /// Run [`DEFAULT_STEPS`] steps; see [`simulate`](Self::simulate).
    pub fn simulate_default(&mut self) -> (Timeline<Label<V>>, Timeline<V>) {
        self.simulate(DEFAULT_STEPS)
    }

    /// Simulate `config.steps()` steps and wrap the tables in a run record.
    pub fn run(&mut self, config: &SimConfig) -> SimulationRun<V> {
        let steps = config.steps();
        let (labels, values) = self.simulate(steps);
        let run = SimulationRun::new(steps, labels, values);
        debug!(run_id = %run.id, steps, items = self.items.len(), "simulation run complete");
        run
    }
}

impl<'a, V> Default for Budget<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}
