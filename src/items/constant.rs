//! Items whose value never changes.

use crate::core::{Item, Label, Observation, Trajectory};

/// An item that re-emits the same value on every step.
///
/// # Example
///
/// ```rust
/// use budget_sim::core::{Item, Label};
/// use budget_sim::items::ConstantItem;
///
/// let mut rent = ConstantItem::new("rent", -1200.0);
/// let (labels, values) = rent.simulate(3);
///
/// assert_eq!(values, vec![-1200.0; 3]);
/// assert_eq!(labels, vec![Label::Value(-1200.0); 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantItem<V> {
    name: String,
    value: V,
}

impl<V> ConstantItem<V> {
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The constant value. Also the item's prior at every step.
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: Clone> Item<V> for ConstantItem<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn transition(&mut self) -> Observation<V> {
        (Label::Value(self.value.clone()), self.value.clone())
    }

    fn simulate(&mut self, n: usize) -> Trajectory<V> {
        (
            vec![Label::Value(self.value.clone()); n],
            vec![self.value.clone(); n],
        )
    }
}
