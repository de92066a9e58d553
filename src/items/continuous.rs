//! Items driven by a user-supplied recurrence.

use crate::builder::ContinuousItemBuilder;
use crate::core::{Item, Label, Observation};
use rand::rngs::StdRng;
use rand::{Rng, RngCore};

type IndependentFn<V> = Box<dyn FnMut(&mut dyn RngCore) -> V + Send>;
type FromPriorFn<V> = Box<dyn FnMut(&V, &mut dyn RngCore) -> V + Send>;

/// The rule producing a [`ContinuousItem`]'s next value.
///
/// Both forms receive the item's random source; only `FromPrior` sees the
/// current value.
pub enum Recurrence<V> {
    Independent(IndependentFn<V>),
    FromPrior(FromPriorFn<V>),
}

impl<V> Recurrence<V> {
    pub fn depends_on_prior(&self) -> bool {
        matches!(self, Recurrence::FromPrior(_))
    }
}

/// An item whose next value is whatever its recurrence returns.
///
/// Labels mirror values. No check is made on what the recurrence produces.
///
/// # Example
///
/// ```rust
/// use budget_sim::core::Item;
/// use budget_sim::items::ContinuousItem;
///
/// let mut balance = ContinuousItem::builder("balance")
///     .recurrence_from_prior(|prior: &i32, _rng| prior + 1)
///     .init(0)
///     .build()
///     .unwrap();
///
/// let (labels, values) = balance.simulate(5);
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
/// assert_eq!(labels.iter().filter_map(|l| l.as_value()).count(), 5);
/// ```
pub struct ContinuousItem<V, R = StdRng> {
    name: String,
    state: Stepper<V>,
    rng: R,
}

/// A recurrence paired with the value it last produced.
///
/// A prior-dependent recurrence always holds a value.
pub(crate) enum Stepper<V> {
    Independent { f: IndependentFn<V>, prior: Option<V> },
    FromPrior { f: FromPriorFn<V>, prior: V },
}

impl<V> Stepper<V> {
    /// Pair `recurrence` with its initial value.
    ///
    /// Returns the recurrence back when it needs a prior and none was given.
    pub(crate) fn new(
        recurrence: Recurrence<V>,
        initial: Option<V>,
    ) -> Result<Self, Recurrence<V>> {
        match (recurrence, initial) {
            (Recurrence::Independent(f), prior) => Ok(Stepper::Independent { f, prior }),
            (Recurrence::FromPrior(f), Some(prior)) => Ok(Stepper::FromPrior { f, prior }),
            (recurrence @ Recurrence::FromPrior(_), None) => Err(recurrence),
        }
    }
}

impl<V> ContinuousItem<V, StdRng> {
    /// Start building a recurrence-driven item.
    pub fn builder(name: impl Into<String>) -> ContinuousItemBuilder<V, StdRng> {
        ContinuousItemBuilder::new(name)
    }
}

impl<V, R> ContinuousItem<V, R> {
    pub(crate) fn from_parts(name: String, state: Stepper<V>, rng: R) -> Self {
        Self { name, state, rng }
    }

    /// The most recent value, or the initial one. `None` only before the
    /// first step of an item built without an initial value.
    pub fn prior(&self) -> Option<&V> {
        match &self.state {
            Stepper::Independent { prior, .. } => prior.as_ref(),
            Stepper::FromPrior { prior, .. } => Some(prior),
        }
    }

    pub fn depends_on_prior(&self) -> bool {
        matches!(self.state, Stepper::FromPrior { .. })
    }
}

impl<V: Clone, R: Rng> Item<V> for ContinuousItem<V, R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn transition(&mut self) -> Observation<V> {
        let rng: &mut dyn RngCore = &mut self.rng;
        let next = match &mut self.state {
            Stepper::Independent { f, prior } => {
                let next = f(rng);
                *prior = Some(next.clone());
                next
            }
            Stepper::FromPrior { f, prior } => {
                let next = f(&*prior, rng);
                *prior = next.clone();
                next
            }
        };
        (Label::Value(next.clone()), next)
    }
}
