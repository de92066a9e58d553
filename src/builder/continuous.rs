//! Builder for recurrence-driven items.

use crate::builder::error::BuildError;
use crate::builder::Initial;
use crate::items::{ContinuousItem, Recurrence, Stepper};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

/// Builder for [`ContinuousItem`] with a fluent API.
///
/// Exactly one of [`recurrence`](Self::recurrence) or
/// [`recurrence_from_prior`](Self::recurrence_from_prior) must be called.
/// The second form requires an initial value.
pub struct ContinuousItemBuilder<V, R = StdRng> {
    name: String,
    recurrence: Option<Recurrence<V>>,
    init: Option<Initial<V>>,
    rng: R,
}

impl<V> ContinuousItemBuilder<V, StdRng> {
    /// Create a new builder seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            recurrence: None,
            init: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a `StdRng` seeded with `seed`, for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<V, R: Rng> ContinuousItemBuilder<V, R> {
    /// Next value ignores the current one.
    pub fn recurrence<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut dyn RngCore) -> V + Send + 'static,
    {
        self.recurrence = Some(Recurrence::Independent(Box::new(f)));
        self
    }

    /// Next value is computed from the current one.
    pub fn recurrence_from_prior<F>(mut self, f: F) -> Self
    where
        F: FnMut(&V, &mut dyn RngCore) -> V + Send + 'static,
    {
        self.recurrence = Some(Recurrence::FromPrior(Box::new(f)));
        self
    }

    /// Start from `value`.
    pub fn init(mut self, value: V) -> Self {
        self.init = Some(Initial::Value(value));
        self
    }

    /// Start from the value returned by `f`, called once during `build()`.
    pub fn init_with<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> V + 'static,
    {
        self.init = Some(Initial::With(Box::new(f)));
        self
    }

    /// Pass `rng` to the recurrence instead.
    pub fn rng<R2: Rng>(self, rng: R2) -> ContinuousItemBuilder<V, R2> {
        ContinuousItemBuilder {
            name: self.name,
            recurrence: self.recurrence,
            init: self.init,
            rng,
        }
    }

    /// Build the item.
    pub fn build(self) -> Result<ContinuousItem<V, R>, BuildError> {
        let recurrence = self.recurrence.ok_or(BuildError::MissingRecurrence)?;

        let initial = self.init.map(Initial::resolve);
        let has_initial = initial.is_some();
        let state = Stepper::new(recurrence, initial)
            .map_err(|_| BuildError::MissingInitialValue {
                name: self.name.clone(),
            })?;

        debug!(
            item = %self.name,
            depends_on_prior = matches!(state, Stepper::FromPrior { .. }),
            has_initial,
            "built continuous item"
        );

        Ok(ContinuousItem::from_parts(self.name, state, self.rng))
    }
}
