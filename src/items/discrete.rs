//! Items driven by a finite-state Markov chain.

use crate::builder::DiscreteItemBuilder;
use crate::core::{Item, Label, Observation};
use crate::matrix::TransitionMatrix;
use rand::rngs::StdRng;
use rand::Rng;

/// An item whose state is one of a fixed set of named labels.
///
/// Each label carries a payload (a dollar amount, say). On every step the
/// next label is drawn from the transition matrix row of the current label;
/// the label becomes the new prior and its payload is the observed value.
///
/// Build one with [`DiscreteItem::builder`].
///
/// # Example
///
/// ```rust
/// use budget_sim::core::{Item, Label};
/// use budget_sim::items::DiscreteItem;
///
/// // Once in "A", the chain never leaves it.
/// let mut item = DiscreteItem::builder("bonus")
///     .state("A", 1)
///     .state("B", 2)
///     .matrix(vec![vec![1.0, 0.0], vec![1.0, 0.0]])
///     .init("B")
///     .build()
///     .unwrap();
///
/// let (labels, values) = item.simulate(3);
/// assert_eq!(labels, vec![Label::state("A"); 3]);
/// assert_eq!(values, vec![1, 1, 1]);
/// assert_eq!(item.prior(), "A");
/// ```
pub struct DiscreteItem<V, R = StdRng> {
    name: String,
    labels: Vec<String>,
    payloads: Vec<V>,
    matrix: TransitionMatrix,
    prior: usize,
    rng: R,
}

impl<V> DiscreteItem<V, StdRng> {
    /// Start building a categorical item.
    pub fn builder(name: impl Into<String>) -> DiscreteItemBuilder<V, StdRng> {
        DiscreteItemBuilder::new(name)
    }
}

impl<V, R> DiscreteItem<V, R> {
    pub(crate) fn from_parts(
        name: String,
        labels: Vec<String>,
        payloads: Vec<V>,
        matrix: TransitionMatrix,
        prior: usize,
        rng: R,
    ) -> Self {
        Self {
            name,
            labels,
            payloads,
            matrix,
            prior,
            rng,
        }
    }

    /// The label of the current state.
    pub fn prior(&self) -> &str {
        &self.labels[self.prior]
    }

    /// Labels and payloads in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &V)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.payloads.iter())
    }

    /// Payload associated with `label`, if it is a declared state.
    pub fn payload(&self, label: &str) -> Option<&V> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| &self.payloads[i])
    }

    /// The effective (already broadcast) transition matrix.
    pub fn transition_matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }
}

impl<V: Clone, R: Rng> Item<V> for DiscreteItem<V, R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn transition(&mut self) -> Observation<V> {
        let next = self.matrix.sample(self.prior, &mut self.rng);
        self.prior = next;
        (
            Label::State(self.labels[next].clone()),
            self.payloads[next].clone(),
        )
    }
}
