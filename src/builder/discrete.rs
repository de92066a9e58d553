//! Builder for categorical (Markov) items.

use crate::builder::error::BuildError;
use crate::builder::Initial;
use crate::config::SimConfig;
use crate::items::DiscreteItem;
use crate::matrix::{TransitionMatrix, ROW_SUM_TOLERANCE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

enum MatrixSource {
    Rows(Vec<Vec<f64>>),
    Built(TransitionMatrix),
}

/// Builder for [`DiscreteItem`] with a fluent API.
///
/// States are declared in order with [`state`](Self::state); that order is
/// the row and column order of the transition matrix.
pub struct DiscreteItemBuilder<V, R = StdRng> {
    name: String,
    states: Vec<(String, V)>,
    matrix: Option<MatrixSource>,
    tolerance: f64,
    init: Option<Initial<String>>,
    rng: R,
}

impl<V> DiscreteItemBuilder<V, StdRng> {
    /// Create a new builder seeded from the operating system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            matrix: None,
            tolerance: ROW_SUM_TOLERANCE,
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

impl<V, R: Rng> DiscreteItemBuilder<V, R> {
    /// Add a state and its payload.
    pub fn state(mut self, label: impl Into<String>, payload: V) -> Self {
        self.states.push((label.into(), payload));
        self
    }

    /// Add several states at once, in iteration order.
    pub fn states<I, L>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
    {
        self.states
            .extend(states.into_iter().map(|(label, payload)| (label.into(), payload)));
        self
    }

    /// Set the transition matrix rows (required).
    ///
    /// A single row or single column is broadcast to a square matrix.
    pub fn matrix(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.matrix = Some(MatrixSource::Rows(rows));
        self
    }

    /// Use an already validated transition matrix.
    pub fn transition_matrix(mut self, matrix: TransitionMatrix) -> Self {
        self.matrix = Some(MatrixSource::Built(matrix));
        self
    }

    /// Tolerance for the row-sum check on rows passed to [`matrix`](Self::matrix).
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Take the row-sum tolerance from `config`.
    pub fn config(self, config: &SimConfig) -> Self {
        self.tolerance(config.tolerance())
    }

    /// Start in `label`.
    pub fn init(mut self, label: impl Into<String>) -> Self {
        self.init = Some(Initial::Value(label.into()));
        self
    }

    /// Start in the label returned by `f`, called once during `build()`.
    pub fn init_with<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String + 'static,
    {
        self.init = Some(Initial::With(Box::new(f)));
        self
    }

    /// Draw transitions from `rng` instead.
    pub fn rng<R2: Rng>(self, rng: R2) -> DiscreteItemBuilder<V, R2> {
        DiscreteItemBuilder {
            name: self.name,
            states: self.states,
            matrix: self.matrix,
            tolerance: self.tolerance,
            init: self.init,
            rng,
        }
    }

    /// Build the item.
    ///
    /// Without an initial label, one is drawn uniformly from the states.
    pub fn build(self) -> Result<DiscreteItem<V, R>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut seen = HashSet::new();
        for (label, _) in &self.states {
            if !seen.insert(label.as_str()) {
                return Err(BuildError::DuplicateState {
                    label: label.clone(),
                });
            }
        }

        let matrix = match self.matrix.ok_or(BuildError::MissingMatrix)? {
            MatrixSource::Rows(rows) => TransitionMatrix::with_tolerance(rows, self.tolerance)?,
            MatrixSource::Built(matrix) => matrix,
        };

        if matrix.dim() != self.states.len() {
            return Err(BuildError::DimensionMismatch {
                states: self.states.len(),
                dim: matrix.dim(),
            });
        }

        let (labels, payloads): (Vec<String>, Vec<V>) = self.states.into_iter().unzip();
        let mut rng = self.rng;

        let prior = match self.init {
            Some(init) => {
                let label = init.resolve();
                labels
                    .iter()
                    .position(|l| *l == label)
                    .ok_or(BuildError::UnknownInitialState { label })?
            }
            None => rng.random_range(0..labels.len()),
        };

        debug!(
            item = %self.name,
            states = labels.len(),
            initial = %labels[prior],
            "built discrete item"
        );

        Ok(DiscreteItem::from_parts(
            self.name, labels, payloads, matrix, prior, rng,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::MatrixViolation;

    fn two_states() -> DiscreteItemBuilder<i32> {
        DiscreteItemBuilder::new("item").state("A", 1).state("B", 2)
    }

    #[test]
    fn builder_requires_states() {
        let result = DiscreteItemBuilder::<i32>::new("empty")
            .matrix(vec![vec![1.0]])
            .build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_rejects_duplicate_labels() {
        let result = two_states()
            .state("A", 3)
            .matrix(vec![vec![0.2, 0.3, 0.5]])
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::DuplicateState {
                label: "A".to_string()
            })
        );
    }

    #[test]
    fn builder_requires_matrix() {
        let result = two_states().build();
        assert!(matches!(result, Err(BuildError::MissingMatrix)));
    }

    #[test]
    fn builder_rejects_dimension_mismatch() {
        let result = two_states()
            .matrix(vec![vec![0.2, 0.3, 0.5]])
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::DimensionMismatch { states: 2, dim: 3 })
        );
    }

    #[test]
    fn builder_rejects_non_square_matrix() {
        let result = two_states()
            .state("C", 3)
            .matrix(vec![vec![0.2, 0.3, 0.5], vec![0.2, 0.3, 0.5]])
            .build();

        match result {
            Err(BuildError::MalformedMatrix(err)) => assert_eq!(
                err.violations(),
                &[MatrixViolation::NotSquare { rows: 2, cols: 3 }]
            ),
            other => panic!("expected malformed matrix, got {:?}", other.err()),
        }
    }

    #[test]
    fn builder_rejects_bad_row_sum() {
        let result = two_states()
            .matrix(vec![vec![0.5, 0.5], vec![0.5, 0.499999]])
            .build();

        assert!(matches!(result, Err(BuildError::MalformedMatrix(_))));
    }

    #[test]
    fn exact_tolerance_is_configurable() {
        let result = two_states()
            .matrix(vec![vec![0.5, 0.4999999999]])
            .tolerance(0.0)
            .build();
        assert!(result.is_err());

        let result = two_states()
            .matrix(vec![vec![0.5, 0.4999999999]])
            .tolerance(1e-6)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn builder_rejects_unknown_initial_label() {
        let result = two_states()
            .matrix(vec![vec![0.5, 0.5]])
            .init("C")
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::UnknownInitialState {
                label: "C".to_string()
            })
        );
    }

    #[test]
    fn init_with_is_called_once_at_build() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let item = two_states()
            .matrix(vec![vec![0.5, 0.5]])
            .init_with(move || {
                counter.set(counter.get() + 1);
                "B".to_string()
            })
            .build()
            .unwrap();

        assert_eq!(item.prior(), "B");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn missing_init_draws_a_declared_label() {
        for seed in 0..20 {
            let item = two_states()
                .matrix(vec![vec![0.5, 0.5]])
                .seed(seed)
                .build()
                .unwrap();
            assert!(["A", "B"].contains(&item.prior()));
        }
    }

    #[test]
    fn missing_init_covers_every_label() {
        let priors: HashSet<String> = (0..64)
            .map(|seed| {
                two_states()
                    .matrix(vec![vec![0.5, 0.5]])
                    .seed(seed)
                    .build()
                    .unwrap()
                    .prior()
                    .to_string()
            })
            .collect();

        assert_eq!(priors.len(), 2);
    }

    #[test]
    fn accepts_prebuilt_matrix() {
        let matrix = TransitionMatrix::new(vec![vec![0.1, 0.9], vec![0.9, 0.1]]).unwrap();
        let item = two_states()
            .transition_matrix(matrix.clone())
            .init("A")
            .build()
            .unwrap();

        assert_eq!(item.transition_matrix(), &matrix);
    }

    #[test]
    fn states_extends_in_order() {
        let item = DiscreteItemBuilder::new("bulk")
            .states(vec![("Low", 1.0), ("Mid", 2.0), ("High", 3.0)])
            .matrix(vec![vec![0.2], vec![0.5], vec![0.3]])
            .init("Mid")
            .build()
            .unwrap();

        let labels: Vec<&str> = item.states().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Low", "Mid", "High"]);
        assert_eq!(item.transition_matrix().row(2), &[0.2, 0.5, 0.3]);
    }

    #[test]
    fn config_supplies_tolerance() {
        let strict = SimConfig::new().with_tolerance(0.0);
        let result = two_states()
            .matrix(vec![vec![0.5, 0.4999999999]])
            .config(&strict)
            .build();

        assert!(matches!(result, Err(BuildError::MalformedMatrix(_))));
    }

    #[test]
    fn loose_tolerance_cannot_admit_a_dead_row() {
        let result = two_states()
            .matrix(vec![vec![0.0, 1.0], vec![0.0, 0.0]])
            .tolerance(1.0)
            .init("B")
            .build();

        match result {
            Err(BuildError::MalformedMatrix(err)) => assert!(matches!(
                err.violations(),
                [MatrixViolation::InvalidTolerance { .. }]
            )),
            other => panic!("expected malformed matrix, got {:?}", other.err()),
        }
    }
}
