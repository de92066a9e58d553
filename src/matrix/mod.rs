//! Row-stochastic transition matrices for categorical items.
//!
//! A [`TransitionMatrix`] is validated once, at construction, and is then
//! only read. Row `i` is the distribution of the next state given that the
//! current state is `i`.
//!
//! # Broadcasting
//!
//! A single row (`1 x k`) or a single column (`k x 1`) is repeated into a
//! `k x k` matrix, so every state shares the same unconditional
//! distribution.
//!
//! ```rust
//! use budget_sim::matrix::TransitionMatrix;
//!
//! let homogeneous = TransitionMatrix::new(vec![vec![0.25, 0.75]]).unwrap();
//! let explicit = TransitionMatrix::new(vec![vec![0.25, 0.75], vec![0.25, 0.75]]).unwrap();
//!
//! assert_eq!(homogeneous, explicit);
//! assert_eq!(homogeneous.dim(), 2);
//! ```

mod error;

pub use error::{MatrixError, MatrixViolation};

use rand::Rng;
use serde::Serialize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Default absolute tolerance when checking that rows sum to 1.0.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Exclusive upper bound on any row-sum tolerance.
pub const MAX_ROW_SUM_TOLERANCE: f64 = 1e-3;

/// Whether `tolerance` lies in `[0, MAX_ROW_SUM_TOLERANCE)`.
pub(crate) fn is_valid_tolerance(tolerance: f64) -> bool {
    (0.0..MAX_ROW_SUM_TOLERANCE).contains(&tolerance)
}

type Check = Validation<(), NonEmptyVec<MatrixViolation>>;

/// A validated square row-stochastic matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionMatrix {
    rows: Vec<Vec<f64>>,
}

impl TransitionMatrix {
    /// Build a matrix using [`ROW_SUM_TOLERANCE`].
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        Self::with_tolerance(rows, ROW_SUM_TOLERANCE)
    }

    /// Build a matrix, accepting rows whose sum is within `tolerance` of 1.0.
    ///
    /// A tolerance of `0.0` demands exact equality. Tolerances must be below
    /// [`MAX_ROW_SUM_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Shape problems (empty, ragged, not square after broadcasting) are
    /// reported as soon as they are found. Otherwise every out-of-range entry
    /// and every bad row sum is collected into one [`MatrixError`].
    pub fn with_tolerance(rows: Vec<Vec<f64>>, tolerance: f64) -> Result<Self, MatrixError> {
        if !is_valid_tolerance(tolerance) {
            return Err(MatrixError::single(MatrixViolation::InvalidTolerance {
                tolerance,
            }));
        }

        check_shape(&rows)?;
        let rows = broadcast(rows);

        let n_rows = rows.len();
        let n_cols = rows[0].len();
        if n_rows != n_cols {
            return Err(MatrixError::single(MatrixViolation::NotSquare {
                rows: n_rows,
                cols: n_cols,
            }));
        }

        match check_probabilities(&rows, tolerance) {
            Validation::Success(_) => Ok(Self { rows }),
            Validation::Failure(errors) => {
                Err(MatrixError::new(errors.iter().cloned().collect()))
            }
        }
    }

    /// Number of states the matrix covers.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Distribution of the next state given current state `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= self.dim()`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.rows[from]
    }

    /// Probability of moving from `from` to `to`.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// All rows, in state order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Draw the next state index given the current one.
    ///
    /// Walks the row's cumulative distribution with a single uniform draw
    /// scaled to the row's sum, so a row accepted within the tolerance is
    /// sampled as its normalized distribution. States with zero probability
    /// are never returned; rounding shortfalls fall back to the last state
    /// with positive probability.
    pub fn sample<R: Rng + ?Sized>(&self, from: usize, rng: &mut R) -> usize {
        let row = &self.rows[from];
        let total: f64 = row.iter().sum();
        let u = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut last_positive = 0;
        for (to, &p) in row.iter().enumerate() {
            if p > 0.0 {
                last_positive = to;
            }
            cumulative += p;
            if u < cumulative {
                return to;
            }
        }
        last_positive
    }
}

fn check_shape(rows: &[Vec<f64>]) -> Result<(), MatrixError> {
    let Some(first) = rows.first() else {
        return Err(MatrixError::single(MatrixViolation::Empty));
    };
    if first.is_empty() {
        return Err(MatrixError::single(MatrixViolation::Empty));
    }
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != first.len() {
            return Err(MatrixError::single(MatrixViolation::RaggedRow {
                row: i,
                expected: first.len(),
                got: row.len(),
            }));
        }
    }
    Ok(())
}

/// Repeats a lone row, or a lone column read as a row, into a square matrix.
fn broadcast(rows: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    if rows.len() == 1 {
        let row = &rows[0];
        debug!(states = row.len(), "broadcasting single row");
        return vec![row.clone(); row.len()];
    }
    if rows[0].len() == 1 {
        let row: Vec<f64> = rows.iter().map(|r| r[0]).collect();
        debug!(states = row.len(), "broadcasting single column");
        return vec![row.clone(); row.len()];
    }
    rows
}

fn check_probabilities(rows: &[Vec<f64>], tolerance: f64) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let check = if value.is_finite() && (0.0..=1.0).contains(&value) {
                Validation::success(())
            } else {
                Validation::fail(MatrixViolation::InvalidEntry {
                    row: i,
                    col: j,
                    value,
                })
            };
            checks.push(check);
        }

        let sum: f64 = row.iter().sum();
        // A NaN sum fails this comparison as well.
        let check = if (sum - 1.0).abs() <= tolerance {
            Validation::success(())
        } else {
            Validation::fail(MatrixViolation::RowSum { row: i, sum })
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
