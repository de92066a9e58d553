//! Transition matrix error types.

use thiserror::Error;

/// A single problem found while validating a transition matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixViolation {
    /// No rows, or rows without columns
    #[error("matrix is empty")]
    Empty,

    /// A row whose length differs from the first row
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Still not square after broadcasting a single row or column
    #[error("matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    /// An entry that is not a probability
    #[error("entry [{row}][{col}] = {value} is not a probability in [0, 1]")]
    InvalidEntry { row: usize, col: usize, value: f64 },

    /// A row whose probabilities do not add up to one
    #[error("row {row} sums to {sum}, expected 1.0")]
    RowSum { row: usize, sum: f64 },

    /// The row-sum tolerance itself is unusable
    #[error("tolerance {tolerance} must lie in [0, 0.001)")]
    InvalidTolerance { tolerance: f64 },
}

/// Every violation found in a rejected transition matrix.
///
/// Shape problems stop validation immediately and are reported alone;
/// entry and row-sum problems are collected across the whole matrix.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed transition matrix: {}", describe(.violations))]
pub struct MatrixError {
    violations: Vec<MatrixViolation>,
}

impl MatrixError {
    pub(crate) fn new(violations: Vec<MatrixViolation>) -> Self {
        Self { violations }
    }

    pub(crate) fn single(violation: MatrixViolation) -> Self {
        Self::new(vec![violation])
    }

    /// All recorded violations, in discovery order.
    pub fn violations(&self) -> &[MatrixViolation] {
        &self.violations
    }
}

fn describe(violations: &[MatrixViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
