//! Build errors for item builders.

use crate::matrix::MatrixError;
use thiserror::Error;

/// Errors that can occur when building items.
///
/// Every check runs inside `build()`, so a returned item is always valid and
/// `transition`/`simulate` never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("No states defined. Add at least one with .state(label, payload)")]
    NoStates,

    #[error("State '{label}' is defined more than once")]
    DuplicateState { label: String },

    #[error("Transition matrix not specified. Call .matrix(rows)")]
    MissingMatrix,

    #[error(transparent)]
    MalformedMatrix(#[from] MatrixError),

    #[error("{states} states do not match a {dim}x{dim} transition matrix")]
    DimensionMismatch { states: usize, dim: usize },

    #[error("Initial state '{label}' is not one of the declared states")]
    UnknownInitialState { label: String },

    #[error("Recurrence not specified. Call .recurrence(f) or .recurrence_from_prior(f)")]
    MissingRecurrence,

    #[error("Recurrence for '{name}' depends on its prior, so an initial value is required")]
    MissingInitialValue { name: String },
}
