//! Labels attached to every observation an item produces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The label half of a `(label, value)` observation.
///
/// Categorical items report the name of the state they moved into, while
/// items without distinct labels (constants, recurrences) report the value
/// itself.
///
/// Serializes untagged, so a state label appears as a plain string and a
/// value label as the value's own representation. Deserializing tries
/// `State` first: when `V` is itself a string, a `Value` label reads back as
/// a `State` label with the same text.
///
/// # Example
///
/// ```rust
/// use budget_sim::core::Label;
///
/// let state: Label<f64> = Label::state("Wet");
/// let value = Label::Value(12.5);
///
/// assert_eq!(state.as_state(), Some("Wet"));
/// assert_eq!(value.as_value(), Some(&12.5));
/// assert_eq!(state.to_string(), "Wet");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label<V> {
    /// A named categorical state
    State(String),
    /// The observed value doubles as its own label
    Value(V),
}

impl<V> Label<V> {
    /// Create a state label from anything string-like.
    pub fn state(name: impl Into<String>) -> Self {
        Label::State(name.into())
    }

    /// The state name, if this is a categorical label.
    pub fn as_state(&self) -> Option<&str> {
        match self {
            Label::State(name) => Some(name),
            Label::Value(_) => None,
        }
    }

    /// The value, if this label mirrors a value.
    pub fn as_value(&self) -> Option<&V> {
        match self {
            Label::State(_) => None,
            Label::Value(value) => Some(value),
        }
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Label::State(_))
    }
}

impl<V: fmt::Display> fmt::Display for Label<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::State(name) => f.write_str(name),
            Label::Value(value) => value.fmt(f),
        }
    }
}
