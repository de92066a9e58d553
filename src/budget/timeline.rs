//! Time-indexed tables of per-item observations.

use serde::Serialize;
use std::iter::Sum;
use std::ops::Range;
use thiserror::Error;

/// Name of the row index of every [`Timeline`].
pub const INDEX_NAME: &str = "time";

/// Errors that can occur when assembling a timeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("column '{column}' has {got} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}

/// A table with one named column per item and one row per time step.
///
/// Rows are indexed `0..n_rows()`; columns keep insertion order. Column
/// names are not required to be unique; lookups by name return the first
/// match.
///
/// # Example
///
/// ```rust
/// use budget_sim::budget::Timeline;
///
/// let table = Timeline::from_columns(vec![
///     ("rent", vec![-1200.0, -1200.0]),
///     ("salary", vec![3000.0, 3100.0]),
/// ])
/// .unwrap();
///
/// assert_eq!(table.n_rows(), 2);
/// assert_eq!(table.columns(), &["rent", "salary"]);
/// assert_eq!(table.get(1, "salary"), Some(&3100.0));
/// assert_eq!(table.row_totals(), vec![1800.0, 1900.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timeline<T> {
    index: &'static str,
    n_rows: usize,
    columns: Vec<String>,
    data: Vec<Vec<T>>,
}

impl<T> Timeline<T> {
    /// An empty table with `n_rows` rows and no columns.
    pub fn with_rows(n_rows: usize) -> Self {
        Self {
            index: INDEX_NAME,
            n_rows,
            columns: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Build a table from `(name, values)` pairs.
    ///
    /// The first column fixes the row count; a table with no columns has
    /// no rows.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
    {
        let mut columns = columns.into_iter().peekable();
        let n_rows = columns.peek().map_or(0, |(_, values)| values.len());

        let mut table = Self::with_rows(n_rows);
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// Append a column; it must have exactly `n_rows()` values.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<T>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if values.len() != self.n_rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.n_rows,
                got: values.len(),
            });
        }
        self.insert_column(name, values);
        Ok(())
    }

    pub(crate) fn insert_column(&mut self, name: String, values: Vec<T>) {
        debug_assert_eq!(values.len(), self.n_rows);
        self.columns.push(name);
        self.data.push(values);
    }

    pub fn index_name(&self) -> &str {
        self.index
    }

    /// Row labels: the time steps `0..n_rows()`.
    pub fn index(&self) -> Range<usize> {
        0..self.n_rows
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0 || self.columns.is_empty()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values of the first column called `name`.
    pub fn column(&self, name: &str) -> Option<&[T]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
    }

    /// Values of the column at position `i`.
    pub fn column_at(&self, i: usize) -> Option<&[T]> {
        self.data.get(i).map(Vec::as_slice)
    }

    /// The cell at time `step` in column `name`.
    pub fn get(&self, step: usize, name: &str) -> Option<&T> {
        self.column(name).and_then(|values| values.get(step))
    }

    /// All cells at time `step`, in column order.
    pub fn row(&self, step: usize) -> Option<Vec<&T>> {
        if step >= self.n_rows {
            return None;
        }
        Some(self.data.iter().map(|values| &values[step]).collect())
    }

    /// Rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&T>> + '_ {
        (0..self.n_rows).map(move |step| self.data.iter().map(|values| &values[step]).collect())
    }
}

impl<T: Copy + Sum<T>> Timeline<T> {
    /// Sum across columns for each time step.
    pub fn row_totals(&self) -> Vec<T> {
        (0..self.n_rows)
            .map(|step| self.data.iter().map(|values| values[step]).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline<i32> {
        Timeline::from_columns(vec![("a", vec![1, 2, 3]), ("b", vec![10, 20, 30])]).unwrap()
    }

    #[test]
    fn from_columns_keeps_order_and_shape() {
        let table = sample();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.columns(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.index(), 0..3);
        assert_eq!(table.index_name(), "time");
    }

    #[test]
    fn from_columns_rejects_uneven_lengths() {
        let result = Timeline::from_columns(vec![("a", vec![1, 2]), ("b", vec![1])]);
        assert_eq!(
            result,
            Err(TableError::LengthMismatch {
                column: "b".to_string(),
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn lookups_by_name_position_and_step() {
        let table = sample();
        assert_eq!(table.column("b"), Some(&[10, 20, 30][..]));
        assert_eq!(table.column("missing"), None);
        assert_eq!(table.column_at(0), Some(&[1, 2, 3][..]));
        assert_eq!(table.get(2, "a"), Some(&3));
        assert_eq!(table.get(3, "a"), None);
    }

    #[test]
    fn rows_follow_column_order() {
        let table = sample();
        assert_eq!(table.row(1), Some(vec![&2, &20]));
        assert_eq!(table.row(3), None);

        let rows: Vec<Vec<&i32>> = table.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![&1, &10]);
    }

    #[test]
    fn duplicate_names_resolve_to_first_column() {
        let table = Timeline::from_columns(vec![("x", vec![1]), ("x", vec![2])]).unwrap();
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.get(0, "x"), Some(&1));
        assert_eq!(table.column_at(1), Some(&[2][..]));
    }

    #[test]
    fn with_rows_allows_zero_columns() {
        let table: Timeline<f64> = Timeline::with_rows(4);
        assert_eq!(table.n_rows(), 4);
        assert_eq!(table.n_cols(), 0);
        assert!(table.is_empty());
        assert_eq!(table.row(0), Some(vec![]));
    }

    #[test]
    fn row_totals_sum_across_columns() {
        assert_eq!(sample().row_totals(), vec![11, 22, 33]);
    }

    #[test]
    fn serializes_columns_and_data() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["index"], "time");
        assert_eq!(json["columns"], serde_json::json!(["a", "b"]));
        assert_eq!(json["data"][1], serde_json::json!([10, 20, 30]));
    }
}
