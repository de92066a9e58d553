//! Record of one multi-step budget simulation.

use crate::budget::timeline::Timeline;
use crate::core::Label;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Both tables of a budget simulation plus when and how it was produced.
///
/// Runs serialize to JSON for reporting; the crate itself never writes them
/// anywhere.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationRun<V> {
    /// Unique run identifier
    pub id: Uuid,

    /// When the run finished
    pub generated_at: DateTime<Utc>,

    /// Number of simulated steps (rows in each table)
    pub steps: usize,

    /// State labels, one column per item
    pub labels: Timeline<Label<V>>,

    /// State values, one column per item
    pub values: Timeline<V>,
}

impl<V> SimulationRun<V> {
    pub(crate) fn new(steps: usize, labels: Timeline<Label<V>>, values: Timeline<V>) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            steps,
            labels,
            values,
        }
    }

    /// Item names, in budget order.
    pub fn items(&self) -> &[String] {
        self.values.columns()
    }
}

impl<V: Serialize> SimulationRun<V> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> SimulationRun<f64> {
        let labels = Timeline::from_columns(vec![
            ("rent", vec![Label::Value(-5.0), Label::Value(-5.0)]),
            ("mood", vec![Label::state("Good"), Label::state("Bad")]),
        ])
        .unwrap();
        let values =
            Timeline::from_columns(vec![("rent", vec![-5.0, -5.0]), ("mood", vec![1.0, 0.0])])
                .unwrap();
        SimulationRun::new(2, labels, values)
    }

    #[test]
    fn runs_get_distinct_ids() {
        assert_ne!(run().id, run().id);
    }

    #[test]
    fn items_follow_value_columns() {
        assert_eq!(run().items(), &["rent".to_string(), "mood".to_string()]);
    }

    #[test]
    fn to_json_contains_both_tables() {
        let run = run();
        let json: serde_json::Value = serde_json::from_str(&run.to_json().unwrap()).unwrap();

        assert_eq!(json["steps"], 2);
        assert_eq!(json["id"], run.id.to_string());
        assert_eq!(json["labels"]["data"][1], serde_json::json!(["Good", "Bad"]));
        assert_eq!(json["values"]["data"][0], serde_json::json!([-5.0, -5.0]));
    }
}
