use serde::{Deserialize, Serialize};

/// Options for dataset aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateOptions {
    /// Employees strictly older than this are counted in the age cohort.
    pub age_threshold: i32,
    /// Department searched for its highest-paid member.
    pub top_earner_department: String,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            age_threshold: 30,
            top_earner_department: "Engineering".to_string(),
        }
    }
}
