use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of records produced when no count is given.
pub const DEFAULT_COUNT: usize = 45_000;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of records to draw.
    pub count: usize,
    /// Fixed seed; a random one is drawn and reported when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub duration_ms: u64,
    pub generated_at: DateTime<Utc>,
}
