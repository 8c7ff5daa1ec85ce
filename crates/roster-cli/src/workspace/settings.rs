use std::path::PathBuf;

use roster_core::write_bytes_atomic;
use roster_eval::AggregateOptions;
use roster_generate::DEFAULT_COUNT;
use serde::{Deserialize, Serialize};

use super::{WorkspacePaths, WorkspaceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// Where accepted datasets are written. Relative to the workspace root.
    pub dataset_path: PathBuf,
    pub default_count: usize,
    pub age_threshold: i32,
    pub top_earner_department: String,
    /// Keep the previous dataset when writing the new one fails.
    pub rollback_on_persist_failure: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        let aggregate = AggregateOptions::default();
        Self {
            dataset_path: PathBuf::from("data").join("dataset.json"),
            default_count: DEFAULT_COUNT,
            age_threshold: aggregate.age_threshold,
            top_earner_department: aggregate.top_earner_department,
            rollback_on_persist_failure: false,
        }
    }
}

impl WorkspaceSettings {
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            age_threshold: self.age_threshold,
            top_earner_department: self.top_earner_department.clone(),
        }
    }
}

pub fn load_or_create_settings(paths: &WorkspacePaths) -> WorkspaceResult<WorkspaceSettings> {
    let path = paths.settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        let settings: WorkspaceSettings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = WorkspaceSettings::default();
    save_settings(paths, &settings)?;
    Ok(settings)
}

pub fn save_settings(paths: &WorkspacePaths, settings: &WorkspaceSettings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(&paths.settings_path(), encoded.as_bytes())?;
    Ok(())
}
