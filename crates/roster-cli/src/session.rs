//! Calling-layer state: the current dataset and the background dispatch of
//! generate, upload and process actions.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::task::{JoinError, spawn_blocking};
use tracing::{info, warn};

use roster_core::{
    Dataset, DatasetStore, DecodeError, PersistError, PersistReceipt, ValidationError, decode,
    encode, validate,
};
use roster_eval::{AggregationEngine, AggregationReport, EvalError};
use roster_generate::{GenerateOptions, GenerationEngine, GenerationError};

use crate::workspace::WorkspaceSettings;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no dataset loaded; generate or upload a dataset first")]
    NoDataset,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("failed to encode dataset: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}; previous dataset kept")]
    Persist(#[source] PersistError),
    #[error("background task failed: {0}")]
    Task(#[from] JoinError),
}

/// A dataset that became current.
#[derive(Debug)]
pub struct Accepted {
    pub records: usize,
    /// Size of the encoded dataset.
    pub bytes: u64,
    /// Seed of a generated dataset.
    pub seed: Option<u64>,
    /// Outcome of writing the dataset to the store. An error here means the
    /// dataset is current in memory only.
    pub persisted: Result<PersistReceipt, PersistError>,
}

/// Holds the current dataset for one user session.
///
/// The slot is replaced wholesale: readers clone the `Arc`, so they always see
/// either the previous dataset or the new one in full.
pub struct Session {
    store: DatasetStore,
    settings: WorkspaceSettings,
    current: RwLock<Option<Arc<Dataset>>>,
}

impl Session {
    pub fn new(store: DatasetStore, settings: WorkspaceSettings) -> Self {
        Self {
            store,
            settings,
            current: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn current(&self) -> Option<Arc<Dataset>> {
        self.current.read().clone()
    }

    /// Generate a synthetic dataset, persist its encoding and make it current.
    pub async fn generate(
        &self,
        count: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Accepted, SessionError> {
        let options = GenerateOptions {
            count: count.unwrap_or(self.settings.default_count),
            seed,
        };
        let store = self.store.clone();

        let (result, bytes, persisted) = spawn_blocking(move || {
            let result = GenerationEngine::new(options).run()?;
            let text = encode(&result.dataset)?;
            let persisted = store.persist(text.as_bytes());
            Ok::<_, SessionError>((result, text.len() as u64, persisted))
        })
        .await??;

        let seed = Some(result.report.seed);
        self.commit(result.dataset, bytes, seed, persisted)
    }

    /// Decode and validate an uploaded buffer; when accepted, persist the
    /// exact bytes and make the dataset current.
    pub async fn upload(&self, source: Vec<u8>) -> Result<Accepted, SessionError> {
        let store = self.store.clone();

        let outcome = spawn_blocking(move || {
            let dataset = validate(decode(&source)?)?;
            let persisted = store.persist(&source);
            Ok::<_, SessionError>((dataset, source.len() as u64, persisted))
        })
        .await?;

        let (dataset, bytes, persisted) = outcome.inspect_err(|err| {
            warn!(event = "upload_rejected", error = %err);
        })?;
        self.commit(dataset, bytes, None, persisted)
    }

    /// Decode and validate a buffer and make it current without persisting it.
    pub async fn open(&self, source: Vec<u8>) -> Result<usize, SessionError> {
        let dataset = spawn_blocking(move || {
            let dataset = validate(decode(&source)?)?;
            Ok::<_, SessionError>(dataset)
        })
        .await??;

        let records = dataset.len();
        self.replace(dataset);
        info!(event = "dataset_opened", records);
        Ok(records)
    }

    /// Aggregate the current dataset.
    pub async fn process(&self) -> Result<AggregationReport, SessionError> {
        let dataset = self.current().ok_or(SessionError::NoDataset)?;
        let engine = AggregationEngine::new(self.settings.aggregate_options());

        let report = spawn_blocking(move || engine.run(&dataset)).await??;
        Ok(report)
    }

    fn commit(
        &self,
        dataset: Dataset,
        bytes: u64,
        seed: Option<u64>,
        persisted: Result<PersistReceipt, PersistError>,
    ) -> Result<Accepted, SessionError> {
        let records = dataset.len();

        let persisted = match persisted {
            Err(err) if self.settings.rollback_on_persist_failure => {
                warn!(event = "persist_failed", error = %err, rolled_back = true);
                return Err(SessionError::Persist(err));
            }
            Err(err) => {
                warn!(event = "persist_failed", error = %err, rolled_back = false);
                Err(err)
            }
            Ok(receipt) => Ok(receipt),
        };

        self.replace(dataset);
        info!(event = "dataset_accepted", records, bytes);

        Ok(Accepted {
            records,
            bytes,
            seed,
            persisted,
        })
    }

    fn replace(&self, dataset: Dataset) {
        *self.current.write() = Some(Arc::new(dataset));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("roster_session_{label}_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn session_in(dir: &std::path::Path, settings: WorkspaceSettings) -> Session {
        Session::new(DatasetStore::new(dir.join("dataset.json")), settings)
    }

    /// A store whose parent path is a regular file, so every persist fails.
    fn broken_session(label: &str, rollback: bool) -> Session {
        let dir = temp_dir(label);
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, b"").expect("write blocker");
        let settings = WorkspaceSettings {
            rollback_on_persist_failure: rollback,
            ..WorkspaceSettings::default()
        };
        Session::new(DatasetStore::new(blocker.join("dataset.json")), settings)
    }

    const UPLOAD: &str = r#"[
        {"name": "Alice", "age": 25, "department": "Engineering", "salary": 80000},
        {"name": "Bob", "age": 40, "department": "Engineering", "salary": 95000},
        {"name": "Cara", "age": 35, "department": "HR", "salary": 60000}
    ]"#;

    #[tokio::test]
    async fn process_without_dataset_reports_no_dataset() {
        let session = session_in(&temp_dir("empty"), WorkspaceSettings::default());
        assert!(matches!(
            session.process().await,
            Err(SessionError::NoDataset)
        ));
    }

    #[tokio::test]
    async fn upload_persists_exact_source() {
        let dir = temp_dir("upload");
        let session = session_in(&dir, WorkspaceSettings::default());

        let accepted = session
            .upload(UPLOAD.as_bytes().to_vec())
            .await
            .expect("upload accepted");

        assert_eq!(accepted.records, 3);
        assert!(accepted.persisted.is_ok());
        let stored = std::fs::read_to_string(dir.join("dataset.json")).expect("read stored");
        assert_eq!(stored, UPLOAD);

        let report = session.process().await.expect("process");
        assert_eq!(report.count, 3);
        assert_eq!(report.older_than.count, 2);
    }

    #[tokio::test]
    async fn rejected_upload_keeps_current_dataset() {
        let dir = temp_dir("reject");
        let session = session_in(&dir, WorkspaceSettings::default());
        session
            .upload(UPLOAD.as_bytes().to_vec())
            .await
            .expect("first upload");

        let bad = br#"[{"name": "Zed", "age": 0, "department": "IT", "salary": 1}]"#;
        let err = session
            .upload(bad.to_vec())
            .await
            .expect_err("age 0 rejected");

        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::InvalidField { index: 0, .. })
        ));
        assert_eq!(session.current().map(|d| d.len()), Some(3));
        let stored = std::fs::read_to_string(dir.join("dataset.json")).expect("read stored");
        assert_eq!(stored, UPLOAD);
    }

    #[tokio::test]
    async fn generate_replaces_dataset_and_store() {
        let dir = temp_dir("generate");
        let session = session_in(&dir, WorkspaceSettings::default());

        let accepted = session
            .generate(Some(200), Some(42))
            .await
            .expect("generate");

        assert_eq!(accepted.records, 200);
        assert_eq!(accepted.seed, Some(42));
        let receipt = accepted.persisted.expect("persisted");
        assert_eq!(receipt.bytes, accepted.bytes);

        let stored = std::fs::read(dir.join("dataset.json")).expect("read stored");
        let current = session.current().expect("current dataset");
        let encoded = encode(&current).expect("encode current");
        assert_eq!(stored, encoded.into_bytes());
    }

    #[tokio::test]
    async fn persist_failure_keeps_new_dataset_by_default() {
        let session = broken_session("keep", false);

        let accepted = session
            .upload(UPLOAD.as_bytes().to_vec())
            .await
            .expect("upload still accepted");

        assert!(accepted.persisted.is_err());
        assert_eq!(session.current().map(|d| d.len()), Some(3));
    }

    #[tokio::test]
    async fn persist_failure_rolls_back_when_configured() {
        let session = broken_session("rollback", true);

        let err = session
            .upload(UPLOAD.as_bytes().to_vec())
            .await
            .expect_err("persist failure surfaces");

        assert!(matches!(err, SessionError::Persist(_)));
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn open_does_not_touch_store() {
        let dir = temp_dir("open");
        let session = session_in(&dir, WorkspaceSettings::default());

        let records = session
            .open(UPLOAD.as_bytes().to_vec())
            .await
            .expect("open");

        assert_eq!(records, 3);
        assert!(!dir.join("dataset.json").exists());
    }

    #[test]
    fn readers_keep_their_snapshot_across_replace() {
        let session = session_in(&temp_dir("snapshot"), WorkspaceSettings::default());
        let first = roster_generate::generate(10, Some(1)).expect("first");
        let second = roster_generate::generate(20, Some(2)).expect("second");

        session.replace(first);
        let snapshot = session.current().expect("snapshot");
        session.replace(second);

        assert_eq!(snapshot.len(), 10);
        assert_eq!(session.current().map(|d| d.len()), Some(20));
    }
}
