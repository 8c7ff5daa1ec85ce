use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::PersistError;

/// Fixed on-disk location of the accepted dataset.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
}

/// Summary of a completed persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistReceipt {
    pub path: PathBuf,
    pub bytes: u64,
    pub sha256: String,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored dataset with `data`.
    ///
    /// The buffer goes to a sibling temp file that is synced and renamed over
    /// the target, so readers see either the previous file or the new one.
    pub fn persist(&self, data: &[u8]) -> Result<PersistReceipt, PersistError> {
        write_bytes_atomic(&self.path, data).map_err(|source| PersistError {
            path: self.path.clone(),
            source,
        })?;

        let receipt = PersistReceipt {
            path: self.path.clone(),
            bytes: data.len() as u64,
            sha256: hex::encode(Sha256::digest(data)),
        };
        info!(
            event = "dataset_persisted",
            path = %receipt.path.display(),
            bytes = receipt.bytes,
            sha256 = %receipt.sha256
        );
        Ok(receipt)
    }

    /// Read the stored dataset bytes back.
    pub fn load(&self) -> Result<Vec<u8>, PersistError> {
        std::fs::read(&self.path).map_err(|source| PersistError {
            path: self.path.clone(),
            source,
        })
    }
}

/// Write `data` to `path` through a synced temp file and a rename.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }

    Ok(())
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
