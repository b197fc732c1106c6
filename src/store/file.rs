//! Whole-file JSON record store.
//!
//! The entire collection lives in one pretty-printed JSON array; every
//! mutation rewrites the whole file. There is no partial-write protection
//! and no cross-process locking — a single server process with in-process
//! serialization is assumed.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use crate::model::{User, UserDraft, UserPatch};

/// Errors that can occur while reading or writing the record file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store file '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed user store. Interior mutex serializes the
/// read-modify-write cycle across handlers within this process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    users: Mutex<Vec<User>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts an empty store (the file is created on the
    /// first mutation). An unparseable file is an error — corrupted data
    /// must never be silently replaced.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let users = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| StoreError::Read {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.clone(),
                source: e,
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of all records.
    pub fn list(&self) -> Vec<User> {
        self.users.lock().clone()
    }

    /// Append a new record with the next free id and persist.
    pub fn add(&self, draft: UserDraft) -> Result<User, StoreError> {
        let mut users = self.users.lock();
        let user = User {
            id: next_id(&users),
            name: draft.name,
            email: draft.email,
            role: draft.role,
        };
        users.push(user.clone());
        self.persist(&users)?;
        tracing::debug!(id = %user.id, "added user");
        Ok(user)
    }

    /// Merge `patch` into the record with `id` and persist.
    ///
    /// Returns `None` when no record matches; the file is left untouched
    /// in that case.
    pub fn update(&self, id: &str, patch: &UserPatch) -> Result<Option<User>, StoreError> {
        let mut users = self.users.lock();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        patch.apply_to(user);
        let updated = user.clone();
        self.persist(&users)?;
        tracing::debug!(id = %updated.id, "updated user");
        Ok(Some(updated))
    }

    /// Remove the record with `id` and persist.
    ///
    /// Returns whether a record was removed; the file is left untouched
    /// when nothing matched.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut users = self.users.lock();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.persist(&users)?;
        tracing::debug!(id, "deleted user");
        Ok(true)
    }

    fn persist(&self, users: &[User]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(users).map_err(|e| StoreError::Serialize {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Next id: max of the numeric ids plus one, stringified. Non-numeric ids
/// are skipped; an empty store yields "1".
fn next_id(users: &[User]) -> String {
    let max = users
        .iter()
        .filter_map(|u| u.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}
