// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage slot backends.
//!
//! A slot is one named blob, overwritten wholesale on every write. `FileSlot`
//! is the durable backend (`<data_dir>/<key>.json`); `MemorySlot` backs tests
//! and headless embedding.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::AppError;

/// A single named key-value storage slot.
pub trait StorageSlot {
    /// Current blob, or `None` if the slot has never been written.
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Overwrite the slot with a new blob.
    fn write(&self, blob: &str) -> Result<(), AppError>;

    /// Remove the slot entirely; reading afterwards yields `None`.
    fn erase(&self) -> Result<(), AppError>;
}

/// Slot stored as a JSON file under a data directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never leaves a half-written slot behind.
pub struct FileSlot {
    path: PathBuf,
    temp_path: PathBuf,
}

impl FileSlot {
    /// Create a file-backed slot. The directory is created if needed.
    pub fn new(data_dir: &Path, key: &str) -> Result<Self, AppError> {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Storage(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            path: data_dir.join(format!("{key}.json")),
            temp_path: data_dir.join(format!(".{key}.json.tmp")),
        })
    }

    /// Path of the slot file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| AppError::Storage(format!("Failed to read {}: {}", self.path.display(), e)))
    }

    fn write(&self, blob: &str) -> Result<(), AppError> {
        fs::write(&self.temp_path, blob).map_err(|e| {
            AppError::Storage(format!(
                "Failed to write {}: {}",
                self.temp_path.display(),
                e
            ))
        })?;

        // Rename is atomic on most filesystems.
        fs::rename(&self.temp_path, &self.path).map_err(|e| {
            AppError::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })
    }

    fn erase(&self) -> Result<(), AppError> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).map_err(|e| {
            AppError::Storage(format!("Failed to remove {}: {}", self.path.display(), e))
        })
    }
}

/// In-memory slot for tests and headless hosts.
///
/// Clones share the same cell, so a test can keep a handle to the slot it
/// handed into a store and inspect the blob afterwards.
#[derive(Clone, Default)]
pub struct MemorySlot {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw blob, for assertions.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, AppError> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, blob: &str) -> Result<(), AppError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn erase(&self) -> Result<(), AppError> {
        *self.blob.borrow_mut() = None;
        Ok(())
    }
}
