// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage selection for the long-lived site documents.

use std::path::Path;

use site_console_persistence::{FileStorage, MemoryStorage, PersistenceError, StorageBackend};

/// Where the configuration and inquiries live.
#[derive(Debug, Clone)]
pub enum SiteStorage {
    /// One JSON file per document under a data directory.
    File(FileStorage),
    /// In-process only; lost on exit.
    Memory(MemoryStorage),
}

impl SiteStorage {
    /// Opens file storage under `data_dir`, or memory storage when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(data_dir: Option<&Path>) -> Result<Self, PersistenceError> {
        match data_dir {
            Some(dir) => Ok(Self::File(FileStorage::open(dir)?)),
            None => Ok(Self::Memory(MemoryStorage::new())),
        }
    }
}

impl StorageBackend for SiteStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match self {
            Self::File(storage) => storage.read(key),
            Self::Memory(storage) => storage.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        match self {
            Self::File(storage) => storage.write(key, value),
            Self::Memory(storage) => storage.write(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match self {
            Self::File(storage) => storage.remove(key),
            Self::Memory(storage) => storage.remove(key),
        }
    }
}
