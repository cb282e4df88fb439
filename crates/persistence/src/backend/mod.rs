// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key/value storage backends.
//!
//! ## Backend Support
//!
//! - `memory`: in-process map, used for tab-lived session storage and tests
//! - `file`: one JSON file per key under a data directory
//!
//! Stores hold whole JSON documents under a small fixed set of keys and
//! never read partial values, so the trait deals in strings.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::PersistenceError;

/// Durable string storage addressed by key.
pub trait StorageBackend {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Deletes the value under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}
