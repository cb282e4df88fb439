// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CONFIG_KEY;
use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::merge::{ensure_master_account, merge_with_defaults};
use serde_json::Value;
use site_console_domain::AppConfig;
use tracing::{debug, error, info, warn};

/// A change to the site configuration.
pub enum Mutation {
    /// Replace the whole configuration.
    Replace(AppConfig),
    /// Derive the next configuration from the current in-memory one.
    Transform(Box<dyn FnOnce(&AppConfig) -> AppConfig + Send>),
}

impl std::fmt::Debug for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace(config) => f.debug_tuple("Replace").field(config).finish(),
            Self::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Exclusive owner of the site configuration.
///
/// Every accepted change is written through to the backend immediately.
/// Writes are best-effort: a failed write is logged and the in-memory value
/// is kept, so the running site keeps serving the edited content.
#[derive(Debug)]
pub struct ConfigStore<B> {
    backend: B,
    config: AppConfig,
}

impl<B: StorageBackend> ConfigStore<B> {
    /// Loads the configuration from `backend`.
    ///
    /// Missing or unparseable data yields the seed configuration. A stored
    /// object is merged field by field with the seed configuration. If the
    /// result has no master account, the seed master is appended.
    pub fn load(backend: B) -> Self {
        let mut config: AppConfig = match backend.read(CONFIG_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => merge_with_defaults(&value),
                Err(err) => {
                    warn!(error = %err, "Stored configuration is not valid JSON; using defaults");
                    AppConfig::default()
                }
            },
            Ok(None) => {
                info!("No stored configuration; using defaults");
                AppConfig::default()
            }
            Err(err) => {
                error!(error = %err, "Failed to read stored configuration; using defaults");
                AppConfig::default()
            }
        };
        ensure_master_account(&mut config);
        Self { backend, config }
    }

    /// The current configuration.
    #[must_use]
    pub const fn current(&self) -> &AppConfig {
        &self.config
    }

    /// Applies a mutation and writes the result through.
    pub fn update(&mut self, mutation: Mutation) {
        let next: AppConfig = match mutation {
            Mutation::Replace(config) => config,
            Mutation::Transform(transform) => transform(&self.config),
        };
        self.config = next;
        self.persist_best_effort();
    }

    /// Replaces the whole configuration.
    pub fn replace(&mut self, config: AppConfig) {
        self.update(Mutation::Replace(config));
    }

    /// Derives the next configuration from the current one.
    pub fn transform<F>(&mut self, transform: F)
    where
        F: FnOnce(&AppConfig) -> AppConfig,
    {
        self.config = transform(&self.config);
        self.persist_best_effort();
    }

    /// Applies a fallible transform.
    ///
    /// On `Err` the configuration is unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns whatever error the transform returns.
    pub fn try_update<F, E>(&mut self, transform: F) -> Result<(), E>
    where
        F: FnOnce(&AppConfig) -> Result<AppConfig, E>,
    {
        let next: AppConfig = transform(&self.config)?;
        self.config = next;
        self.persist_best_effort();
        Ok(())
    }

    /// Writes the current configuration again.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The in-memory value is kept.
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        let result: Result<(), PersistenceError> = self.persist();
        if let Err(err) = &result {
            error!(error = %err, "Failed to flush configuration");
        }
        result
    }

    /// The storage backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(&self.config)?;
        self.backend.write(CONFIG_KEY, &raw)?;
        debug!(bytes = raw.len(), "Persisted configuration");
        Ok(())
    }

    fn persist_best_effort(&mut self) {
        if let Err(err) = self.persist() {
            error!(error = %err, "Failed to persist configuration; keeping in-memory value");
        }
    }
}
