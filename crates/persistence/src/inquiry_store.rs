// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::INQUIRIES_KEY;
use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use serde_json::Value;
use site_console_domain::{Inquiry, InquiryPatch};
use tracing::{debug, error, info, warn};

/// Exclusive owner of the inquiry list, newest first.
///
/// Inquiries are never removed or reordered. Persistence follows the same
/// best-effort policy as [`crate::ConfigStore`].
#[derive(Debug)]
pub struct InquiryStore<B> {
    backend: B,
    inquiries: Vec<Inquiry>,
}

fn decode_inquiries(raw: &str) -> Vec<Inquiry> {
    let items: Vec<Value> = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("Stored inquiries are not an array; starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %err, "Stored inquiries are not valid JSON; starting empty");
            return Vec::new();
        }
    };

    let total: usize = items.len();
    let inquiries: Vec<Inquiry> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Inquiry>(item) {
            Ok(inquiry) => Some(inquiry),
            Err(err) => {
                warn!(error = %err, "Skipping malformed stored inquiry");
                None
            }
        })
        .collect();
    if inquiries.len() < total {
        warn!(
            kept = inquiries.len(),
            skipped = total - inquiries.len(),
            "Some stored inquiries could not be read"
        );
    }
    inquiries
}

impl<B: StorageBackend> InquiryStore<B> {
    /// Loads the inquiry list from `backend`. Missing or corrupt data loads
    /// as an empty list.
    pub fn load(backend: B) -> Self {
        let inquiries: Vec<Inquiry> = match backend.read(INQUIRIES_KEY) {
            Ok(Some(raw)) => decode_inquiries(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                error!(error = %err, "Failed to read stored inquiries; starting empty");
                Vec::new()
            }
        };
        info!(count = inquiries.len(), "Loaded inquiries");
        Self { backend, inquiries }
    }

    /// All inquiries, newest first.
    #[must_use]
    pub fn all(&self) -> &[Inquiry] {
        &self.inquiries
    }

    /// Looks up an inquiry by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Inquiry> {
        self.inquiries.iter().find(|i| i.id == id)
    }

    /// Adds a new inquiry at the front.
    pub fn append(&mut self, inquiry: Inquiry) {
        debug!(inquiry_id = %inquiry.id, "Appending inquiry");
        self.inquiries.insert(0, inquiry);
        self.persist_best_effort();
    }

    /// Shallow-merges `patch` into the inquiry with this id.
    ///
    /// Returns false, without writing, when no such inquiry exists.
    pub fn patch(&mut self, id: &str, patch: InquiryPatch) -> bool {
        let Some(inquiry) = self.inquiries.iter_mut().find(|i| i.id == id) else {
            debug!(inquiry_id = id, "Patch target not found; ignoring");
            return false;
        };
        patch.merge_into(inquiry);
        self.persist_best_effort();
        true
    }

    /// Replaces the whole list. Used by restore.
    pub fn replace_all(&mut self, inquiries: Vec<Inquiry>) {
        self.inquiries = inquiries;
        self.persist_best_effort();
    }

    /// The storage backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(&self.inquiries)?;
        self.backend.write(INQUIRIES_KEY, &raw)?;
        Ok(())
    }

    fn persist_best_effort(&mut self) {
        if let Err(err) = self.persist() {
            error!(error = %err, "Failed to persist inquiries; keeping in-memory value");
        }
    }
}
