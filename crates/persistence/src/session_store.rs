// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SESSION_KEY;
use crate::backend::StorageBackend;
use site_console_domain::Session;
use tracing::{error, warn};

/// The logged-in operator of one browser tab.
///
/// Backed by tab-lived storage. An absent or unreadable session means the
/// tab is unauthenticated.
#[derive(Debug)]
pub struct SessionStore<B> {
    backend: B,
    session: Option<Session>,
}

impl<B: StorageBackend> SessionStore<B> {
    /// Loads the session from `backend`.
    pub fn load(backend: B) -> Self {
        let session: Option<Session> = match backend.read(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!(error = %err, "Stored session is corrupt; treating as logged out");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                error!(error = %err, "Failed to read stored session");
                None
            }
        };
        Self { backend, session }
    }

    /// The current session, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Records a new session.
    pub fn set(&mut self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(err) = self.backend.write(SESSION_KEY, &raw) {
                    error!(error = %err, "Failed to persist session");
                }
            }
            Err(err) => error!(error = %err, "Failed to serialize session"),
        }
        self.session = Some(session);
    }

    /// Ends the session and removes it from storage.
    pub fn clear(&mut self) {
        self.session = None;
        if let Err(err) = self.backend.remove(SESSION_KEY) {
            error!(error = %err, "Failed to remove stored session");
        }
    }

    /// The storage backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}
