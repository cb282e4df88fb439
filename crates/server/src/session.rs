// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tab session extraction for the server.
//!
//! A login issues an opaque bearer token that stands for one browser tab.
//! Each token owns a session store over its own tab-lived memory storage,
//! so logging out in one tab leaves every other tab alone.

use std::collections::HashMap;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use site_console_api::AuthenticationService;
use site_console_domain::Session;
use site_console_persistence::{MemoryStorage, SessionStore};
use tracing::{debug, warn};

use crate::AppState;

/// Session stores keyed by bearer token.
pub type TabSessions = HashMap<String, SessionStore<MemoryStorage>>;

/// Generates an unguessable tab token.
#[must_use]
pub fn new_tab_token() -> String {
    format!("{:032x}", rand::random::<u128>())
}

/// Extractor for logged-in operators.
///
/// # Authentication Flow
///
/// 1. Extract `Authorization: Bearer <token>` header
/// 2. Look up the tab's session store
/// 3. Return the stored session and the token
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - Authorization header is missing or malformed
/// - The token is unknown or the tab is logged out
pub struct SessionOperator(pub Session, pub String);

impl FromRequestParts<AppState> for SessionOperator {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header: &str = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token: &str = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let tabs = state.tabs.lock().await;
        let store: &SessionStore<MemoryStorage> = tabs
            .get(token)
            .ok_or_else(|| SessionError::InvalidSession(String::from("Unknown session token")))?;
        let session: Session = AuthenticationService::require_session(store)
            .map_err(|e| SessionError::InvalidSession(e.to_string()))?;

        debug!(operator = %session.username, role = %session.role, "Session validated");
        Ok(Self(session, token.to_string()))
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Token unknown or logged out.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingAuthorizationHeader => String::from("Missing Authorization header"),
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => format!("Session validation failed: {reason}"),
        };
        crate::error_body(StatusCode::UNAUTHORIZED, "authentication_failed", message)
    }
}
