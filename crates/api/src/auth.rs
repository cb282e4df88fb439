// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization services.
//!
//! Both operator tiers share one account table. Authentication matches the
//! role the operator asked to log in as, so a staff password never opens a
//! master session.

use site_console_domain::{Collection, Role, Session, User};
use site_console_persistence::{SessionStore, StorageBackend};
use tracing::{info, warn};

use crate::error::{ApiError, AuthError};
use crate::request_response::LoginRequest;

/// Authorization service for enforcing role-based access control.
///
/// Every configuration mutator requires the MASTER role. Inquiry processing
/// is open to any authenticated operator.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_master(session: &Session, action: &str) -> Result<(), AuthError> {
        match session.role {
            Role::Master => Ok(()),
            Role::Admin => {
                warn!(
                    operator = %session.username,
                    action,
                    "Rejected configuration change from non-master operator"
                );
                Err(AuthError::Unauthorized {
                    action: action.to_string(),
                    required_role: Role::Master.to_string(),
                })
            }
        }
    }

    /// Checks if an operator may edit branding fields or the logo.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not have the MASTER role.
    pub fn authorize_edit_branding(session: &Session) -> Result<(), AuthError> {
        Self::require_master(session, "edit_branding")
    }

    /// Checks if an operator may add, edit or remove records in a content
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not have the MASTER role.
    pub fn authorize_edit_collection(
        session: &Session,
        collection: Collection,
    ) -> Result<(), AuthError> {
        Self::require_master(session, &format!("edit_{}", collection.as_str()))
    }

    /// Checks if an operator may create, remove or share operator accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not have the MASTER role.
    pub fn authorize_manage_users(session: &Session) -> Result<(), AuthError> {
        Self::require_master(session, "manage_users")
    }

    /// Checks if an operator may re-persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not have the MASTER role.
    pub fn authorize_commit(session: &Session) -> Result<(), AuthError> {
        Self::require_master(session, "commit_changes")
    }

    /// Checks if an operator may export a backup.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not have the MASTER role.
    pub fn authorize_export_backup(session: &Session) -> Result<(), AuthError> {
        Self::require_master(session, "export_backup")
    }

    /// Checks if an operator may restore a backup.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator does not have the MASTER role.
    pub fn authorize_restore_backup(session: &Session) -> Result<(), AuthError> {
        Self::require_master(session, "restore_backup")
    }

    /// Checks if an operator may view and process inquiries.
    ///
    /// Both MASTER and ADMIN operators may process inquiries.
    ///
    /// # Errors
    ///
    /// Never fails for an authenticated session.
    pub const fn authorize_process_inquiries(_session: &Session) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Authentication service for tab sessions.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Matches credentials against the account list.
    ///
    /// Username, password and role must all match one account. The failure
    /// message names only the requested role, never which field was wrong.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if no account matches.
    pub fn authenticate(
        users: &[User],
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Session, AuthError> {
        users
            .iter()
            .find(|u| u.username == username && u.password == password && u.role == role)
            .map(User::to_session)
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!(
                    "Invalid {role} credentials. Ensure you are using the correct login tab."
                ),
            })
    }

    /// Authenticates and records the session for this tab.
    ///
    /// The session store is untouched on failure.
    ///
    /// # Arguments
    ///
    /// * `users` - The current account list
    /// * `sessions` - The tab's session store
    /// * `request` - The submitted credentials
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The username or password is empty
    /// - The credentials do not match an account with the requested role
    pub fn login<B: StorageBackend>(
        users: &[User],
        sessions: &mut SessionStore<B>,
        request: &LoginRequest,
    ) -> Result<Session, ApiError> {
        if request.username.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("username"),
                message: String::from("Username is required"),
            });
        }
        if request.password.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("password"),
                message: String::from("Password is required"),
            });
        }

        let session: Session =
            Self::authenticate(users, &request.username, &request.password, request.role)
                .inspect_err(|_| {
                    warn!(username = %request.username, role = %request.role, "Login failed");
                })?;
        info!(operator = %session.username, role = %session.role, "Operator logged in");
        sessions.set(session.clone());
        Ok(session)
    }

    /// Ends the tab session.
    pub fn logout<B: StorageBackend>(sessions: &mut SessionStore<B>) {
        if let Some(session) = sessions.current() {
            info!(operator = %session.username, "Operator logged out");
        }
        sessions.clear();
    }

    /// Returns the tab's session.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the tab is not logged in.
    pub fn require_session<B: StorageBackend>(
        sessions: &SessionStore<B>,
    ) -> Result<Session, AuthError> {
        sessions
            .current()
            .cloned()
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Not logged in"),
            })
    }
}
