// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what an operator is permitted to do so the console
//! can hide controls. They do not replace the checks in
//! [`crate::AuthorizationService`].

use crate::auth::AuthorizationService;
use crate::request_response::{Capability, ConsoleCapabilities};
use site_console_domain::{Collection, Session};

fn capability<E>(check: Result<(), E>) -> Capability {
    Capability::from_bool(check.is_ok())
}

/// Computes the console capabilities for a session.
///
/// Derived from the same checks the operations perform, so the two cannot
/// disagree.
#[must_use]
pub fn compute_console_capabilities(session: &Session) -> ConsoleCapabilities {
    let collection = |c: Collection| -> Capability {
        capability(AuthorizationService::authorize_edit_collection(session, c))
    };

    ConsoleCapabilities {
        can_process_inquiries: capability(AuthorizationService::authorize_process_inquiries(
            session,
        )),
        can_edit_branding: capability(AuthorizationService::authorize_edit_branding(session)),
        can_edit_services: collection(Collection::Services),
        can_edit_portfolio: collection(Collection::Portfolio),
        can_edit_slider: collection(Collection::SliderItems),
        can_edit_reviews: collection(Collection::Reviews),
        can_edit_faqs: collection(Collection::Faqs),
        can_manage_users: capability(AuthorizationService::authorize_manage_users(session)),
        can_commit_changes: capability(AuthorizationService::authorize_commit(session)),
        can_export_backup: capability(AuthorizationService::authorize_export_backup(session)),
        can_restore_backup: capability(AuthorizationService::authorize_restore_backup(session)),
    }
}
