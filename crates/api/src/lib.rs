// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the site console.
//!
//! This crate is where sessions, roles and confirmations are checked before
//! commands reach the core, and where domain and core errors become
//! [`ApiError`]. It is transport-agnostic: the HTTP host wraps these
//! functions without adding rules of its own.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod analysis;
mod auth;
mod backup;
mod capabilities;
mod error;
mod handlers;
mod images;
mod notify;
mod request_response;
mod submission;

#[cfg(test)]
mod tests;

pub use analysis::{
    ANALYSIS_FAILED_NOTICE, AnalysisError, AnalysisJob, AnalysisTracker, FALLBACK_EMPTY_TEXT,
    FALLBACK_ERROR_TEXT, FallbackAnalyzer, PlanTemplateAnalyzer, SolutionAnalyzer,
    analysis_prompt, analyze_inquiry, begin_analysis, finish_analysis, run_analysis,
};
pub use auth::{AuthenticationService, AuthorizationService};
pub use backup::{
    BACKUP_VERSION, BackupDocument, ExportedSnapshot, ImportError, ImportSummary,
    backup_filename, export_snapshot, import_snapshot, parse_backup, snapshot_at,
};
pub use capabilities::compute_console_capabilities;
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_faq, add_portfolio_item, add_review, add_service, add_slider_item, add_user,
    client_update_link, commit_changes, complete_inquiry, list_inquiries, list_users, public_site,
    remove_record, remove_user, set_branding, set_logo, share_credentials_link, update_service,
    upload_logo,
};
pub use images::{encode_image_file, encode_inline_image};
pub use notify::{
    LinkOpener, LogOpener, chat_link, client_update_text, credentials_text,
    inquiry_notification_text, open_best_effort,
};
pub use request_response::{
    AddFaqRequest, AddPortfolioRequest, AddReviewRequest, AddServiceRequest, AddSliderRequest,
    AddUserRequest, AnalysisResponse, Capability, ConfirmRequest, ConsoleCapabilities,
    InquiryFormRequest, LinkResponse, LoginRequest, LoginResponse, PublicSite, QuotePreview,
    RestoreRequest, SetBrandingRequest, SetLogoRequest, SubmissionResponse, UpdateServiceRequest,
    UserSummary,
};
pub use submission::{
    SubmissionReceipt, default_service_id, now_millis, quote_preview, submit,
};
