// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-site backup and restore.
//!
//! A backup holds the configuration and every inquiry. Restoring replaces
//! both in one step; a document that fails any check changes nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use site_console_domain::{AppConfig, Inquiry, Session, validate_master_present};
use site_console_persistence::{ConfigStore, InquiryStore, StorageBackend, merge_with_defaults};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

use crate::auth::AuthorizationService;
use crate::error::ApiError;

/// Backup format version written by [`export_snapshot`].
pub const BACKUP_VERSION: &str = "1.0";

/// Reasons a backup document is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The operator did not confirm the overwrite.
    #[error("restoring a backup overwrites all data and must be confirmed")]
    NotConfirmed,
    /// The document does not have the backup shape.
    #[error("invalid backup format: {0}")]
    InvalidFormat(String),
    /// The inquiry list does not decode.
    #[error("invalid inquiries in backup: {0}")]
    InvalidInquiries(String),
    /// The configuration has no master account.
    #[error("backup has no master account")]
    NoMasterAccount,
}

/// The on-disk backup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub config: AppConfig,
    pub inquiries: Vec<Inquiry>,
    pub version: String,
    /// Export time, RFC 3339.
    pub timestamp: String,
}

/// A backup ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSnapshot {
    /// Suggested download name.
    pub filename: String,
    pub document: BackupDocument,
    /// Pretty-printed JSON of `document`.
    pub contents: String,
}

/// What a restore replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub services: usize,
    pub users: usize,
    pub inquiries: usize,
    /// The version field of the document, if present.
    pub version: Option<String>,
}

/// Download name for a backup taken on `date`.
///
/// The company name is lowercased and whitespace becomes `_`. Characters
/// other than `[a-z0-9_-]` are dropped; an empty result becomes `site`.
#[must_use]
pub fn backup_filename(company_name: &str, date: Date) -> String {
    let mut slug: String = company_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect();
    if slug.is_empty() {
        slug = String::from("site");
    }
    let day: String = date
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string());
    format!("{slug}_backup_{day}.json")
}

/// Builds a backup of `config` and `inquiries` taken at `at`.
///
/// # Errors
///
/// Returns `Internal` if the document cannot be serialized.
pub fn snapshot_at(
    config: &AppConfig,
    inquiries: &[Inquiry],
    at: OffsetDateTime,
) -> Result<ExportedSnapshot, ApiError> {
    let timestamp: String = at.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format backup timestamp: {e}"),
    })?;
    let document: BackupDocument = BackupDocument {
        config: config.clone(),
        inquiries: inquiries.to_vec(),
        version: String::from(BACKUP_VERSION),
        timestamp,
    };
    let contents: String =
        serde_json::to_string_pretty(&document).map_err(|e| ApiError::Internal {
            message: format!("Failed to serialize backup: {e}"),
        })?;
    Ok(ExportedSnapshot {
        filename: backup_filename(&config.company_name, at.date()),
        document,
        contents,
    })
}

/// Exports the whole site.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The document cannot be serialized
pub fn export_snapshot<C: StorageBackend, I: StorageBackend>(
    session: &Session,
    config_store: &ConfigStore<C>,
    inquiry_store: &InquiryStore<I>,
) -> Result<ExportedSnapshot, ApiError> {
    AuthorizationService::authorize_export_backup(session)?;
    let snapshot: ExportedSnapshot = snapshot_at(
        config_store.current(),
        inquiry_store.all(),
        OffsetDateTime::now_utc(),
    )?;
    info!(
        operator = %session.username,
        filename = %snapshot.filename,
        inquiries = snapshot.document.inquiries.len(),
        "Backup exported"
    );
    Ok(snapshot)
}

/// Checks a backup document without changing anything.
///
/// The configuration is merged with the seed configuration exactly as a
/// stored configuration is on load.
///
/// # Errors
///
/// Returns an error if:
/// - The document is not an object with a `config` object and an
///   `inquiries` array
/// - An inquiry does not decode
/// - The merged configuration has no master account
pub fn parse_backup(document: &Value) -> Result<(AppConfig, Vec<Inquiry>), ImportError> {
    let object: &Map<String, Value> = document
        .as_object()
        .ok_or_else(|| ImportError::InvalidFormat(String::from("expected a JSON object")))?;
    let config_value: &Value = object
        .get("config")
        .filter(|v| v.is_object())
        .ok_or_else(|| ImportError::InvalidFormat(String::from("missing config object")))?;
    let inquiries_value: &Value = object
        .get("inquiries")
        .filter(|v| v.is_array())
        .ok_or_else(|| ImportError::InvalidFormat(String::from("missing inquiries array")))?;

    let config: AppConfig = merge_with_defaults(config_value);
    validate_master_present(&config.users).map_err(|_| ImportError::NoMasterAccount)?;

    let inquiries: Vec<Inquiry> = serde_json::from_value(inquiries_value.clone())
        .map_err(|e| ImportError::InvalidInquiries(e.to_string()))?;
    Ok((config, inquiries))
}

/// Restores a backup, replacing the configuration and every inquiry.
///
/// # Arguments
///
/// * `session` - The operator requesting the restore
/// * `config_store` - The configuration store
/// * `inquiry_store` - The inquiry store
/// * `document` - The parsed backup file
/// * `confirmed` - Whether the operator confirmed the overwrite
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The restore was not confirmed
/// - The document is not a valid backup
pub fn import_snapshot<C: StorageBackend, I: StorageBackend>(
    session: &Session,
    config_store: &mut ConfigStore<C>,
    inquiry_store: &mut InquiryStore<I>,
    document: &Value,
    confirmed: bool,
) -> Result<ImportSummary, ApiError> {
    AuthorizationService::authorize_restore_backup(session)?;
    if !confirmed {
        return Err(ImportError::NotConfirmed.into());
    }

    let (config, inquiries): (AppConfig, Vec<Inquiry>) =
        parse_backup(document).inspect_err(|err| {
            warn!(operator = %session.username, error = %err, "Rejected backup restore");
        })?;

    let summary: ImportSummary = ImportSummary {
        services: config.services.len(),
        users: config.users.len(),
        inquiries: inquiries.len(),
        version: document
            .get("version")
            .and_then(Value::as_str)
            .map(String::from),
    };
    config_store.replace(config);
    inquiry_store.replace_all(inquiries);
    info!(
        operator = %session.username,
        services = summary.services,
        inquiries = summary.inquiries,
        "Backup restored"
    );
    Ok(summary)
}
