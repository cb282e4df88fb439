// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The public inquiry form.

use site_console::{NewInquiry, create_inquiry, next_inquiry_id};
use site_console_domain::{
    AppConfig, DomainError, ImageAttachments, Inquiry, Service, deposit_for,
};
use site_console_persistence::{InquiryStore, StorageBackend};
use time::OffsetDateTime;
use tracing::{info, warn};
use url::Url;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::notify::{LinkOpener, chat_link, inquiry_notification_text, open_best_effort};
use crate::request_response::{InquiryFormRequest, QuotePreview};

/// The outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// The stored inquiry.
    pub inquiry: Inquiry,
    /// Chat link notifying the site owner, if one could be built.
    pub notification_link: Option<Url>,
}

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

/// The service a fresh form starts with: the first in the catalog.
#[must_use]
pub fn default_service_id(config: &AppConfig) -> Option<&str> {
    config.services.first().map(|s| s.id.as_str())
}

fn resolve_service<'a>(
    config: &'a AppConfig,
    service_id: Option<&str>,
) -> Result<&'a Service, ApiError> {
    let id: &str = match service_id {
        Some(id) => id,
        None => default_service_id(config).ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Service"),
            message: String::from("The service catalog is empty"),
        })?,
    };
    config
        .find_service(id)
        .ok_or_else(|| translate_domain_error(DomainError::ServiceNotFound(id.to_string())))
}

/// Shows the total and the deposit for a service before submitting.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the service does not exist or the catalog
/// is empty.
pub fn quote_preview(config: &AppConfig, service_id: Option<&str>) -> Result<QuotePreview, ApiError> {
    let service: &Service = resolve_service(config, service_id)?;
    Ok(QuotePreview {
        total: service.price,
        deposit: deposit_for(service.price),
    })
}

/// Opens the owner notification link, if it could be built.
///
/// A link that failed to build is logged and dropped.
pub(crate) fn notify_owner(
    opener: &dyn LinkOpener,
    inquiry_id: &str,
    link: Result<Url, ApiError>,
) -> Option<Url> {
    match link {
        Ok(link) => {
            open_best_effort(opener, &link);
            Some(link)
        }
        Err(err) => {
            warn!(
                inquiry_id = %inquiry_id,
                error = %err,
                "Failed to build owner notification link"
            );
            None
        }
    }
}

/// Submits an inquiry.
///
/// The inquiry is stored before the owner is notified. Notification is
/// best-effort: a link that cannot be built or opened is logged and the
/// submission still succeeds.
///
/// # Arguments
///
/// * `config` - The current site configuration
/// * `inquiries` - The inquiry store
/// * `request` - The submitted form
/// * `opener` - Opens the owner notification link
///
/// # Errors
///
/// Returns an error if:
/// - The client name, phone or description is blank
/// - The service does not exist
/// - More than the allowed number of images is attached, or an image is not
///   inline
pub fn submit<B: StorageBackend>(
    config: &AppConfig,
    inquiries: &mut InquiryStore<B>,
    request: InquiryFormRequest,
    opener: &dyn LinkOpener,
) -> Result<SubmissionReceipt, ApiError> {
    let service: &Service = resolve_service(config, request.service_id.as_deref())?;

    let mut images: ImageAttachments = ImageAttachments::new();
    images
        .add_batch(request.images)
        .map_err(translate_domain_error)?;

    let form: NewInquiry = NewInquiry {
        client_name: request.client_name,
        phone: request.phone,
        email: request.email,
        service_id: service.id.clone(),
        description: request.description,
        images,
    };
    let id: String = next_inquiry_id(inquiries.all());
    let inquiry: Inquiry =
        create_inquiry(config, form, id, now_millis()).map_err(translate_core_error)?;

    inquiries.append(inquiry.clone());
    info!(
        inquiry_id = %inquiry.id,
        service_id = %inquiry.service_id,
        deposit = inquiry.payment_done,
        "Inquiry submitted"
    );

    let text: String = inquiry_notification_text(config, &inquiry, &service.name);
    let notification_link: Option<Url> =
        notify_owner(opener, &inquiry.id, chat_link(&config.admin_phone, &text));

    Ok(SubmissionReceipt {
        inquiry,
        notification_link,
    })
}
