// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inquiry creation and status transitions.
//!
//! These functions never touch storage. They validate a transition and hand
//! back the record or patch the Inquiry Store should write.

use crate::error::CoreError;
use site_console_domain::{
    AppConfig, DomainError, ImageAttachments, Inquiry, InquiryPatch, InquiryStatus, Service,
    deposit_for, validate_inquiry_fields,
};

/// The client-supplied part of a new inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub client_name: String,
    pub phone: String,
    pub email: String,
    pub service_id: String,
    pub description: String,
    pub images: ImageAttachments,
}

/// Builds a Pending inquiry from a submitted form.
///
/// The deposit is computed from the service's current price and frozen into
/// the record.
///
/// # Arguments
///
/// * `config` - The configuration holding the service catalog
/// * `form` - The submitted form
/// * `id` - A fresh inquiry id
/// * `timestamp` - Submission time in epoch milliseconds
///
/// # Errors
///
/// Returns an error if:
/// - The client name, phone or description is blank
/// - The service id is not in the catalog
pub fn create_inquiry(
    config: &AppConfig,
    form: NewInquiry,
    id: String,
    timestamp: i64,
) -> Result<Inquiry, CoreError> {
    validate_inquiry_fields(&form.client_name, &form.phone, &form.description)?;

    let service: &Service = config
        .find_service(&form.service_id)
        .ok_or_else(|| DomainError::ServiceNotFound(form.service_id.clone()))?;
    let payment_done: u64 = deposit_for(service.price);

    Ok(Inquiry {
        id,
        client_name: form.client_name,
        phone: form.phone,
        email: form.email,
        service_id: form.service_id,
        description: form.description,
        images: form.images.into_vec(),
        payment_done,
        status: InquiryStatus::Pending,
        solution_text: None,
        timestamp,
    })
}

fn transition(inquiry: &Inquiry, to: InquiryStatus) -> Result<(), CoreError> {
    if inquiry.status.can_transition_to(to) {
        Ok(())
    } else {
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                from: inquiry.status,
                to,
            },
        ))
    }
}

/// Checks that an inquiry can still be analyzed.
///
/// # Errors
///
/// Returns `InvalidStatusTransition` unless the inquiry is Pending.
pub fn require_pending(inquiry: &Inquiry) -> Result<(), CoreError> {
    transition(inquiry, InquiryStatus::InProgress)
}

/// Produces the patch that records a drafted solution plan.
///
/// # Errors
///
/// Returns `InvalidStatusTransition` unless the inquiry is Pending.
pub fn record_solution(inquiry: &Inquiry, solution_text: String) -> Result<InquiryPatch, CoreError> {
    transition(inquiry, InquiryStatus::InProgress)?;
    Ok(InquiryPatch {
        status: Some(InquiryStatus::InProgress),
        solution_text: Some(solution_text),
        ..InquiryPatch::default()
    })
}

/// Produces the patch that marks an inquiry delivered.
///
/// # Errors
///
/// Returns `InvalidStatusTransition` unless the inquiry is In Progress.
pub fn complete(inquiry: &Inquiry) -> Result<InquiryPatch, CoreError> {
    transition(inquiry, InquiryStatus::Completed)?;
    Ok(InquiryPatch::status(InquiryStatus::Completed))
}
