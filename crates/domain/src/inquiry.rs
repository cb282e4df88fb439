// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Processing status of an inquiry.
///
/// Valid transitions are:
/// - Pending → `InProgress` (after a successful analysis)
/// - `InProgress` → Completed (final delivery)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InquiryStatus {
    /// Submitted, not yet analyzed.
    #[default]
    Pending,
    /// A solution plan exists and work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Delivered.
    Completed,
}

impl InquiryStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Checks if a transition from this status to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress) | (Self::InProgress, Self::Completed)
        )
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client-submitted service request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub client_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// May dangle if the service was later removed from the catalog.
    pub service_id: String,
    pub description: String,
    /// Inline `data:` image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Deposit frozen at submission time.
    #[serde(deserialize_with = "crate::pricing::deserialize_amount")]
    pub payment_done: u64,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_text: Option<String>,
    /// Submission time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// A partial update applied to an inquiry by shallow merge.
///
/// Only fields set to `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InquiryPatch {
    /// A patch that only changes the status.
    #[must_use]
    pub fn status(status: InquiryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns true if the patch would not change anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.solution_text.is_none()
            && self.client_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.description.is_none()
    }

    /// Shallow-merges this patch into an inquiry.
    pub fn merge_into(self, inquiry: &mut Inquiry) {
        if let Some(status) = self.status {
            inquiry.status = status;
        }
        if let Some(solution_text) = self.solution_text {
            inquiry.solution_text = Some(solution_text);
        }
        if let Some(client_name) = self.client_name {
            inquiry.client_name = client_name;
        }
        if let Some(phone) = self.phone {
            inquiry.phone = phone;
        }
        if let Some(email) = self.email {
            inquiry.email = email;
        }
        if let Some(description) = self.description {
            inquiry.description = description;
        }
    }
}
