// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use site_console_domain::{
    AppConfig, BrandingField, FaqItem, Inquiry, PortfolioItem, Review, Role, Service,
    ServiceField, Session, SliderItem, User,
};

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    /// The account username.
    pub username: String,
    /// The account password.
    pub password: String,
    /// The login tab the operator used.
    pub role: Role,
}

/// API response for successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The session token (opaque, one per browser tab).
    pub session_token: String,
    /// The logged-in operator.
    pub session: Session,
}

/// API request to overwrite a branding field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetBrandingRequest {
    pub field: BrandingField,
    pub value: String,
}

/// API request to replace the logo with an inline image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetLogoRequest {
    /// A `data:image/...;base64,` URL.
    pub image: String,
}

/// API request to add a catalog service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddServiceRequest {
    pub name: String,
    /// Blank means `General`.
    pub category: String,
    #[serde(deserialize_with = "site_console_domain::deserialize_amount")]
    pub price: u64,
    pub description: String,
}

/// API request to edit one field of a service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum UpdateServiceRequest {
    Category(String),
    Name(String),
    Price(u64),
    Description(String),
}

impl From<UpdateServiceRequest> for ServiceField {
    fn from(request: UpdateServiceRequest) -> Self {
        match request {
            UpdateServiceRequest::Category(value) => Self::Category(value),
            UpdateServiceRequest::Name(value) => Self::Name(value),
            UpdateServiceRequest::Price(value) => Self::Price(value),
            UpdateServiceRequest::Description(value) => Self::Description(value),
        }
    }
}

/// API request to add a portfolio item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddPortfolioRequest {
    pub title: String,
    pub image: String,
    /// Blank means `Work`.
    pub category: String,
    pub link: Option<String>,
    pub app_name: Option<String>,
}

/// API request to add a slider item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddSliderRequest {
    pub text: String,
    pub image: String,
}

/// API request to add a client review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    pub client_name: String,
    pub comment: String,
    pub rating: u8,
}

/// API request to add an FAQ entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddFaqRequest {
    pub question: String,
    pub answer: String,
}

/// API request to create a staff account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Confirmation flag carried by destructive requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfirmRequest {
    pub confirmed: bool,
}

/// An operator account as listed in the console. The password is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            name: user.name.clone(),
        }
    }
}

/// API request to submit an inquiry from the public form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InquiryFormRequest {
    pub client_name: String,
    pub phone: String,
    pub email: String,
    /// Omitted means the first catalog service.
    pub service_id: Option<String>,
    pub description: String,
    /// Inline `data:image/...` URLs.
    pub images: Vec<String>,
}

/// API response for a submitted inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub inquiry: Inquiry,
    /// Chat deep link notifying the site owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_link: Option<String>,
}

/// Price and deposit shown before an inquiry is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePreview {
    pub total: u64,
    pub deposit: u64,
}

/// API response for a solution drafting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// The inquiry after the attempt.
    pub inquiry: Inquiry,
    /// Set when no plan was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// A chat deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResponse {
    pub link: String,
}

/// API request to restore a backup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestoreRequest {
    /// The parsed backup document.
    pub document: serde_json::Value,
    #[serde(default)]
    pub confirmed: bool,
}

/// The site content visitors may see. Operator accounts are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSite {
    pub company_name: String,
    pub logo_initial: String,
    pub logo_url: String,
    pub reg_no: String,
    pub trade_mark: String,
    pub reg_address: String,
    pub service_address: String,
    pub admin_phone: String,
    pub business_head: String,
    pub tech_head: String,
    pub tech_head_phone: String,
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioItem>,
    pub slider_items: Vec<SliderItem>,
    pub reviews: Vec<Review>,
    pub faqs: Vec<FaqItem>,
}

impl From<&AppConfig> for PublicSite {
    fn from(config: &AppConfig) -> Self {
        Self {
            company_name: config.company_name.clone(),
            logo_initial: config.logo_initial.clone(),
            logo_url: config.logo_url.clone(),
            reg_no: config.reg_no.clone(),
            trade_mark: config.trade_mark.clone(),
            reg_address: config.reg_address.clone(),
            service_address: config.service_address.clone(),
            admin_phone: config.admin_phone.clone(),
            business_head: config.business_head.clone(),
            tech_head: config.tech_head.clone(),
            tech_head_phone: config.tech_head_phone.clone(),
            services: config.services.clone(),
            portfolio: config.portfolio.clone(),
            slider_items: config.slider_items.clone(),
            reviews: config.reviews.clone(),
            faqs: config.faqs.clone(),
        }
    }
}

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value: bool = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(value))
    }
}

/// Which console controls exist for a session.
///
/// Advisory only: every operation re-checks authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleCapabilities {
    pub can_process_inquiries: Capability,
    pub can_edit_branding: Capability,
    pub can_edit_services: Capability,
    pub can_edit_portfolio: Capability,
    pub can_edit_slider: Capability,
    pub can_edit_reviews: Capability,
    pub can_edit_faqs: Capability,
    pub can_manage_users: Capability,
    pub can_commit_changes: Capability,
    pub can_export_backup: Capability,
    pub can_restore_backup: Capability,
}
