// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Administrator roles.
///
/// Both roles share one user table; the login screen asks for the role
/// explicitly and authentication matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Master operator: full authority over every configuration collection.
    Master,
    /// Staff operator: may view and process inquiries only.
    Admin,
}

impl Role {
    /// Returns the wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MASTER" => Ok(Self::Master),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry visitors can inquire about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub category: String,
    pub name: String,
    /// Price in whole currency units.
    #[serde(deserialize_with = "crate::pricing::deserialize_amount")]
    pub price: u64,
    pub description: String,
}

/// An administrator account.
///
/// Passwords are stored and compared in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// Returns the session view of this account (everything except the password).
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
            name: self.name.clone(),
        }
    }
}

/// The authenticated operator for the lifetime of one browser tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
}

impl Session {
    /// Returns true when this session belongs to the master operator.
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.role == Role::Master
    }
}

/// A previous-work sample shown in the portfolio section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

impl PortfolioItem {
    /// Returns the link as an absolute URL, assuming https when no scheme is given.
    #[must_use]
    pub fn external_url(&self) -> Option<String> {
        let link: &str = self.link.as_deref()?.trim();
        if link.is_empty() {
            return None;
        }
        if link.starts_with("http") {
            Some(link.to_string())
        } else {
            Some(format!("https://{link}"))
        }
    }
}

/// A slide of the home page hero slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderItem {
    pub id: String,
    pub text: String,
    pub image: String,
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub client_name: String,
    pub comment: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// The configuration collections that carry identified records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Services,
    Portfolio,
    SliderItems,
    Reviews,
    Faqs,
    Users,
}

impl Collection {
    /// All collections, in document order.
    pub const ALL: [Self; 6] = [
        Self::Services,
        Self::Users,
        Self::Portfolio,
        Self::SliderItems,
        Self::Reviews,
        Self::Faqs,
    ];

    /// Returns the JSON field name of this collection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::SliderItems => "sliderItems",
            Self::Reviews => "reviews",
            Self::Faqs => "faqs",
            Self::Users => "users",
        }
    }

    /// Returns the prefix used when generating ids for this collection.
    #[must_use]
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            Self::Services => "svc-",
            Self::Portfolio => "p-",
            Self::SliderItems => "slide-",
            Self::Reviews => "rev-",
            Self::Faqs => "faq-",
            Self::Users => "",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-text branding fields of the site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandingField {
    CompanyName,
    LogoInitial,
    LogoUrl,
    RegNo,
    TradeMark,
    RegAddress,
    ServiceAddress,
    AdminPhone,
    BusinessHead,
    TechHead,
    TechHeadPhone,
}

impl BrandingField {
    /// All branding fields, in document order.
    pub const ALL: [Self; 11] = [
        Self::CompanyName,
        Self::LogoInitial,
        Self::LogoUrl,
        Self::RegNo,
        Self::TradeMark,
        Self::RegAddress,
        Self::ServiceAddress,
        Self::AdminPhone,
        Self::BusinessHead,
        Self::TechHead,
        Self::TechHeadPhone,
    ];

    /// Returns the JSON field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::LogoInitial => "logoInitial",
            Self::LogoUrl => "logoUrl",
            Self::RegNo => "regNo",
            Self::TradeMark => "tradeMark",
            Self::RegAddress => "regAddress",
            Self::ServiceAddress => "serviceAddress",
            Self::AdminPhone => "adminPhone",
            Self::BusinessHead => "businessHead",
            Self::TechHead => "techHead",
            Self::TechHeadPhone => "techHeadPhone",
        }
    }
}

impl FromStr for BrandingField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField {
                entity: "branding",
                field: s.to_string(),
            })
    }
}

/// Editable fields of a catalog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceField {
    Category(String),
    Name(String),
    Price(u64),
    Description(String),
}

impl ServiceField {
    /// Returns the JSON field name being edited.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Category(_) => "category",
            Self::Name(_) => "name",
            Self::Price(_) => "price",
            Self::Description(_) => "description",
        }
    }

    /// Writes this field into a service.
    pub fn apply_to(self, service: &mut Service) {
        match self {
            Self::Category(value) => service.category = value,
            Self::Name(value) => service.name = value,
            Self::Price(value) => service.price = value,
            Self::Description(value) => service.description = value,
        }
    }
}

/// The single shared site configuration document.
///
/// Branding fields are free text where an empty string means "unset".
/// `Default` yields the seed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
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
    pub users: Vec<User>,
    pub portfolio: Vec<PortfolioItem>,
    pub slider_items: Vec<SliderItem>,
    pub reviews: Vec<Review>,
    pub faqs: Vec<FaqItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        crate::defaults::default_config()
    }
}

impl AppConfig {
    /// Reads a branding field.
    #[must_use]
    pub fn branding(&self, field: BrandingField) -> &str {
        match field {
            BrandingField::CompanyName => &self.company_name,
            BrandingField::LogoInitial => &self.logo_initial,
            BrandingField::LogoUrl => &self.logo_url,
            BrandingField::RegNo => &self.reg_no,
            BrandingField::TradeMark => &self.trade_mark,
            BrandingField::RegAddress => &self.reg_address,
            BrandingField::ServiceAddress => &self.service_address,
            BrandingField::AdminPhone => &self.admin_phone,
            BrandingField::BusinessHead => &self.business_head,
            BrandingField::TechHead => &self.tech_head,
            BrandingField::TechHeadPhone => &self.tech_head_phone,
        }
    }

    /// Returns a mutable reference to a branding field.
    pub fn branding_mut(&mut self, field: BrandingField) -> &mut String {
        match field {
            BrandingField::CompanyName => &mut self.company_name,
            BrandingField::LogoInitial => &mut self.logo_initial,
            BrandingField::LogoUrl => &mut self.logo_url,
            BrandingField::RegNo => &mut self.reg_no,
            BrandingField::TradeMark => &mut self.trade_mark,
            BrandingField::RegAddress => &mut self.reg_address,
            BrandingField::ServiceAddress => &mut self.service_address,
            BrandingField::AdminPhone => &mut self.admin_phone,
            BrandingField::BusinessHead => &mut self.business_head,
            BrandingField::TechHead => &mut self.tech_head,
            BrandingField::TechHeadPhone => &mut self.tech_head_phone,
        }
    }

    /// Company name for outbound messages, falling back to the seed brand.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.company_name.trim().is_empty() {
            crate::defaults::FALLBACK_COMPANY_NAME
        } else {
            &self.company_name
        }
    }

    /// Looks up a catalog service by id.
    #[must_use]
    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Number of accounts holding the master role.
    #[must_use]
    pub fn master_count(&self) -> usize {
        self.users.iter().filter(|u| u.role == Role::Master).count()
    }

    /// Returns the ids currently present in a collection.
    #[must_use]
    pub fn ids(&self, collection: Collection) -> Vec<&str> {
        match collection {
            Collection::Services => self.services.iter().map(|s| s.id.as_str()).collect(),
            Collection::Portfolio => self.portfolio.iter().map(|p| p.id.as_str()).collect(),
            Collection::SliderItems => self.slider_items.iter().map(|s| s.id.as_str()).collect(),
            Collection::Reviews => self.reviews.iter().map(|r| r.id.as_str()).collect(),
            Collection::Faqs => self.faqs.iter().map(|f| f.id.as_str()).collect(),
            Collection::Users => self.users.iter().map(|u| u.id.as_str()).collect(),
        }
    }

    /// Returns true if a record with this id exists in the collection.
    #[must_use]
    pub fn contains_id(&self, collection: Collection, id: &str) -> bool {
        self.ids(collection).contains(&id)
    }
}
