// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod attachments;
mod defaults;
mod error;
mod inquiry;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use attachments::{ImageAttachments, MAX_INQUIRY_IMAGES};
pub use defaults::{default_config, default_faqs, default_reviews, seed_master_user};
pub use error::DomainError;
pub use inquiry::{Inquiry, InquiryPatch, InquiryStatus};
pub use pricing::{deposit_for, deserialize_amount, remaining_balance};
pub use types::{
    AppConfig, BrandingField, Collection, FaqItem, PortfolioItem, Review, Role, Service,
    ServiceField, Session, SliderItem, User,
};
pub use validation::{
    validate_faq_fields, validate_inline_image, validate_inquiry_fields, validate_master_present,
    validate_portfolio_fields, validate_review_fields, validate_service_fields,
    validate_slider_fields, validate_unique_id, validate_user_fields,
};
