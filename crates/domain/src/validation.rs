// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{AppConfig, Collection, FaqItem, PortfolioItem, Review, Service, SliderItem, User};

fn require(value: &str, entity: &'static str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { entity, field });
    }
    Ok(())
}

/// Validates that a catalog service has a name.
///
/// Category, price and description may be left at their defaults.
///
/// # Errors
///
/// Returns `MissingField` if the name is blank.
pub fn validate_service_fields(service: &Service) -> Result<(), DomainError> {
    require(&service.name, "service", "name")
}

/// Validates a portfolio item.
///
/// # Errors
///
/// Returns `MissingField` if the title or image is blank.
pub fn validate_portfolio_fields(item: &PortfolioItem) -> Result<(), DomainError> {
    require(&item.title, "portfolio item", "title")?;
    require(&item.image, "portfolio item", "image")
}

/// Validates a slider item.
///
/// # Errors
///
/// Returns `MissingField` if the text or image is blank.
pub fn validate_slider_fields(item: &SliderItem) -> Result<(), DomainError> {
    require(&item.text, "slider item", "text")?;
    require(&item.image, "slider item", "image")
}

/// Validates a client review.
///
/// # Errors
///
/// Returns an error if:
/// - The client name or comment is blank
/// - The rating is outside 1 through 5
pub fn validate_review_fields(review: &Review) -> Result<(), DomainError> {
    require(&review.client_name, "review", "clientName")?;
    require(&review.comment, "review", "comment")?;
    if !(1..=5).contains(&review.rating) {
        return Err(DomainError::InvalidRating(review.rating));
    }
    Ok(())
}

/// Validates an FAQ entry.
///
/// # Errors
///
/// Returns `MissingField` if the question or answer is blank.
pub fn validate_faq_fields(item: &FaqItem) -> Result<(), DomainError> {
    require(&item.question, "faq", "question")?;
    require(&item.answer, "faq", "answer")
}

/// Validates an administrator account.
///
/// The display name is optional.
///
/// # Errors
///
/// Returns `MissingField` if the username or password is blank.
pub fn validate_user_fields(user: &User) -> Result<(), DomainError> {
    require(&user.username, "user", "username")?;
    // Passwords are compared verbatim, so whitespace is significant here.
    if user.password.is_empty() {
        return Err(DomainError::MissingField {
            entity: "user",
            field: "password",
        });
    }
    Ok(())
}

/// Validates the required fields of an inquiry form.
///
/// # Errors
///
/// Returns `MissingField` if the client name, phone or description is blank.
pub fn validate_inquiry_fields(
    client_name: &str,
    phone: &str,
    description: &str,
) -> Result<(), DomainError> {
    require(client_name, "inquiry", "clientName")?;
    require(phone, "inquiry", "phone")?;
    require(description, "inquiry", "description")
}

/// Validates that an image is a self-contained inline `data:image/...` URL.
///
/// # Errors
///
/// Returns `InvalidImage` for remote URLs, non-image payloads and URLs
/// without a base64 body.
pub fn validate_inline_image(image: &str) -> Result<(), DomainError> {
    let Some(rest) = image.strip_prefix("data:image/") else {
        return Err(DomainError::InvalidImage(String::from(
            "expected an inline data:image URL",
        )));
    };
    let Some((_, payload)) = rest.split_once(";base64,") else {
        return Err(DomainError::InvalidImage(String::from(
            "inline image must be base64 encoded",
        )));
    };
    if payload.is_empty() {
        return Err(DomainError::InvalidImage(String::from(
            "inline image has no data",
        )));
    }
    Ok(())
}

/// Validates that an id is not already taken within a collection.
///
/// # Errors
///
/// Returns `DuplicateId` if the id is present.
pub fn validate_unique_id(
    config: &AppConfig,
    collection: Collection,
    id: &str,
) -> Result<(), DomainError> {
    if config.contains_id(collection, id) {
        return Err(DomainError::DuplicateId {
            collection,
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Validates that at least one master account exists.
///
/// # Errors
///
/// Returns `NoMasterAccount` if no user holds the master role.
pub fn validate_master_present(users: &[User]) -> Result<(), DomainError> {
    if users.iter().any(|u| u.role == crate::types::Role::Master) {
        Ok(())
    } else {
        Err(DomainError::NoMasterAccount)
    }
}
