// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use site_console_domain::{
    AppConfig, Collection, DomainError, Role, Service, User, validate_faq_fields,
    validate_portfolio_fields, validate_review_fields, validate_service_fields,
    validate_slider_fields, validate_unique_id, validate_user_fields,
};

const DEFAULT_SERVICE_CATEGORY: &str = "General";
const DEFAULT_PORTFOLIO_CATEGORY: &str = "Work";

/// Applies a command to the current configuration, producing the next one.
///
/// The input is never modified. On error the caller keeps the configuration
/// it already has.
///
/// # Arguments
///
/// * `config` - The current configuration (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns an error if:
/// - A required field is blank or a rating is out of range
/// - A new record's id is already taken
/// - The target record does not exist
/// - A user removal targets the caller or the last master account
#[allow(clippy::too_many_lines)]
pub fn apply(config: &AppConfig, command: Command) -> Result<AppConfig, CoreError> {
    let mut next: AppConfig = config.clone();

    match command {
        Command::SetBranding { field, value } => {
            *next.branding_mut(field) = value;
        }
        Command::AddService {
            id,
            category,
            name,
            price,
            description,
        } => {
            let service: Service = Service {
                id,
                category: or_default(category, DEFAULT_SERVICE_CATEGORY),
                name,
                price,
                description,
            };
            validate_service_fields(&service)?;
            validate_unique_id(config, Collection::Services, &service.id)?;
            next.services.push(service);
        }
        Command::UpdateService { id, field } => {
            let Some(service) = next.services.iter_mut().find(|s| s.id == id) else {
                return Err(not_found(Collection::Services, id));
            };
            field.apply_to(service);
        }
        Command::AddPortfolioItem { mut item } => {
            item.category = or_default(item.category, DEFAULT_PORTFOLIO_CATEGORY);
            validate_portfolio_fields(&item)?;
            validate_unique_id(config, Collection::Portfolio, &item.id)?;
            next.portfolio.push(item);
        }
        Command::AddSliderItem { item } => {
            validate_slider_fields(&item)?;
            validate_unique_id(config, Collection::SliderItems, &item.id)?;
            next.slider_items.push(item);
        }
        Command::AddReview { review } => {
            validate_review_fields(&review)?;
            validate_unique_id(config, Collection::Reviews, &review.id)?;
            next.reviews.push(review);
        }
        Command::AddFaq { faq } => {
            validate_faq_fields(&faq)?;
            validate_unique_id(config, Collection::Faqs, &faq.id)?;
            next.faqs.push(faq);
        }
        Command::AddUser {
            id,
            username,
            password,
            name,
        } => {
            let user: User = User {
                id,
                username,
                password,
                role: Role::Admin,
                name,
            };
            validate_user_fields(&user)?;
            validate_unique_id(config, Collection::Users, &user.id)?;
            // Login looks accounts up by username, so it must stay unambiguous.
            if config.users.iter().any(|u| u.username == user.username) {
                return Err(CoreError::DomainViolation(DomainError::DuplicateUsername(
                    user.username,
                )));
            }
            next.users.push(user);
        }
        Command::RemoveRecord { collection, id } => {
            if collection == Collection::Users {
                return Err(CoreError::DomainViolation(DomainError::UnknownField {
                    entity: "collection",
                    field: collection.as_str().to_string(),
                }));
            }
            if !config.contains_id(collection, &id) {
                return Err(not_found(collection, id));
            }
            remove_from(&mut next, collection, &id);
        }
        Command::RemoveUser { id, requested_by } => {
            if id == requested_by {
                return Err(CoreError::DomainViolation(DomainError::CannotRemoveSelf));
            }
            let Some(target) = config.find_user(&id) else {
                return Err(not_found(Collection::Users, id));
            };
            if target.role == Role::Master && config.master_count() <= 1 {
                return Err(CoreError::DomainViolation(DomainError::LastMasterAccount));
            }
            next.users.retain(|u| u.id != id);
        }
    }

    Ok(next)
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn not_found(collection: Collection, id: String) -> CoreError {
    CoreError::DomainViolation(DomainError::NotFound { collection, id })
}

fn remove_from(config: &mut AppConfig, collection: Collection, id: &str) {
    match collection {
        Collection::Services => config.services.retain(|s| s.id != id),
        Collection::Portfolio => config.portfolio.retain(|p| p.id != id),
        Collection::SliderItems => config.slider_items.retain(|s| s.id != id),
        Collection::Reviews => config.reviews.retain(|r| r.id != id),
        Collection::Faqs => config.faqs.retain(|f| f.id != id),
        Collection::Users => config.users.retain(|u| u.id != id),
    }
}
