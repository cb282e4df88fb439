// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin console operations.
//!
//! Every configuration mutator checks the operator's role before a command
//! reaches the store, and destructive operations check confirmation after
//! the role. A rejected request leaves the store untouched.

use std::path::Path;

use site_console::{Command, apply, complete, next_collection_id};
use site_console_domain::{
    AppConfig, BrandingField, Collection, DomainError, FaqItem, Inquiry, InquiryPatch,
    InquiryStatus, PortfolioItem, Review, Role, Service, ServiceField, Session, SliderItem, User,
    validate_inline_image,
};
use site_console_persistence::{ConfigStore, InquiryStore, StorageBackend};
use tracing::{info, warn};
use url::Url;

use crate::auth::AuthorizationService;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::images::encode_image_file;
use crate::notify::{chat_link, client_update_text, credentials_text};
use crate::request_response::{
    AddFaqRequest, AddPortfolioRequest, AddReviewRequest, AddServiceRequest, AddSliderRequest,
    AddUserRequest, PublicSite, SetBrandingRequest, SetLogoRequest, UpdateServiceRequest,
    UserSummary,
};

/// Applies a command to the configuration and writes it through.
fn execute<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    command: Command,
) -> Result<(), ApiError> {
    let action: &'static str = command.action();
    store
        .try_update(|config| apply(config, command))
        .map_err(translate_core_error)
        .inspect_err(|err| {
            warn!(operator = %session.username, action, error = %err, "Command rejected");
        })?;
    info!(operator = %session.username, action, "Configuration updated");
    Ok(())
}

fn require_confirmation(confirmed: bool, action: &str) -> Result<(), ApiError> {
    if confirmed {
        Ok(())
    } else {
        Err(ApiError::ConfirmationRequired {
            action: action.to_string(),
        })
    }
}

fn find_inquiry<'a, B: StorageBackend>(
    inquiries: &'a InquiryStore<B>,
    id: &str,
) -> Result<&'a Inquiry, ApiError> {
    inquiries
        .find(id)
        .ok_or_else(|| translate_domain_error(DomainError::InquiryNotFound(id.to_string())))
}

fn last_added<T: Clone>(items: &[T]) -> Result<T, ApiError> {
    items.last().cloned().ok_or_else(|| ApiError::Internal {
        message: String::from("Added record is missing from the configuration"),
    })
}

/// The public projection of the site.
#[must_use]
pub fn public_site(config: &AppConfig) -> PublicSite {
    PublicSite::from(config)
}

/// Overwrites a branding field.
///
/// # Errors
///
/// Returns an error if the operator does not have the MASTER role.
pub fn set_branding<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: SetBrandingRequest,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_edit_branding(session)?;
    execute(
        session,
        store,
        Command::SetBranding {
            field: request.field,
            value: request.value,
        },
    )
}

/// Replaces the logo with an inline image.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The image is not a `data:image/...;base64,` URL
pub fn set_logo<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: SetLogoRequest,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_edit_branding(session)?;
    validate_inline_image(&request.image).map_err(translate_domain_error)?;
    execute(
        session,
        store,
        Command::SetBranding {
            field: BrandingField::LogoUrl,
            value: request.image,
        },
    )
}

/// Replaces the logo with an image file from disk.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The file cannot be read or is not an image
pub fn upload_logo<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    path: &Path,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_edit_branding(session)?;
    let image: String = encode_image_file(path)?;
    set_logo(session, store, SetLogoRequest { image })
}

/// Adds a catalog service.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The name is blank
pub fn add_service<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: AddServiceRequest,
) -> Result<Service, ApiError> {
    AuthorizationService::authorize_edit_collection(session, Collection::Services)?;
    let id: String = next_collection_id(store.current(), Collection::Services);
    execute(
        session,
        store,
        Command::AddService {
            id,
            category: request.category,
            name: request.name,
            price: request.price,
            description: request.description,
        },
    )?;
    last_added(&store.current().services)
}

/// Edits one field of a service.
///
/// Existing inquiries keep the deposit they were created with.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The service does not exist
pub fn update_service<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    id: &str,
    request: UpdateServiceRequest,
) -> Result<Service, ApiError> {
    AuthorizationService::authorize_edit_collection(session, Collection::Services)?;
    let field: ServiceField = request.into();
    execute(
        session,
        store,
        Command::UpdateService {
            id: id.to_string(),
            field,
        },
    )?;
    store
        .current()
        .find_service(id)
        .cloned()
        .ok_or_else(|| translate_domain_error(DomainError::ServiceNotFound(id.to_string())))
}

/// Adds a portfolio item.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The title or image is blank
pub fn add_portfolio_item<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: AddPortfolioRequest,
) -> Result<PortfolioItem, ApiError> {
    AuthorizationService::authorize_edit_collection(session, Collection::Portfolio)?;
    let item: PortfolioItem = PortfolioItem {
        id: next_collection_id(store.current(), Collection::Portfolio),
        title: request.title,
        image: request.image,
        category: request.category,
        link: request.link.filter(|l| !l.trim().is_empty()),
        app_name: request.app_name.filter(|a| !a.trim().is_empty()),
    };
    execute(session, store, Command::AddPortfolioItem { item })?;
    last_added(&store.current().portfolio)
}

/// Adds a hero slide.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The text or image is blank
pub fn add_slider_item<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: AddSliderRequest,
) -> Result<SliderItem, ApiError> {
    AuthorizationService::authorize_edit_collection(session, Collection::SliderItems)?;
    let item: SliderItem = SliderItem {
        id: next_collection_id(store.current(), Collection::SliderItems),
        text: request.text,
        image: request.image,
    };
    execute(session, store, Command::AddSliderItem { item })?;
    last_added(&store.current().slider_items)
}

/// Adds a client review.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The client name or comment is blank, or the rating is outside 1-5
pub fn add_review<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: AddReviewRequest,
) -> Result<Review, ApiError> {
    AuthorizationService::authorize_edit_collection(session, Collection::Reviews)?;
    let review: Review = Review {
        id: next_collection_id(store.current(), Collection::Reviews),
        client_name: request.client_name,
        comment: request.comment,
        rating: request.rating,
    };
    execute(session, store, Command::AddReview { review })?;
    last_added(&store.current().reviews)
}

/// Adds an FAQ entry.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The question or answer is blank
pub fn add_faq<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: AddFaqRequest,
) -> Result<FaqItem, ApiError> {
    AuthorizationService::authorize_edit_collection(session, Collection::Faqs)?;
    let faq: FaqItem = FaqItem {
        id: next_collection_id(store.current(), Collection::Faqs),
        question: request.question,
        answer: request.answer,
    };
    execute(session, store, Command::AddFaq { faq })?;
    last_added(&store.current().faqs)
}

/// Removes a record from a content collection.
///
/// Accounts in [`Collection::Users`] go through [`remove_user`].
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The removal was not confirmed
/// - No record has the id
pub fn remove_record<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    collection: Collection,
    id: &str,
    confirmed: bool,
) -> Result<(), ApiError> {
    if collection == Collection::Users {
        return remove_user(session, store, id, confirmed);
    }
    AuthorizationService::authorize_edit_collection(session, collection)?;
    require_confirmation(confirmed, &format!("remove_{}", collection.as_str()))?;
    execute(
        session,
        store,
        Command::RemoveRecord {
            collection,
            id: id.to_string(),
        },
    )
}

/// Creates a staff account with the ADMIN role.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The username or password is blank
/// - The username is taken
pub fn add_user<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    request: AddUserRequest,
) -> Result<UserSummary, ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    let id: String = next_collection_id(store.current(), Collection::Users);
    execute(
        session,
        store,
        Command::AddUser {
            id,
            username: request.username,
            password: request.password,
            name: request.name,
        },
    )?;
    store
        .current()
        .users
        .last()
        .map(UserSummary::from)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Added account is missing from the configuration"),
        })
}

/// Removes an operator account.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The removal was not confirmed
/// - The account is the operator's own or the last master account
/// - No account has the id
pub fn remove_user<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
    id: &str,
    confirmed: bool,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    require_confirmation(confirmed, "remove_user")?;
    execute(
        session,
        store,
        Command::RemoveUser {
            id: id.to_string(),
            requested_by: session.id.clone(),
        },
    )
}

/// Lists operator accounts without passwords.
///
/// # Errors
///
/// Returns an error if the operator does not have the MASTER role.
pub fn list_users(session: &Session, config: &AppConfig) -> Result<Vec<UserSummary>, ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    Ok(config.users.iter().map(UserSummary::from).collect())
}

/// Builds a chat link carrying a staff account's login details.
///
/// The link has no recipient; the operator picks one when it opens.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - No account has the id
/// - The account is a master account
pub fn share_credentials_link(
    session: &Session,
    config: &AppConfig,
    user_id: &str,
) -> Result<Url, ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    let user: &User = config.find_user(user_id).ok_or_else(|| {
        translate_domain_error(DomainError::NotFound {
            collection: Collection::Users,
            id: user_id.to_string(),
        })
    })?;
    if user.role == Role::Master {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("share_staff_credentials_only"),
            message: String::from("Only staff account credentials can be shared"),
        });
    }
    info!(operator = %session.username, user = %user.username, "Sharing staff credentials");
    chat_link("", &credentials_text(config, user))
}

/// Writes the configuration to storage again.
///
/// # Errors
///
/// Returns an error if:
/// - The operator does not have the MASTER role
/// - The write fails
pub fn commit_changes<B: StorageBackend>(
    session: &Session,
    store: &mut ConfigStore<B>,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_commit(session)?;
    store.flush().map_err(|e| ApiError::Internal {
        message: format!("Failed to commit changes: {e}"),
    })?;
    info!(operator = %session.username, "Changes committed");
    Ok(())
}

/// Lists inquiries, newest first.
///
/// # Errors
///
/// Returns an error if the operator may not process inquiries.
pub fn list_inquiries<B: StorageBackend>(
    session: &Session,
    inquiries: &InquiryStore<B>,
) -> Result<Vec<Inquiry>, ApiError> {
    AuthorizationService::authorize_process_inquiries(session)?;
    Ok(inquiries.all().to_vec())
}

/// Marks an In Progress inquiry delivered.
///
/// # Errors
///
/// Returns an error if:
/// - The inquiry does not exist
/// - The inquiry is not In Progress
pub fn complete_inquiry<B: StorageBackend>(
    session: &Session,
    inquiries: &mut InquiryStore<B>,
    id: &str,
) -> Result<Inquiry, ApiError> {
    AuthorizationService::authorize_process_inquiries(session)?;
    let patch: InquiryPatch = complete(find_inquiry(inquiries, id)?).map_err(translate_core_error)?;
    inquiries.patch(id, patch);
    info!(operator = %session.username, inquiry_id = id, "Inquiry completed");
    find_inquiry(inquiries, id).cloned()
}

/// Builds a chat link updating the client on an In Progress inquiry.
///
/// # Errors
///
/// Returns an error if:
/// - The inquiry does not exist
/// - The inquiry is not In Progress
pub fn client_update_link<B: StorageBackend>(
    session: &Session,
    config: &AppConfig,
    inquiries: &InquiryStore<B>,
    id: &str,
) -> Result<Url, ApiError> {
    AuthorizationService::authorize_process_inquiries(session)?;
    let inquiry: &Inquiry = find_inquiry(inquiries, id)?;
    if inquiry.status != InquiryStatus::InProgress {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("client_update_requires_in_progress"),
            message: format!(
                "Client updates are sent for In Progress inquiries, this one is {}",
                inquiry.status.as_str()
            ),
        });
    }
    chat_link(&inquiry.phone, &client_update_text(config, inquiry))
}
