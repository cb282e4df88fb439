// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::inquiry::InquiryStatus;
use crate::types::Collection;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is empty.
    MissingField {
        /// The kind of record being validated.
        entity: &'static str,
        /// The field that was empty.
        field: &'static str,
    },
    /// A field name does not exist on the entity.
    UnknownField {
        /// The kind of record being edited.
        entity: &'static str,
        /// The unrecognized field name.
        field: String,
    },
    /// Role name is not recognized.
    InvalidRole(String),
    /// Review rating outside 1 through 5.
    InvalidRating(u8),
    /// An attached image is not a self-contained inline image.
    InvalidImage(String),
    /// Adding images would exceed the per-inquiry limit.
    ImageLimitExceeded {
        /// The maximum number of images.
        limit: usize,
        /// The total that adding the batch would have produced.
        attempted: usize,
    },
    /// A record with this id already exists in the collection.
    DuplicateId {
        /// The collection.
        collection: Collection,
        /// The colliding id.
        id: String,
    },
    /// Another account already uses this username.
    DuplicateUsername(String),
    /// No record with this id exists in the collection.
    NotFound {
        /// The collection.
        collection: Collection,
        /// The id that was looked up.
        id: String,
    },
    /// The inquiry references a service that is not in the catalog.
    ServiceNotFound(String),
    /// The inquiry does not exist.
    InquiryNotFound(String),
    /// The requested inquiry status change is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: InquiryStatus,
        /// The requested status.
        to: InquiryStatus,
    },
    /// An operator tried to remove their own account.
    CannotRemoveSelf,
    /// Removing the account would leave no master operator.
    LastMasterAccount,
    /// The account list holds no master operator.
    NoMasterAccount,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{entity} {field} is required")
            }
            Self::UnknownField { entity, field } => {
                write!(f, "Unknown {entity} field '{field}'")
            }
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidRating(rating) => {
                write!(f, "Invalid rating {rating}. Must be between 1 and 5")
            }
            Self::InvalidImage(msg) => write!(f, "Invalid image: {msg}"),
            Self::ImageLimitExceeded { limit, attempted } => {
                write!(
                    f,
                    "Maximum {limit} images allowed (attempted to attach {attempted})"
                )
            }
            Self::DuplicateId { collection, id } => {
                write!(f, "Id '{id}' already exists in {collection}")
            }
            Self::DuplicateUsername(username) => {
                write!(f, "Username '{username}' is already taken")
            }
            Self::NotFound { collection, id } => {
                write!(f, "No record with id '{id}' in {collection}")
            }
            Self::ServiceNotFound(id) => write!(f, "Service '{id}' not found"),
            Self::InquiryNotFound(id) => write!(f, "Inquiry '{id}' not found"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot move an inquiry from {from} to {to}")
            }
            Self::CannotRemoveSelf => write!(f, "You cannot remove yourself"),
            Self::LastMasterAccount => {
                write!(f, "Operation would leave the site without a master account")
            }
            Self::NoMasterAccount => write!(f, "No master account is present"),
        }
    }
}

impl std::error::Error for DomainError {}
