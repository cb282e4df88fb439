// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::analysis::AnalysisError;
use crate::backup::ImportError;
use site_console::CoreError;
use site_console_domain::{Collection, DomainError};

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A destructive action was requested without explicit confirmation.
    ConfirmationRequired {
        /// The action that needs confirming.
        action: String,
    },
    /// A backup document could not be restored.
    InvalidBackup {
        /// A human-readable description of the problem.
        message: String,
    },
    /// Solution drafting did not produce a plan.
    AnalysisFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ConfirmationRequired { action } => {
                write!(f, "'{action}' must be explicitly confirmed")
            }
            Self::InvalidBackup { message } => write!(f, "Invalid backup: {message}"),
            Self::AnalysisFailed { message } => write!(f, "Analysis failed: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::NotConfirmed => Self::ConfirmationRequired {
                action: String::from("restore_backup"),
            },
            other => Self::InvalidBackup {
                message: other.to_string(),
            },
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let message: String = err.to_string();
        match err {
            AnalysisError::AnalysisInProgress(_) => Self::DomainRuleViolation {
                rule: String::from("analysis_in_progress"),
                message,
            },
            AnalysisError::Engine(_) | AnalysisError::EmptyResponse => {
                Self::AnalysisFailed { message }
            }
        }
    }
}

const fn resource_label(collection: Collection) -> &'static str {
    match collection {
        Collection::Services => "Service",
        Collection::Portfolio => "Portfolio item",
        Collection::SliderItems => "Slider item",
        Collection::Reviews => "Review",
        Collection::Faqs => "FAQ",
        Collection::Users => "User",
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingField { field, .. } => ApiError::InvalidInput {
            field: String::from(field),
            message,
        },
        DomainError::UnknownField { field, .. } => ApiError::InvalidInput { field, message },
        DomainError::InvalidRole(_) => ApiError::InvalidInput {
            field: String::from("role"),
            message,
        },
        DomainError::InvalidRating(_) => ApiError::InvalidInput {
            field: String::from("rating"),
            message,
        },
        DomainError::InvalidImage(_) => ApiError::InvalidInput {
            field: String::from("images"),
            message,
        },
        DomainError::ImageLimitExceeded { .. } => ApiError::DomainRuleViolation {
            rule: String::from("max_inquiry_images"),
            message,
        },
        DomainError::DuplicateId { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_id"),
            message,
        },
        DomainError::DuplicateUsername(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message,
        },
        DomainError::NotFound { collection, .. } => ApiError::ResourceNotFound {
            resource_type: String::from(resource_label(collection)),
            message,
        },
        DomainError::ServiceNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Service"),
            message,
        },
        DomainError::InquiryNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Inquiry"),
            message,
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("inquiry_status_transition"),
            message,
        },
        DomainError::CannotRemoveSelf => ApiError::DomainRuleViolation {
            rule: String::from("cannot_remove_self"),
            message,
        },
        DomainError::LastMasterAccount => ApiError::DomainRuleViolation {
            rule: String::from("last_master_account"),
            message,
        },
        DomainError::NoMasterAccount => ApiError::DomainRuleViolation {
            rule: String::from("master_account_required"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
