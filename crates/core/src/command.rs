// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use site_console_domain::{BrandingField, Collection, FaqItem, PortfolioItem, Review, ServiceField, SliderItem};

/// A command represents operator intent against the site configuration as
/// data only.
///
/// Commands are the only way to request configuration changes. Ids for new
/// records are generated before the command is built, so applying a command
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Overwrite one branding field.
    SetBranding {
        /// The field to write.
        field: BrandingField,
        /// The new value. Empty clears the field.
        value: String,
    },
    /// Append a catalog service.
    AddService {
        /// Pre-generated id.
        id: String,
        /// Blank means `General`.
        category: String,
        /// Display name.
        name: String,
        /// Price in whole currency units.
        price: u64,
        /// Free-text description.
        description: String,
    },
    /// Edit one field of an existing service.
    UpdateService {
        /// The service to edit.
        id: String,
        /// The field and its new value.
        field: ServiceField,
    },
    /// Append a portfolio item. A blank category becomes `Work`.
    AddPortfolioItem {
        /// The item, with its id already assigned.
        item: PortfolioItem,
    },
    /// Append a slider item.
    AddSliderItem {
        /// The item, with its id already assigned.
        item: SliderItem,
    },
    /// Append a client review.
    AddReview {
        /// The review, with its id already assigned.
        review: Review,
    },
    /// Append an FAQ entry.
    AddFaq {
        /// The entry, with its id already assigned.
        faq: FaqItem,
    },
    /// Create a staff account. New accounts always get the ADMIN role.
    AddUser {
        /// Pre-generated id.
        id: String,
        /// Login name.
        username: String,
        /// Plaintext password.
        password: String,
        /// Display name.
        name: String,
    },
    /// Remove a record from a content collection.
    ///
    /// Accounts are removed with [`Command::RemoveUser`] instead.
    RemoveRecord {
        /// The collection holding the record.
        collection: Collection,
        /// The record id.
        id: String,
    },
    /// Remove an operator account.
    RemoveUser {
        /// The account to remove.
        id: String,
        /// Session id of the operator issuing the removal.
        requested_by: String,
    },
}

impl Command {
    /// Short action name used in logs.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::SetBranding { .. } => "SetBranding",
            Self::AddService { .. } => "AddService",
            Self::UpdateService { .. } => "UpdateService",
            Self::AddPortfolioItem { .. } => "AddPortfolioItem",
            Self::AddSliderItem { .. } => "AddSliderItem",
            Self::AddReview { .. } => "AddReview",
            Self::AddFaq { .. } => "AddFaq",
            Self::AddUser { .. } => "AddUser",
            Self::RemoveRecord { .. } => "RemoveRecord",
            Self::RemoveUser { .. } => "RemoveUser",
        }
    }
}
