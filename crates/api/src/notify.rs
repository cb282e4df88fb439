// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chat deep links.
//!
//! The site never sends messages itself. It builds a `wa.me` link with a
//! pre-filled text and hands it to a [`LinkOpener`], which in a browser
//! would open a new tab.

use site_console_domain::{AppConfig, Inquiry, User, remaining_balance};
use tracing::{info, warn};
use url::Url;

use crate::error::ApiError;

const CHAT_BASE: &str = "https://wa.me/";

/// Opens a deep link on behalf of the operator or visitor.
pub trait LinkOpener {
    /// Opens the link.
    ///
    /// # Errors
    ///
    /// Returns a description of why the link could not be opened.
    fn open(&self, link: &Url) -> Result<(), String>;
}

/// Opener that only records the link in the log. Used by hosts that return
/// links to the caller instead of opening them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOpener;

impl LinkOpener for LogOpener {
    fn open(&self, link: &Url) -> Result<(), String> {
        info!(host = link.host_str().unwrap_or_default(), "Chat link ready");
        Ok(())
    }
}

/// Opens a link, logging rather than propagating failures.
pub fn open_best_effort(opener: &dyn LinkOpener, link: &Url) {
    if let Err(reason) = opener.open(link) {
        warn!(reason = %reason, "Failed to open chat link");
    }
}

/// Builds a chat link with pre-filled text.
///
/// Non-digit characters are stripped from `phone`. An empty phone produces
/// a link that lets the sender pick the recipient.
///
/// # Errors
///
/// Returns `Internal` if the link cannot be assembled.
pub fn chat_link(phone: &str, text: &str) -> Result<Url, ApiError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    Url::parse_with_params(&format!("{CHAT_BASE}{digits}"), &[("text", text)]).map_err(|e| {
        ApiError::Internal {
            message: format!("Failed to build chat link: {e}"),
        }
    })
}

/// Text sent to the site owner when a visitor submits an inquiry.
#[must_use]
pub fn inquiry_notification_text(
    config: &AppConfig,
    inquiry: &Inquiry,
    service_name: &str,
) -> String {
    format!(
        "Hello {}! I've submitted a new inquiry.\n\n*Name:* {}\n*Service:* {}\n*Advanced Paid:* ₹{}\n*Description:* {}",
        config.display_name(),
        inquiry.client_name,
        service_name,
        inquiry.payment_done,
        inquiry.description,
    )
}

/// Text carrying a staff account's login details.
#[must_use]
pub fn credentials_text(config: &AppConfig, user: &User) -> String {
    format!(
        "*ADMIN LOGIN CREDENTIALS*\n\n*Name:* {}\n*Admin ID:* {}\n*Password:* {}\n\nPlease use these to login to the {} Admin Portal.",
        user.name,
        user.username,
        user.password,
        config.display_name(),
    )
}

/// Text sent to a client whose inquiry is in progress.
///
/// The balance is computed from the service's current price; a removed
/// service counts as price zero.
#[must_use]
pub fn client_update_text(config: &AppConfig, inquiry: &Inquiry) -> String {
    let total: u64 = config
        .find_service(&inquiry.service_id)
        .map_or(0, |service| service.price);
    let remaining: u64 = remaining_balance(total, inquiry.payment_done);
    format!(
        "*ADMIN UPDATE FROM {}*\n\n*Status:* Work in Progress\n*Plan:* {}\n\nYour project is being handled. Please clear the remaining ₹{} for final delivery.",
        config.display_name(),
        inquiry.solution_text.as_deref().unwrap_or_default(),
        remaining,
    )
}
