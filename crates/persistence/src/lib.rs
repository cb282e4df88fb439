// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the site console.
//!
//! All state lives in a key/value storage backend as whole JSON documents:
//!
//! - `config`: the site configuration (long-lived storage)
//! - `inquiries`: the inquiry list, newest first (long-lived storage)
//! - `session`: the logged-in operator (tab-lived storage)
//!
//! Each document has exactly one owning store. Stores load once at startup
//! and write the whole document after every change.
//!
//! ## Failure Policy
//!
//! - Loads never fail: missing or corrupt data falls back to defaults
//! - Writes are best-effort: failures are logged and the in-memory value wins
//! - Nothing is retried

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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod config_store;
mod error;
mod inquiry_store;
mod merge;
mod session_store;

#[cfg(test)]
mod tests;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use config_store::{ConfigStore, Mutation};
pub use error::PersistenceError;
pub use inquiry_store::InquiryStore;
pub use merge::{ensure_master_account, merge_with_defaults};
pub use session_store::SessionStore;

/// Storage key of the site configuration.
pub const CONFIG_KEY: &str = "config";
/// Storage key of the inquiry list.
pub const INQUIRIES_KEY: &str = "inquiries";
/// Storage key of the tab session.
pub const SESSION_KEY: &str = "session";
