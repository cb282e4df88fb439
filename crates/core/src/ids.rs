// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opaque record ids.
//!
//! Ids are nine random lowercase alphanumerics behind a per-collection prefix.
//! They carry no ordering or meaning.

use rand::distr::{Alphanumeric, SampleString};
use site_console_domain::{AppConfig, Collection, Inquiry};

const ID_LEN: usize = 9;

fn random_suffix() -> String {
    Alphanumeric
        .sample_string(&mut rand::rng(), ID_LEN)
        .to_ascii_lowercase()
}

/// Generates a prefixed id that `taken` reports as free.
///
/// Collisions are astronomically rare; on one a fresh id is drawn.
#[must_use]
pub fn generate_id<F>(prefix: &str, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id: String = format!("{prefix}{}", random_suffix());
        if !taken(&id) {
            return id;
        }
    }
}

/// Generates a fresh id for a new record in a configuration collection.
#[must_use]
pub fn next_collection_id(config: &AppConfig, collection: Collection) -> String {
    generate_id(collection.id_prefix(), |id| config.contains_id(collection, id))
}

/// Generates a fresh inquiry id.
#[must_use]
pub fn next_inquiry_id(existing: &[Inquiry]) -> String {
    generate_id("", |id| existing.iter().any(|i| i.id == id))
}
