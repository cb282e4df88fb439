// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-by-field reconciliation of a stored configuration with defaults.
//!
//! Configuration documents outlive releases. A document written by an older
//! release may lack collections that were added later, and a hand-edited one
//! may carry the wrong JSON type for a field. Each field is therefore taken
//! from the stored document only if it has the expected shape.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use site_console_domain::{
    AppConfig, BrandingField, Collection, User, default_config, seed_master_user,
};
use tracing::warn;

fn take_collection<T>(object: &Map<String, Value>, collection: Collection, fallback: &mut Vec<T>)
where
    T: DeserializeOwned,
{
    let name: &str = collection.as_str();
    match object.get(name) {
        None => {}
        Some(Value::Array(items)) => {
            let kept: Vec<T> = items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match T::deserialize(item) {
                    Ok(decoded) => Some(decoded),
                    Err(err) => {
                        warn!(
                            collection = name,
                            index,
                            error = %err,
                            "Skipping malformed stored record"
                        );
                        None
                    }
                })
                .collect();
            *fallback = kept;
        }
        Some(_) => {
            warn!(collection = name, "Stored collection is not an array; using defaults");
        }
    }
}

/// Merges a stored configuration document over the seed configuration.
///
/// - A value that is not a JSON object yields the seed configuration.
/// - A branding field is taken if it is a string.
/// - A collection is taken if it is an array. Elements that do not decode
///   are dropped and the rest are kept in order.
///
/// Master-account presence is not checked here; see
/// [`ensure_master_account`].
#[must_use]
pub fn merge_with_defaults(stored: &Value) -> AppConfig {
    let mut config: AppConfig = default_config();
    let Some(object) = stored.as_object() else {
        warn!("Stored configuration is not an object; using defaults");
        return config;
    };

    for field in BrandingField::ALL {
        if let Some(Value::String(value)) = object.get(field.as_str()) {
            value.clone_into(config.branding_mut(field));
        }
    }

    take_collection(object, Collection::Services, &mut config.services);
    take_collection(object, Collection::Users, &mut config.users);
    take_collection(object, Collection::Portfolio, &mut config.portfolio);
    take_collection(object, Collection::SliderItems, &mut config.slider_items);
    take_collection(object, Collection::Reviews, &mut config.reviews);
    take_collection(object, Collection::Faqs, &mut config.faqs);

    config
}

/// Appends the seed master account when no master account is present.
///
/// Returns true if the account list was changed.
pub fn ensure_master_account(config: &mut AppConfig) -> bool {
    if config.master_count() > 0 {
        return false;
    }
    let mut seed: User = seed_master_user();
    // The stored list may already use the seed id for a staff account.
    if config.find_user(&seed.id).is_some()
        || config.users.iter().any(|u| u.username == seed.username)
    {
        seed.id = format!("{}-restored", seed.id);
        seed.username = format!("{}-restored", seed.username);
    }
    warn!(
        user_id = %seed.id,
        username = %seed.username,
        "No master account in stored configuration; restoring seed master"
    );
    config.users.push(seed);
    true
}
