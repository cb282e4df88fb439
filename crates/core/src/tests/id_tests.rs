// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_config;
use crate::{generate_id, next_collection_id, next_inquiry_id};
use site_console_domain::{AppConfig, Collection};
use std::cell::Cell;

#[test]
fn test_collection_ids_carry_prefix() {
    let config: AppConfig = create_test_config();
    let id: String = next_collection_id(&config, Collection::Services);
    assert!(id.starts_with("svc-"));
    assert_eq!(id.len(), "svc-".len() + 9);

    let id: String = next_collection_id(&config, Collection::SliderItems);
    assert!(id.starts_with("slide-"));

    let id: String = next_collection_id(&config, Collection::Users);
    assert_eq!(id.len(), 9);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_generate_id_retries_on_collision() {
    let attempts: Cell<u32> = Cell::new(0);
    let id: String = generate_id("p-", |_| {
        attempts.set(attempts.get() + 1);
        attempts.get() < 3
    });
    assert_eq!(attempts.get(), 3);
    assert!(id.starts_with("p-"));
}

#[test]
fn test_inquiry_ids_differ() {
    let first: String = next_inquiry_id(&[]);
    let second: String = next_inquiry_id(&[]);
    assert_eq!(first.len(), 9);
    assert_ne!(first, second);
}
