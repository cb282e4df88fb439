// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ensure_master_account, merge_with_defaults};
use serde_json::{Value, json};
use site_console_domain::{AppConfig, Role, default_config};

#[test]
fn test_non_object_yields_defaults() {
    assert_eq!(merge_with_defaults(&json!([1, 2, 3])), default_config());
    assert_eq!(merge_with_defaults(&Value::Null), default_config());
}

#[test]
fn test_missing_collections_are_filled_from_defaults() {
    let stored: Value = json!({
        "companyName": "Acme Studio",
        "services": [
            {"id": "svc-1", "category": "Web", "name": "Landing", "price": 900, "description": ""}
        ]
    });

    let config: AppConfig = merge_with_defaults(&stored);
    assert_eq!(config.company_name, "Acme Studio");
    assert_eq!(config.services.len(), 1);
    assert_eq!(config.reviews, default_config().reviews);
    assert_eq!(config.faqs, default_config().faqs);
    assert_eq!(config.slider_items, default_config().slider_items);
    assert_eq!(config.logo_initial, "E");
}

#[test]
fn test_wrongly_typed_fields_fall_back() {
    let stored: Value = json!({
        "companyName": 42,
        "regNo": "REG-9",
        "services": "not-a-list",
        "portfolio": {"id": "x"},
        "faqs": [{"id": "f9", "question": "Q?"}],
        "sliderItems": []
    });

    let config: AppConfig = merge_with_defaults(&stored);
    let defaults: AppConfig = default_config();
    assert_eq!(config.company_name, defaults.company_name);
    assert_eq!(config.reg_no, "REG-9");
    assert_eq!(config.services, defaults.services);
    assert_eq!(config.portfolio, defaults.portfolio);
    assert!(config.faqs.is_empty());
    assert!(config.slider_items.is_empty());
}

#[test]
fn test_malformed_records_are_dropped_individually() {
    let stored: Value = json!({
        "services": [
            {"id": "a", "category": "Web", "name": "A", "price": 100, "description": ""},
            {"id": "b", "category": "Web", "name": "B", "price": 200, "description": ""},
            {"id": "c", "category": "Web", "name": "C", "price": "n/a", "description": ""}
        ],
        "users": [
            {"id": "u1", "username": "owner", "password": "s3cret", "role": "MASTER", "name": "Owner"},
            {"id": "u2", "username": "temp", "password": "pw", "role": "STAFF", "name": "Temp"}
        ]
    });

    let mut config: AppConfig = merge_with_defaults(&stored);

    let service_ids: Vec<&str> = config.services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(service_ids, vec!["a", "b"]);
    assert_eq!(config.users.len(), 1);
    assert_eq!(config.users[0].username, "owner");
    assert_eq!(config.users[0].password, "s3cret");
    assert!(!ensure_master_account(&mut config));
}

#[test]
fn test_empty_string_branding_is_kept() {
    let stored: Value = json!({"tradeMark": "", "adminPhone": ""});
    let config: AppConfig = merge_with_defaults(&stored);
    assert_eq!(config.admin_phone, "");
}

#[test]
fn test_ensure_master_appends_seed() {
    let mut config: AppConfig = merge_with_defaults(&json!({
        "users": [{"id": "u1", "username": "staff", "password": "pw", "role": "ADMIN", "name": "S"}]
    }));
    assert_eq!(config.master_count(), 0);

    assert!(ensure_master_account(&mut config));
    assert_eq!(config.users.len(), 2);
    let master = config.users.last().unwrap();
    assert_eq!(master.id, "m1");
    assert_eq!(master.role, Role::Master);

    assert!(!ensure_master_account(&mut config));
}

#[test]
fn test_ensure_master_avoids_seed_id_collision() {
    let mut config: AppConfig = merge_with_defaults(&json!({
        "users": [{"id": "m1", "username": "master", "password": "pw", "role": "ADMIN", "name": "S"}]
    }));

    assert!(ensure_master_account(&mut config));
    assert_eq!(config.master_count(), 1);
    assert_eq!(config.users[1].id, "m1-restored");
    assert_eq!(config.users[1].username, "master-restored");
}
