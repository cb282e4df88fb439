// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FailingStorage, create_test_inquiry};
use crate::{INQUIRIES_KEY, InquiryStore, MemoryStorage};
use site_console_domain::{Inquiry, InquiryPatch, InquiryStatus};

#[test]
fn test_load_defaults_to_empty() {
    let store: InquiryStore<MemoryStorage> = InquiryStore::load(MemoryStorage::new());
    assert!(store.all().is_empty());

    let corrupt: MemoryStorage = MemoryStorage::with_entry(INQUIRIES_KEY, "{\"oops\":1}");
    let store: InquiryStore<MemoryStorage> = InquiryStore::load(corrupt);
    assert!(store.all().is_empty());
}

#[test]
fn test_append_prepends() {
    let mut store: InquiryStore<MemoryStorage> = InquiryStore::load(MemoryStorage::new());
    store.append(create_test_inquiry("A"));
    store.append(create_test_inquiry("B"));
    store.append(create_test_inquiry("C"));

    let ids: Vec<&str> = store.all().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "B", "A"]);

    let reloaded: InquiryStore<MemoryStorage> = InquiryStore::load(store.backend().clone());
    assert_eq!(reloaded.all(), store.all());
}

#[test]
fn test_patch_merges_fields() {
    let mut store: InquiryStore<MemoryStorage> = InquiryStore::load(MemoryStorage::new());
    store.append(create_test_inquiry("A"));

    let patch: InquiryPatch = InquiryPatch {
        status: Some(InquiryStatus::InProgress),
        solution_text: Some(String::from("1. Wireframes")),
        ..InquiryPatch::default()
    };
    assert!(store.patch("A", patch));

    let inquiry: &Inquiry = store.find("A").unwrap();
    assert_eq!(inquiry.status, InquiryStatus::InProgress);
    assert_eq!(inquiry.solution_text.as_deref(), Some("1. Wireframes"));
    assert_eq!(inquiry.client_name, "Asha");
}

#[test]
fn test_patch_missing_id_is_noop() {
    let mut store: InquiryStore<MemoryStorage> = InquiryStore::load(MemoryStorage::new());
    assert!(!store.patch("ghost", InquiryPatch::status(InquiryStatus::Completed)));
    assert!(store.backend().get(INQUIRIES_KEY).is_none());
}

#[test]
fn test_malformed_entries_are_skipped() {
    let good: String = serde_json::to_string(&create_test_inquiry("A")).unwrap();
    let raw: String = format!("[{good}, {{\"id\": 7}}]");
    let store: InquiryStore<MemoryStorage> =
        InquiryStore::load(MemoryStorage::with_entry(INQUIRIES_KEY, &raw));
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.all()[0].id, "A");
}

#[test]
fn test_replace_all() {
    let mut store: InquiryStore<MemoryStorage> = InquiryStore::load(MemoryStorage::new());
    store.append(create_test_inquiry("A"));
    store.replace_all(vec![create_test_inquiry("X"), create_test_inquiry("Y")]);
    assert_eq!(store.all().len(), 2);
    assert!(store.find("A").is_none());
}

#[test]
fn test_failing_backend_keeps_appended_inquiry() {
    let mut store: InquiryStore<FailingStorage> = InquiryStore::load(FailingStorage::default());
    store.append(create_test_inquiry("A"));
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.backend().write_attempts, 1);
}
