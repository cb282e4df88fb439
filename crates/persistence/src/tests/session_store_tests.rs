// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MemoryStorage, SESSION_KEY, SessionStore};
use site_console_domain::{Session, default_config};

fn create_test_session() -> Session {
    default_config().users[0].to_session()
}

#[test]
fn test_empty_storage_has_no_session() {
    let store: SessionStore<MemoryStorage> = SessionStore::load(MemoryStorage::new());
    assert!(store.current().is_none());
}

#[test]
fn test_set_and_reload() {
    let mut store: SessionStore<MemoryStorage> = SessionStore::load(MemoryStorage::new());
    store.set(create_test_session());
    assert_eq!(store.current(), Some(&create_test_session()));

    let raw: &str = store.backend().get(SESSION_KEY).unwrap();
    assert!(!raw.contains("password"));

    let reloaded: SessionStore<MemoryStorage> = SessionStore::load(store.backend().clone());
    assert_eq!(reloaded.current(), Some(&create_test_session()));
}

#[test]
fn test_clear_removes_key() {
    let mut store: SessionStore<MemoryStorage> = SessionStore::load(MemoryStorage::new());
    store.set(create_test_session());
    store.clear();
    assert!(store.current().is_none());
    assert!(store.backend().get(SESSION_KEY).is_none());
}

#[test]
fn test_corrupt_session_is_logged_out() {
    let storage: MemoryStorage = MemoryStorage::with_entry(SESSION_KEY, "{\"id\":true}");
    let store: SessionStore<MemoryStorage> = SessionStore::load(storage);
    assert!(store.current().is_none());
}
