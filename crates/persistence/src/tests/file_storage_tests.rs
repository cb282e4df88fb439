// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConfigStore, FileStorage, PersistenceError, StorageBackend};
use site_console_domain::AppConfig;

#[test]
fn test_missing_key_reads_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage: FileStorage = FileStorage::open(dir.path()).unwrap();
    assert_eq!(storage.read("config").unwrap(), None);
}

#[test]
fn test_write_read_remove() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage: FileStorage = FileStorage::open(dir.path().join("data")).unwrap();

    storage.write("inquiries", "[]").unwrap();
    assert!(dir.path().join("data").join("inquiries.json").exists());
    assert_eq!(storage.read("inquiries").unwrap().as_deref(), Some("[]"));

    storage.remove("inquiries").unwrap();
    assert_eq!(storage.read("inquiries").unwrap(), None);
    storage.remove("inquiries").unwrap();
}

#[test]
fn test_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage: FileStorage = FileStorage::open(dir.path()).unwrap();
    assert!(matches!(
        storage.write("../escape", "x"),
        Err(PersistenceError::InvalidKey(_))
    ));
    assert!(matches!(storage.read(""), Err(PersistenceError::InvalidKey(_))));
}

#[test]
fn test_config_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let storage: FileStorage = FileStorage::open(dir.path()).unwrap();
        let mut store: ConfigStore<FileStorage> = ConfigStore::load(storage);
        store.transform(|config| {
            let mut next: AppConfig = config.clone();
            next.reg_no = String::from("REG-2026");
            next
        });
    }

    let storage: FileStorage = FileStorage::open(dir.path()).unwrap();
    let store: ConfigStore<FileStorage> = ConfigStore::load(storage);
    assert_eq!(store.current().reg_no, "REG-2026");
}
