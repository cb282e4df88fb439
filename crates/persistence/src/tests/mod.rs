// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod file_storage_tests;
mod inquiry_store_tests;
mod merge_tests;
mod session_store_tests;

use crate::{PersistenceError, StorageBackend};
use site_console_domain::{Inquiry, InquiryStatus};

/// A backend whose writes always fail. Reads return `initial`.
#[derive(Debug, Default)]
pub struct FailingStorage {
    pub initial: Option<String>,
    pub write_attempts: usize,
}

impl StorageBackend for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.initial.clone())
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        self.write_attempts += 1;
        Err(PersistenceError::Unavailable(String::from("quota exceeded")))
    }

    fn remove(&mut self, _key: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable(String::from("quota exceeded")))
    }
}

pub fn create_test_inquiry(id: &str) -> Inquiry {
    Inquiry {
        id: String::from(id),
        client_name: String::from("Asha"),
        phone: String::from("9876543210"),
        email: String::new(),
        service_id: String::from("sw1"),
        description: String::from("Need a site"),
        images: Vec::new(),
        payment_done: 2500,
        status: InquiryStatus::Pending,
        solution_text: None,
        timestamp: 1_767_225_600_000,
    }
}
