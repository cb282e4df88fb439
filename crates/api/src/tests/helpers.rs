// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Mutex;

use async_trait::async_trait;
use site_console_domain::{AppConfig, Role, Service, Session, User, default_config};
use site_console_persistence::{ConfigStore, InquiryStore, MemoryStorage};
use url::Url;

use crate::{AnalysisError, InquiryFormRequest, LinkOpener, SolutionAnalyzer};

pub const TEST_IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

pub fn create_test_master() -> Session {
    Session {
        id: String::from("m1"),
        username: String::from("master"),
        role: Role::Master,
        name: String::from("Master Admin"),
    }
}

pub fn create_test_staff() -> Session {
    Session {
        id: String::from("a1"),
        username: String::from("staff"),
        role: Role::Admin,
        name: String::from("Staff Member"),
    }
}

pub fn create_test_config() -> AppConfig {
    let mut config: AppConfig = default_config();
    config.services = vec![
        Service {
            id: String::from("svc-web"),
            category: String::from("Software"),
            name: String::from("Website Development"),
            price: 5000,
            description: String::from("A small business site"),
        },
        Service {
            id: String::from("svc-fix"),
            category: String::from("Hardware"),
            name: String::from("Bug Fix"),
            price: 100,
            description: String::from("One defect"),
        },
    ];
    config.users.push(User {
        id: String::from("a1"),
        username: String::from("staff"),
        password: String::from("staffpass"),
        role: Role::Admin,
        name: String::from("Staff Member"),
    });
    config
}

pub fn create_test_config_store() -> ConfigStore<MemoryStorage> {
    let mut store: ConfigStore<MemoryStorage> = ConfigStore::load(MemoryStorage::new());
    store.replace(create_test_config());
    store
}

pub fn create_test_inquiry_store() -> InquiryStore<MemoryStorage> {
    InquiryStore::load(MemoryStorage::new())
}

pub fn create_test_form(service_id: &str) -> InquiryFormRequest {
    InquiryFormRequest {
        client_name: String::from("Asha Verma"),
        phone: String::from("+91 98765-43210"),
        email: String::from("asha@example.com"),
        service_id: Some(String::from(service_id)),
        description: String::from("Need a shop for handmade candles"),
        images: Vec::new(),
    }
}

/// Records every link it is asked to open.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<Url>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, link: &Url) -> Result<(), String> {
        self.opened.lock().unwrap().push(link.clone());
        Ok(())
    }
}

/// Fails every open, like a blocked popup.
#[derive(Debug, Default)]
pub struct BlockedOpener;

impl LinkOpener for BlockedOpener {
    fn open(&self, _link: &Url) -> Result<(), String> {
        Err(String::from("popup blocked"))
    }
}

/// Returns a fixed outcome and records what it was asked.
#[derive(Debug)]
pub struct ScriptedAnalyzer {
    pub outcome: Result<String, AnalysisError>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedAnalyzer {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(String::from(text)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: Err(AnalysisError::Engine(String::from("quota exhausted"))),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SolutionAnalyzer for ScriptedAnalyzer {
    async fn solve_inquiry(
        &self,
        description: &str,
        service_name: &str,
    ) -> Result<String, AnalysisError> {
        self.calls
            .lock()
            .unwrap()
            .push((String::from(description), String::from(service_name)));
        self.outcome.clone()
    }
}

pub fn text_param(link: &Url) -> String {
    link.query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
