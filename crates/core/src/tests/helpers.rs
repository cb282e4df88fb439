// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::NewInquiry;
use site_console_domain::{AppConfig, ImageAttachments, Role, User, default_config};

pub fn create_test_config() -> AppConfig {
    default_config()
}

pub fn create_test_staff(id: &str, username: &str) -> User {
    User {
        id: String::from(id),
        username: String::from(username),
        password: String::from("staffpass"),
        role: Role::Admin,
        name: String::from("Staff Member"),
    }
}

pub fn create_test_form(service_id: &str) -> NewInquiry {
    NewInquiry {
        client_name: String::from("Asha Verma"),
        phone: String::from("9876543210"),
        email: String::from("asha@example.com"),
        service_id: String::from(service_id),
        description: String::from("Need a shop for handmade candles"),
        images: ImageAttachments::new(),
    }
}
