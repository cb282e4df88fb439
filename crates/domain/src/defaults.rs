// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed configuration used when nothing has been saved yet.

use crate::types::{AppConfig, FaqItem, PortfolioItem, Review, Role, Service, SliderItem, User};

/// Brand used in outbound messages when the company name is blank.
pub const FALLBACK_COMPANY_NAME: &str = "EGINTECH";

fn service(id: &str, category: &str, name: &str, price: u64, description: &str) -> Service {
    Service {
        id: id.to_string(),
        category: category.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
    }
}

fn slide(id: &str, text: &str, seed: &str) -> SliderItem {
    SliderItem {
        id: id.to_string(),
        text: text.to_string(),
        image: format!("https://picsum.photos/seed/{seed}/1600/600"),
    }
}

/// The account seeded into every fresh configuration.
///
/// Also re-appended on load when a stored configuration has lost every
/// master account.
#[must_use]
pub fn seed_master_user() -> User {
    User {
        id: "m1".to_string(),
        username: "master".to_string(),
        password: "password123".to_string(),
        role: Role::Master,
        name: "Master Admin".to_string(),
    }
}

/// Seed testimonials.
#[must_use]
pub fn default_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".to_string(),
            client_name: "Priya S.".to_string(),
            comment: "Our store went live in two weeks and orders started the same day."
                .to_string(),
            rating: 5,
        },
        Review {
            id: "r2".to_string(),
            client_name: "Rahul K.".to_string(),
            comment: "The DMIT session gave my son a clear direction. Very professional."
                .to_string(),
            rating: 4,
        },
    ]
}

/// Seed frequently asked questions.
#[must_use]
pub fn default_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            id: "f1".to_string(),
            question: "How much do I pay upfront?".to_string(),
            answer: "Half of the service price is taken as an advance when you submit an inquiry. The balance is due on delivery.".to_string(),
        },
        FaqItem {
            id: "f2".to_string(),
            question: "How will you contact me?".to_string(),
            answer: "Our team reaches out on WhatsApp at the phone number you provide.".to_string(),
        },
        FaqItem {
            id: "f3".to_string(),
            question: "Can I send reference images?".to_string(),
            answer: "Yes. You can attach up to 12 images with your inquiry.".to_string(),
        },
    ]
}

/// Builds the seed site configuration.
#[must_use]
pub fn default_config() -> AppConfig {
    const WEB: &str = "Website Designing";
    const SOFTWARE: &str = "Software Development";
    const EDUCATION: &str = "Services and Education";

    AppConfig {
        company_name: FALLBACK_COMPANY_NAME.to_string(),
        logo_initial: "E".to_string(),
        logo_url: String::new(),
        reg_no: "PENDING-REG".to_string(),
        trade_mark: String::new(),
        reg_address: "Enter Registered Address".to_string(),
        service_address: "Enter Service Address".to_string(),
        admin_phone: "9934490025".to_string(),
        business_head: "Owner".to_string(),
        tech_head: "Lead Tech".to_string(),
        tech_head_phone: String::new(),
        services: vec![
            service(
                "sw1",
                WEB,
                "Static Informatic Website",
                5000,
                "Clean, fast, and informative static site for your business.",
            ),
            service(
                "sw2",
                WEB,
                "Dynamic Informatic Website",
                7500,
                "Interactive site with content management capabilities.",
            ),
            service(
                "sw3",
                WEB,
                "Static E-commerce Website",
                15000,
                "Basic online store setup with payment links.",
            ),
            service(
                "sw4",
                WEB,
                "Dynamic E-commerce Website",
                25000,
                "Full-featured online store with inventory and cart management.",
            ),
            service(
                "sd1",
                SOFTWARE,
                "Software/Mobile App",
                50000,
                "Custom software or cross-platform mobile application development.",
            ),
            service(
                "ed1",
                EDUCATION,
                "Education-Career Guidance",
                100,
                "Professional advice for your academic and career path.",
            ),
            service(
                "ed2",
                EDUCATION,
                "Question Paper Generation",
                500,
                "1 full set (all subjects) or 5 sets (single subject).",
            ),
            service(
                "ed3",
                EDUCATION,
                "DMIT Test",
                1000,
                "Dermatoglyphics Multiple Intelligence Test for career mapping.",
            ),
            service(
                "ed4",
                EDUCATION,
                "Health-Fitness Guidance",
                100,
                "Personalized wellness and nutrition advice.",
            ),
            service(
                "ed5",
                EDUCATION,
                "Any Report Analysis",
                100,
                "Expert technical or business report breakdown.",
            ),
        ],
        users: vec![seed_master_user()],
        portfolio: vec![
            PortfolioItem {
                id: "sample1".to_string(),
                title: "E-commerce Platform".to_string(),
                image: "https://picsum.photos/seed/web1/800/450".to_string(),
                category: "Web Design".to_string(),
                link: None,
                app_name: None,
            },
            PortfolioItem {
                id: "sample2".to_string(),
                title: "Educational Portal".to_string(),
                image: "https://picsum.photos/seed/soft1/800/450".to_string(),
                category: "Software".to_string(),
                link: None,
                app_name: None,
            },
        ],
        slider_items: vec![
            slide("s1", "Join us for Excellent Growth", "growth"),
            slide("s2", "Low Cost - High Quality", "quality"),
            slide("s3", "5+1 Free Scheme", "offer"),
            slide("s4", "Assured Gift for Everyone", "gift"),
        ],
        reviews: default_reviews(),
        faqs: default_faqs(),
    }
}
