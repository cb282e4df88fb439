// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_config;
use crate::{Command, CoreError, apply};
use site_console_domain::{
    AppConfig, BrandingField, Collection, DomainError, FaqItem, PortfolioItem, Review,
    ServiceField, SliderItem,
};

#[test]
fn test_set_branding() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::SetBranding {
        field: BrandingField::CompanyName,
        value: String::from("Acme Studio"),
    };

    let next: AppConfig = apply(&config, command).unwrap();
    assert_eq!(next.company_name, "Acme Studio");
    assert_eq!(config.company_name, "EGINTECH");
}

#[test]
fn test_add_service_defaults_category() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::AddService {
        id: String::from("svc-abc"),
        category: String::new(),
        name: String::from("Logo Design"),
        price: 1500,
        description: String::new(),
    };

    let next: AppConfig = apply(&config, command).unwrap();
    let added = next.services.last().unwrap();
    assert_eq!(added.id, "svc-abc");
    assert_eq!(added.category, "General");
    assert_eq!(next.services.len(), config.services.len() + 1);
}

#[test]
fn test_add_service_requires_name() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::AddService {
        id: String::from("svc-abc"),
        category: String::new(),
        name: String::from(" "),
        price: 0,
        description: String::new(),
    };

    let result: Result<AppConfig, CoreError> = apply(&config, command);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::MissingField {
            entity: "service",
            field: "name"
        }))
    ));
}

#[test]
fn test_add_rejects_duplicate_id() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::AddSliderItem {
        item: SliderItem {
            id: String::from("s1"),
            text: String::from("Festive offer"),
            image: String::from("data:image/png;base64,AAAA"),
        },
    };

    let result: Result<AppConfig, CoreError> = apply(&config, command);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateId {
            collection: Collection::SliderItems,
            ..
        }))
    ));
}

#[test]
fn test_update_service_field() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::UpdateService {
        id: String::from("sw2"),
        field: ServiceField::Price(8000),
    };

    let next: AppConfig = apply(&config, command).unwrap();
    assert_eq!(next.find_service("sw2").unwrap().price, 8000);
    assert_eq!(config.find_service("sw2").unwrap().price, 7500);
}

#[test]
fn test_update_missing_service() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::UpdateService {
        id: String::from("nope"),
        field: ServiceField::Name(String::from("x")),
    };

    let result: Result<AppConfig, CoreError> = apply(&config, command);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::NotFound { .. }))
    ));
}

#[test]
fn test_add_portfolio_defaults_category() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::AddPortfolioItem {
        item: PortfolioItem {
            id: String::from("p-1"),
            title: String::from("Candle Shop"),
            image: String::from("data:image/png;base64,AAAA"),
            category: String::new(),
            link: Some(String::from("candles.example")),
            app_name: None,
        },
    };

    let next: AppConfig = apply(&config, command).unwrap();
    assert_eq!(next.portfolio.last().unwrap().category, "Work");
}

#[test]
fn test_add_review_validates_rating() {
    let config: AppConfig = create_test_config();
    let command: Command = Command::AddReview {
        review: Review {
            id: String::from("rev-1"),
            client_name: String::from("Meera"),
            comment: String::from("Superb"),
            rating: 9,
        },
    };

    let result: Result<AppConfig, CoreError> = apply(&config, command);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidRating(9)))
    );
}

#[test]
fn test_add_and_remove_faq() {
    let config: AppConfig = create_test_config();
    let add: Command = Command::AddFaq {
        faq: FaqItem {
            id: String::from("faq-1"),
            question: String::from("Do you offer refunds?"),
            answer: String::from("Deposits are refundable before work starts."),
        },
    };
    let with_faq: AppConfig = apply(&config, add).unwrap();
    assert!(with_faq.contains_id(Collection::Faqs, "faq-1"));

    let remove: Command = Command::RemoveRecord {
        collection: Collection::Faqs,
        id: String::from("faq-1"),
    };
    let without: AppConfig = apply(&with_faq, remove).unwrap();
    assert_eq!(without, config);
}

#[test]
fn test_remove_missing_record() {
    let config: AppConfig = create_test_config();
    let remove: Command = Command::RemoveRecord {
        collection: Collection::Portfolio,
        id: String::from("p-missing"),
    };

    let result: Result<AppConfig, CoreError> = apply(&config, remove);
    assert!(result.is_err());
}

#[test]
fn test_commands_compose_on_latest_value() {
    let config: AppConfig = create_test_config();
    let first: AppConfig = apply(
        &config,
        Command::RemoveRecord {
            collection: Collection::Services,
            id: String::from("sw1"),
        },
    )
    .unwrap();
    let second: AppConfig = apply(
        &first,
        Command::RemoveRecord {
            collection: Collection::Services,
            id: String::from("sw2"),
        },
    )
    .unwrap();

    assert_eq!(second.services.len(), config.services.len() - 2);
    assert!(second.find_service("sw1").is_none());
    assert!(second.find_service("sw2").is_none());
}
