// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use site_console_api::{AnalysisError, PlanTemplateAnalyzer, SolutionAnalyzer};
use tower::ServiceExt;

use crate::storage::SiteStorage;
use crate::{AppState, ErrorResponse, Site, build_router};

/// Analyzer that always fails, for exercising the Pending path.
struct BrokenAnalyzer;

#[async_trait]
impl SolutionAnalyzer for BrokenAnalyzer {
    async fn solve_inquiry(
        &self,
        _description: &str,
        _service_name: &str,
    ) -> Result<String, AnalysisError> {
        Err(AnalysisError::Engine(String::from("offline")))
    }
}

/// Analyzer that takes a while to answer.
struct SlowAnalyzer;

#[async_trait]
impl SolutionAnalyzer for SlowAnalyzer {
    async fn solve_inquiry(
        &self,
        _description: &str,
        service_name: &str,
    ) -> Result<String, AnalysisError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(format!("Plan for {service_name}"))
    }
}

fn create_test_app_state(analyzer: Arc<dyn SolutionAnalyzer>) -> AppState {
    let storage: SiteStorage = SiteStorage::open(None).expect("memory storage");
    AppState::new(Site::load(storage), analyzer)
}

fn create_test_app() -> Router {
    build_router(create_test_app_state(Arc::new(PlanTemplateAnalyzer)))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router, username: &str, password: &str, role: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "username": username, "password": password, "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["sessionToken"].as_str().unwrap().to_string()
}

async fn login_master(app: &Router) -> String {
    login(app, "master", "password123", "MASTER").await
}

async fn login_staff(app: &Router) -> String {
    let master = login_master(app).await;
    let (status, _) = send(
        app,
        "POST",
        "/console/users",
        Some(&master),
        Some(json!({ "username": "staff", "password": "staffpass", "name": "Staff" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    login(app, "staff", "staffpass", "ADMIN").await
}

async fn submit_inquiry(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/inquiries",
        None,
        Some(json!({
            "clientName": "Asha Verma",
            "phone": "9876543210",
            "description": "Need a shop for handmade candles"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["inquiry"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_public_site_has_no_accounts() {
    let app = create_test_app();

    let (status, body) = send(&app, "GET", "/site", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyName"], "EGINTECH");
    assert!(body.get("users").is_none());
    assert!(!body["services"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_quote_defaults_to_first_service() {
    let app = create_test_app();
    let (_, site) = send(&app, "GET", "/site", None, None).await;
    let price = site["services"][0]["price"].as_u64().unwrap();

    let (status, body) = send(&app, "GET", "/site/quote", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"].as_u64(), Some(price));
    assert_eq!(body["deposit"].as_u64(), Some(price.div_ceil(2)));
}

#[tokio::test]
async fn test_submit_inquiry_returns_notification_link() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/inquiries",
        None,
        Some(json!({
            "clientName": "Asha Verma",
            "phone": "9876543210",
            "description": "Need a shop"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["inquiry"]["status"], "Pending");
    assert!(
        body["notificationLink"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/9934490025?text=")
    );
}

#[tokio::test]
async fn test_submit_inquiry_with_missing_phone_is_bad_request() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/inquiries",
        None,
        Some(json!({ "clientName": "Asha", "description": "Need a shop" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error, "invalid_input");
}

#[tokio::test]
async fn test_login_with_wrong_tab_is_unauthorized() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "username": "master", "password": "password123", "role": "ADMIN" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid ADMIN credentials")
    );
}

#[tokio::test]
async fn test_console_requires_token() {
    let app = create_test_app();

    let (missing, _) = send(&app, "GET", "/console/inquiries", None, None).await;
    let (unknown, _) = send(&app, "GET", "/console/inquiries", Some("nope"), None).await;

    assert_eq!(missing, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_and_logout() {
    let app = create_test_app();
    let token = login_master(&app).await;

    let (status, body) = send(&app, "GET", "/auth/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "MASTER");

    let (status, _) = send(&app, "POST", "/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/auth/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tabs_are_independent() {
    let app = create_test_app();
    let first = login_master(&app).await;
    let second = login_master(&app).await;

    send(&app, "POST", "/auth/logout", Some(&first), None).await;

    let (status, _) = send(&app, "GET", "/auth/session", Some(&second), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_staff_cannot_edit_services() {
    let app = create_test_app();
    let staff = login_staff(&app).await;
    let (_, before) = send(&app, "GET", "/site", None, None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/console/services",
        Some(&staff),
        Some(json!({ "name": "Logo Design", "price": 800 })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "unauthorized");
    let (_, after) = send(&app, "GET", "/site", None, None).await;
    assert_eq!(before, after);

    let (status, body) = send(&app, "GET", "/console/capabilities", Some(&staff), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canEditServices"], false);
    assert_eq!(body["canProcessInquiries"], true);
}

#[tokio::test]
async fn test_master_service_lifecycle() {
    let app = create_test_app();
    let master = login_master(&app).await;

    let (status, service) = send(
        &app,
        "POST",
        "/console/services",
        Some(&master),
        Some(json!({ "name": "Logo Design", "price": 799.6, "description": "Three concepts" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(service["category"], "General");
    assert_eq!(service["price"], 800);
    let id = service["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/console/services/{id}"),
        Some(&master),
        Some(json!({ "field": "price", "value": 900 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 900);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/console/services/{id}"),
        Some(&master),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/console/services/{id}?confirmed=true"),
        Some(&master),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/console/services/{id}?confirmed=true"),
        Some(&master),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_branding_update_is_public() {
    let app = create_test_app();
    let master = login_master(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/console/branding",
        Some(&master),
        Some(json!({ "field": "companyName", "value": "Acme Repairs" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyName"], "Acme Repairs");
    let (_, site) = send(&app, "GET", "/site", None, None).await;
    assert_eq!(site["companyName"], "Acme Repairs");
}

#[tokio::test]
async fn test_master_cannot_remove_self() {
    let app = create_test_app();
    let master = login_master(&app).await;

    let (status, body) = send(
        &app,
        "DELETE",
        "/console/users/m1?confirmed=true",
        Some(&master),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "domain_rule_violation");
}

#[tokio::test]
async fn test_analysis_moves_inquiry_to_in_progress() {
    let app = create_test_app();
    let id = submit_inquiry(&app).await;
    let staff = login_staff(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/console/inquiries/{id}/analyze"),
        Some(&staff),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inquiry"]["status"], "In Progress");
    assert!(body.get("notice").is_none());

    let (status, link) = send(
        &app,
        "GET",
        &format!("/console/inquiries/{id}/client-link"),
        Some(&staff),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        link["link"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/9876543210?text=")
    );

    let (status, body) = send(
        &app,
        "POST",
        &format!("/console/inquiries/{id}/complete"),
        Some(&staff),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Completed");
}

#[tokio::test]
async fn test_failed_analysis_leaves_inquiry_pending() {
    let app = build_router(create_test_app_state(Arc::new(BrokenAnalyzer)));
    let id = submit_inquiry(&app).await;
    let master = login_master(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/console/inquiries/{id}/analyze"),
        Some(&master),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inquiry"]["status"], "Pending");
    assert!(body["notice"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        &format!("/console/inquiries/{id}/analyze"),
        Some(&master),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_abandoned_analysis_still_completes() {
    let state = create_test_app_state(Arc::new(SlowAnalyzer));
    let app = build_router(state.clone());
    let id = submit_inquiry(&app).await;
    let master = login_master(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/console/inquiries/{id}/analyze"))
        .header(header::AUTHORIZATION, format!("Bearer {master}"))
        .body(Body::empty())
        .unwrap();
    let abandoned =
        tokio::time::timeout(Duration::from_millis(20), app.clone().oneshot(request)).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(400)).await;

    let (status, inquiries) = send(&app, "GET", "/console/inquiries", Some(&master), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inquiries[0]["status"], "In Progress");
    assert!(
        inquiries[0]["solutionText"]
            .as_str()
            .unwrap()
            .starts_with("Plan for ")
    );
    assert!(!state.site.lock().await.analyses.is_in_flight(&id));
}

#[tokio::test]
async fn test_backup_and_restore() {
    let app = create_test_app();
    submit_inquiry(&app).await;
    let master = login_master(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/console/backup")
                .header(header::AUTHORIZATION, format!("Bearer {master}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("egintech_backup_"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let document: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(document["version"], "1.0");

    let fresh = create_test_app();
    let fresh_master = login_master(&fresh).await;

    let (status, _) = send(
        &fresh,
        "POST",
        "/console/restore",
        Some(&fresh_master),
        Some(json!({ "document": document.clone() })),
    )
    .await;
    assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);

    let (status, summary) = send(
        &fresh,
        "POST",
        "/console/restore",
        Some(&fresh_master),
        Some(json!({ "document": document, "confirmed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["inquiries"], 1);

    let (_, inquiries) = send(&fresh, "GET", "/console/inquiries", Some(&fresh_master), None).await;
    assert_eq!(inquiries.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_restore_rejects_malformed_document() {
    let app = create_test_app();
    let master = login_master(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/console/restore",
        Some(&master),
        Some(json!({ "document": { "config": "nope" }, "confirmed": true })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_backup");
}

#[tokio::test]
async fn test_file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let open = || {
        let storage = SiteStorage::open(Some(dir.path())).unwrap();
        build_router(AppState::new(
            Site::load(storage),
            Arc::new(PlanTemplateAnalyzer),
        ))
    };

    let app = open();
    let master = login_master(&app).await;
    send(
        &app,
        "PUT",
        "/console/branding",
        Some(&master),
        Some(json!({ "field": "companyName", "value": "Persisted Co" })),
    )
    .await;
    submit_inquiry(&app).await;

    let restarted = open();
    let (_, site) = send(&restarted, "GET", "/site", None, None).await;
    assert_eq!(site["companyName"], "Persisted Co");

    let master = login_master(&restarted).await;
    let (_, inquiries) = send(&restarted, "GET", "/console/inquiries", Some(&master), None).await;
    assert_eq!(inquiries.as_array().unwrap().len(), 1);
}
