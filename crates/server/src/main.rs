// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod routes;
mod session;
mod storage;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use site_console_api::{
    AnalysisTracker, ApiError, FallbackAnalyzer, PlanTemplateAnalyzer, SolutionAnalyzer,
};
use site_console_persistence::{ConfigStore, InquiryStore};
use tokio::sync::Mutex;
use tracing::info;

use crate::session::TabSessions;
use crate::storage::SiteStorage;

/// Site Console Server - HTTP host for the marketing site and admin console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory for the configuration and inquiry files. If not provided,
    /// data is kept in memory only.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Everything the site persists, plus the in-flight analysis tracker.
pub struct Site {
    pub config: ConfigStore<SiteStorage>,
    pub inquiries: InquiryStore<SiteStorage>,
    pub analyses: AnalysisTracker,
}

impl Site {
    /// Loads both documents from `storage`.
    #[must_use]
    pub fn load(storage: SiteStorage) -> Self {
        Self {
            config: ConfigStore::load(storage.clone()),
            inquiries: InquiryStore::load(storage),
            analyses: AnalysisTracker::new(),
        }
    }
}

/// Application state shared across handlers.
///
/// The site has a single exclusive owner. Tab sessions are locked
/// separately so that token checks never wait on site mutations.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Mutex<Site>>,
    pub tabs: Arc<Mutex<TabSessions>>,
    pub analyzer: Arc<dyn SolutionAnalyzer>,
}

impl AppState {
    #[must_use]
    pub fn new(site: Site, analyzer: Arc<dyn SolutionAnalyzer>) -> Self {
        Self {
            site: Arc::new(Mutex::new(site)),
            tabs: Arc::new(Mutex::new(TabSessions::new())),
            analyzer,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Builds an error response.
#[must_use]
pub fn error_body(status: StatusCode, error: &str, message: String) -> Response {
    let body: Json<ErrorResponse> = Json(ErrorResponse {
        error: error.to_string(),
        message,
    });
    (status, body).into_response()
}

/// HTTP error wrapper that implements `IntoResponse`.
pub struct HttpError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        error_body(self.status, self.error, self.message)
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let (status, error): (StatusCode, &'static str) = match &err {
            ApiError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "authentication_failed")
            }
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "unauthorized"),
            ApiError::DomainRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "domain_rule_violation")
            }
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::ConfirmationRequired { .. } => {
                (StatusCode::PRECONDITION_REQUIRED, "confirmation_required")
            }
            ApiError::InvalidBackup { .. } => (StatusCode::BAD_REQUEST, "invalid_backup"),
            ApiError::AnalysisFailed { .. } => (StatusCode::BAD_GATEWAY, "analysis_failed"),
            ApiError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        Self {
            status,
            error,
            message: err.to_string(),
        }
    }
}

/// Builds the router with all routes.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::handle_health))
        .route("/site", get(routes::handle_get_site))
        .route("/site/quote", get(routes::handle_get_quote))
        .route("/inquiries", post(routes::handle_submit_inquiry))
        .route("/auth/login", post(routes::handle_login))
        .route("/auth/logout", post(routes::handle_logout))
        .route("/auth/session", get(routes::handle_get_session))
        .route("/console/capabilities", get(routes::handle_get_capabilities))
        .route("/console/inquiries", get(routes::handle_list_inquiries))
        .route(
            "/console/inquiries/{id}/analyze",
            post(routes::handle_analyze_inquiry),
        )
        .route(
            "/console/inquiries/{id}/complete",
            post(routes::handle_complete_inquiry),
        )
        .route(
            "/console/inquiries/{id}/client-link",
            get(routes::handle_client_link),
        )
        .route("/console/branding", put(routes::handle_set_branding))
        .route("/console/logo", put(routes::handle_set_logo))
        .route("/console/commit", post(routes::handle_commit))
        .route("/console/services", post(routes::handle_add_service))
        .route(
            "/console/services/{id}",
            patch(routes::handle_update_service).delete(routes::handle_remove_service),
        )
        .route("/console/portfolio", post(routes::handle_add_portfolio_item))
        .route(
            "/console/portfolio/{id}",
            delete(routes::handle_remove_portfolio_item),
        )
        .route("/console/slider", post(routes::handle_add_slider_item))
        .route(
            "/console/slider/{id}",
            delete(routes::handle_remove_slider_item),
        )
        .route("/console/reviews", post(routes::handle_add_review))
        .route("/console/reviews/{id}", delete(routes::handle_remove_review))
        .route("/console/faqs", post(routes::handle_add_faq))
        .route("/console/faqs/{id}", delete(routes::handle_remove_faq))
        .route(
            "/console/users",
            get(routes::handle_list_users).post(routes::handle_add_user),
        )
        .route("/console/users/{id}", delete(routes::handle_remove_user))
        .route(
            "/console/users/{id}/share-link",
            get(routes::handle_share_credentials),
        )
        .route("/console/backup", get(routes::handle_export_backup))
        .route("/console/restore", post(routes::handle_restore_backup))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Site Console Server");

    let storage: SiteStorage = SiteStorage::open(args.data_dir.as_deref())?;
    match &storage {
        SiteStorage::File(files) => {
            info!(dir = %files.dir().display(), "Using file storage");
        }
        SiteStorage::Memory(_) => info!("Using in-memory storage; data is lost on exit"),
    }

    let analyzer: Arc<dyn SolutionAnalyzer> =
        Arc::new(FallbackAnalyzer::new(PlanTemplateAnalyzer));
    let app_state: AppState = AppState::new(Site::load(storage), analyzer);
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
