// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers.
//!
//! Each handler takes the site lock, calls into `site_console_api` and maps
//! the result. Rules live in the API crate, never here.

use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use site_console_api::{
    AddFaqRequest, AddPortfolioRequest, AddReviewRequest, AddServiceRequest, AddSliderRequest,
    AddUserRequest, AnalysisError, AnalysisJob, AnalysisResponse, ApiError, AuthenticationService,
    ConfirmRequest, ConsoleCapabilities, ExportedSnapshot, ImportSummary, InquiryFormRequest,
    LinkResponse, LogOpener, LoginRequest, LoginResponse, PublicSite, QuotePreview,
    RestoreRequest, SetBrandingRequest, SetLogoRequest, SubmissionReceipt, SubmissionResponse,
    UpdateServiceRequest, UserSummary, add_faq, add_portfolio_item, add_review, add_service,
    add_slider_item, add_user, begin_analysis, client_update_link, commit_changes,
    complete_inquiry, compute_console_capabilities, export_snapshot, finish_analysis,
    import_snapshot, list_inquiries, list_users, public_site, quote_preview, remove_record,
    remove_user, run_analysis, set_branding, set_logo, share_credentials_link, submit,
    update_service,
};
use site_console_domain::{
    Collection, FaqItem, Inquiry, PortfolioItem, Review, Service, Session, SliderItem, User,
};
use site_console_persistence::{MemoryStorage, SessionStore};
use tokio::sync::MutexGuard;
use tokio::task::JoinHandle;
use tracing::error;

use crate::session::{SessionOperator, new_tab_token};
use crate::{AppState, HttpError, Site};

type JsonResult<T> = Result<Json<T>, HttpError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteQuery {
    pub service_id: Option<String>,
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

pub async fn handle_get_site(AxumState(state): AxumState<AppState>) -> Json<PublicSite> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    Json(public_site(site.config.current()))
}

pub async fn handle_get_quote(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<QuoteQuery>,
) -> JsonResult<QuotePreview> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    Ok(Json(quote_preview(
        site.config.current(),
        query.service_id.as_deref(),
    )?))
}

pub async fn handle_submit_inquiry(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<InquiryFormRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), HttpError> {
    let mut guard: MutexGuard<'_, Site> = state.site.lock().await;
    let site: &mut Site = &mut guard;
    let receipt: SubmissionReceipt =
        submit(site.config.current(), &mut site.inquiries, request, &LogOpener)?;
    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            inquiry: receipt.inquiry,
            notification_link: receipt.notification_link.map(|link| link.to_string()),
        }),
    ))
}

pub async fn handle_login(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> JsonResult<LoginResponse> {
    let users: Vec<User> = state.site.lock().await.config.current().users.clone();

    let mut tab: SessionStore<MemoryStorage> = SessionStore::load(MemoryStorage::new());
    let session: Session = AuthenticationService::login(&users, &mut tab, &request)?;

    let session_token: String = new_tab_token();
    state.tabs.lock().await.insert(session_token.clone(), tab);
    Ok(Json(LoginResponse {
        session_token,
        session,
    }))
}

pub async fn handle_logout(
    AxumState(state): AxumState<AppState>,
    SessionOperator(_, token): SessionOperator,
) -> StatusCode {
    if let Some(mut tab) = state.tabs.lock().await.remove(&token) {
        AuthenticationService::logout(&mut tab);
    }
    StatusCode::NO_CONTENT
}

pub async fn handle_get_session(SessionOperator(session, _): SessionOperator) -> Json<Session> {
    Json(session)
}

pub async fn handle_get_capabilities(
    SessionOperator(session, _): SessionOperator,
) -> Json<ConsoleCapabilities> {
    Json(compute_console_capabilities(&session))
}

pub async fn handle_list_inquiries(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
) -> JsonResult<Vec<Inquiry>> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    Ok(Json(list_inquiries(&session, &site.inquiries)?))
}

/// Drafts a plan without holding the site lock while the analyzer runs.
///
/// The analysis runs in its own task, so a client that disconnects does not
/// cancel it: the result is still applied and the in-flight mark cleared.
pub async fn handle_analyze_inquiry(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
) -> JsonResult<AnalysisResponse> {
    let job: AnalysisJob = {
        let mut guard: MutexGuard<'_, Site> = state.site.lock().await;
        let site: &mut Site = &mut guard;
        begin_analysis(
            &session,
            site.config.current(),
            &site.inquiries,
            &mut site.analyses,
            &id,
        )?
    };

    let task: JoinHandle<Result<AnalysisResponse, ApiError>> =
        tokio::spawn(complete_analysis(state, job));
    let response: AnalysisResponse = task.await.map_err(|e| {
        error!(inquiry_id = %id, error = %e, "Analysis task failed");
        ApiError::Internal {
            message: format!("Analysis task failed: {e}"),
        }
    })??;
    Ok(Json(response))
}

async fn complete_analysis(
    state: AppState,
    job: AnalysisJob,
) -> Result<AnalysisResponse, ApiError> {
    let outcome: Result<String, AnalysisError> = run_analysis(state.analyzer.as_ref(), &job).await;

    let mut guard: MutexGuard<'_, Site> = state.site.lock().await;
    let site: &mut Site = &mut guard;
    finish_analysis(&mut site.inquiries, &mut site.analyses, &job, outcome)
}

pub async fn handle_complete_inquiry(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
) -> JsonResult<Inquiry> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    Ok(Json(complete_inquiry(&session, &mut site.inquiries, &id)?))
}

pub async fn handle_client_link(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
) -> JsonResult<LinkResponse> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    let link = client_update_link(&session, site.config.current(), &site.inquiries, &id)?;
    Ok(Json(LinkResponse {
        link: link.to_string(),
    }))
}

pub async fn handle_set_branding(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<SetBrandingRequest>,
) -> JsonResult<PublicSite> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    set_branding(&session, &mut site.config, request)?;
    Ok(Json(public_site(site.config.current())))
}

pub async fn handle_set_logo(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<SetLogoRequest>,
) -> JsonResult<PublicSite> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    set_logo(&session, &mut site.config, request)?;
    Ok(Json(public_site(site.config.current())))
}

pub async fn handle_commit(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
) -> Result<StatusCode, HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    commit_changes(&session, &mut site.config)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_add_service(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<AddServiceRequest>,
) -> Result<(StatusCode, Json<Service>), HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    let service: Service = add_service(&session, &mut site.config, request)?;
    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn handle_update_service(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Json(request): Json<UpdateServiceRequest>,
) -> JsonResult<Service> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    Ok(Json(update_service(&session, &mut site.config, &id, request)?))
}

pub async fn handle_add_portfolio_item(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<AddPortfolioRequest>,
) -> Result<(StatusCode, Json<PortfolioItem>), HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    let item: PortfolioItem = add_portfolio_item(&session, &mut site.config, request)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn handle_add_slider_item(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<AddSliderRequest>,
) -> Result<(StatusCode, Json<SliderItem>), HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    let item: SliderItem = add_slider_item(&session, &mut site.config, request)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn handle_add_review(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<AddReviewRequest>,
) -> Result<(StatusCode, Json<Review>), HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    let review: Review = add_review(&session, &mut site.config, request)?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn handle_add_faq(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<AddFaqRequest>,
) -> Result<(StatusCode, Json<FaqItem>), HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    let faq: FaqItem = add_faq(&session, &mut site.config, request)?;
    Ok((StatusCode::CREATED, Json(faq)))
}

async fn remove_from(
    state: &AppState,
    session: &Session,
    collection: Collection,
    id: &str,
    confirm: ConfirmRequest,
) -> Result<StatusCode, HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    remove_record(session, &mut site.config, collection, id, confirm.confirmed)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_remove_service(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmRequest>,
) -> Result<StatusCode, HttpError> {
    remove_from(&state, &session, Collection::Services, &id, confirm).await
}

pub async fn handle_remove_portfolio_item(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmRequest>,
) -> Result<StatusCode, HttpError> {
    remove_from(&state, &session, Collection::Portfolio, &id, confirm).await
}

pub async fn handle_remove_slider_item(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmRequest>,
) -> Result<StatusCode, HttpError> {
    remove_from(&state, &session, Collection::SliderItems, &id, confirm).await
}

pub async fn handle_remove_review(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmRequest>,
) -> Result<StatusCode, HttpError> {
    remove_from(&state, &session, Collection::Reviews, &id, confirm).await
}

pub async fn handle_remove_faq(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmRequest>,
) -> Result<StatusCode, HttpError> {
    remove_from(&state, &session, Collection::Faqs, &id, confirm).await
}

pub async fn handle_list_users(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
) -> JsonResult<Vec<UserSummary>> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    Ok(Json(list_users(&session, site.config.current())?))
}

pub async fn handle_add_user(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<AddUserRequest>,
) -> Result<(StatusCode, Json<UserSummary>), HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    let user: UserSummary = add_user(&session, &mut site.config, request)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn handle_remove_user(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
    Query(confirm): Query<ConfirmRequest>,
) -> Result<StatusCode, HttpError> {
    let mut site: MutexGuard<'_, Site> = state.site.lock().await;
    remove_user(&session, &mut site.config, &id, confirm.confirmed)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_share_credentials(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Path(id): Path<String>,
) -> JsonResult<LinkResponse> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    let link = share_credentials_link(&session, site.config.current(), &id)?;
    Ok(Json(LinkResponse {
        link: link.to_string(),
    }))
}

/// Returns the backup as a JSON download.
pub async fn handle_export_backup(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
) -> Result<Response, HttpError> {
    let site: MutexGuard<'_, Site> = state.site.lock().await;
    let snapshot: ExportedSnapshot = export_snapshot(&session, &site.config, &site.inquiries)?;
    let disposition: String = format!("attachment; filename=\"{}\"", snapshot.filename);
    Ok((
        [
            (header::CONTENT_TYPE, String::from("application/json")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        snapshot.contents,
    )
        .into_response())
}

pub async fn handle_restore_backup(
    AxumState(state): AxumState<AppState>,
    SessionOperator(session, _): SessionOperator,
    Json(request): Json<RestoreRequest>,
) -> JsonResult<ImportSummary> {
    let mut guard: MutexGuard<'_, Site> = state.site.lock().await;
    let site: &mut Site = &mut guard;
    Ok(Json(import_snapshot(
        &session,
        &mut site.config,
        &mut site.inquiries,
        &request.document,
        request.confirmed,
    )?))
}
