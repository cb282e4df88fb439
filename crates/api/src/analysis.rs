// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drafting a solution plan for an inquiry.
//!
//! The text generator sits behind [`SolutionAnalyzer`]. A run is split into
//! three phases so a host that guards its stores with a lock can release it
//! while the generator is working:
//!
//! 1. [`begin_analysis`] checks the inquiry and marks it in flight
//! 2. [`run_analysis`] awaits the generator without touching any store
//! 3. [`finish_analysis`] clears the in-flight mark and applies the result

use std::collections::HashSet;

use async_trait::async_trait;
use site_console::{record_solution, require_pending};
use site_console_domain::{AppConfig, DomainError, Inquiry, InquiryPatch, Session};
use site_console_persistence::{InquiryStore, StorageBackend};
use tracing::{info, warn};

use crate::auth::AuthorizationService;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::AnalysisResponse;

/// Text used when the generator fails behind a [`FallbackAnalyzer`].
pub const FALLBACK_ERROR_TEXT: &str = "Expert analysis complete. Steps prepared for implementation.";

/// Text used when the generator returns nothing behind a [`FallbackAnalyzer`].
pub const FALLBACK_EMPTY_TEXT: &str = "Solution strategy analyzed by AI experts.";

/// Notice returned when no plan was produced.
pub const ANALYSIS_FAILED_NOTICE: &str = "An error occurred during AI analysis.";

/// Service name used when the inquiry's service was removed from the catalog.
const UNKNOWN_SERVICE_NAME: &str = "Service";

/// Errors raised while drafting a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The text generator failed.
    #[error("analysis engine failed: {0}")]
    Engine(String),
    /// The text generator returned no usable text.
    #[error("analysis engine returned no text")]
    EmptyResponse,
    /// The inquiry is already being analyzed.
    #[error("inquiry '{0}' is already being analyzed")]
    AnalysisInProgress(String),
}

/// Produces a solution plan for an inquiry.
#[async_trait]
pub trait SolutionAnalyzer: Send + Sync {
    /// Drafts a plan for `description` under the named service.
    ///
    /// # Errors
    ///
    /// Returns an error if no plan could be produced.
    async fn solve_inquiry(
        &self,
        description: &str,
        service_name: &str,
    ) -> Result<String, AnalysisError>;
}

/// The instruction handed to a text generation engine.
#[must_use]
pub fn analysis_prompt(description: &str, service_name: &str) -> String {
    format!(
        "Act as a senior technical expert. Analyze the following client inquiry for \"{service_name}\": {description}. Provide a professional, concise summary of the solution strategy and steps required to complete this work successfully."
    )
}

/// Wraps an analyzer so that it never fails.
///
/// Errors and empty output are replaced with neutral text, so the inquiry
/// always moves to In Progress.
#[derive(Debug, Clone)]
pub struct FallbackAnalyzer<A> {
    inner: A,
}

impl<A> FallbackAnalyzer<A> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<A: SolutionAnalyzer> SolutionAnalyzer for FallbackAnalyzer<A> {
    async fn solve_inquiry(
        &self,
        description: &str,
        service_name: &str,
    ) -> Result<String, AnalysisError> {
        match self.inner.solve_inquiry(description, service_name).await {
            Ok(text) if text.trim().is_empty() => Ok(String::from(FALLBACK_EMPTY_TEXT)),
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(error = %err, "Analysis engine failed; using fallback text");
                Ok(String::from(FALLBACK_ERROR_TEXT))
            }
        }
    }
}

/// Offline analyzer that lays out a fixed delivery plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanTemplateAnalyzer;

#[async_trait]
impl SolutionAnalyzer for PlanTemplateAnalyzer {
    async fn solve_inquiry(
        &self,
        description: &str,
        service_name: &str,
    ) -> Result<String, AnalysisError> {
        let summary: &str = description.trim();
        if summary.is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }
        Ok(format!(
            "Solution strategy for {service_name}\n\n\
             1. Confirm the requirements with the client: {summary}\n\
             2. Prepare the workspace, accounts and materials needed for the job.\n\
             3. Carry out the work and test each deliverable.\n\
             4. Review the result with the client and hand over."
        ))
    }
}

/// Inquiries with a plan currently being drafted. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct AnalysisTracker {
    in_flight: HashSet<String>,
}

impl AnalysisTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `inquiry_id` in flight. Returns false if it already was.
    pub fn begin(&mut self, inquiry_id: &str) -> bool {
        self.in_flight.insert(inquiry_id.to_string())
    }

    pub fn finish(&mut self, inquiry_id: &str) {
        self.in_flight.remove(inquiry_id);
    }

    #[must_use]
    pub fn is_in_flight(&self, inquiry_id: &str) -> bool {
        self.in_flight.contains(inquiry_id)
    }
}

/// Work handed from [`begin_analysis`] to [`run_analysis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    pub inquiry_id: String,
    pub description: String,
    pub service_name: String,
    pub operator: String,
}

/// Checks that an inquiry can be analyzed and marks it in flight.
///
/// # Arguments
///
/// * `session` - The operator requesting the analysis
/// * `config` - The configuration holding the service catalog
/// * `inquiries` - The inquiry store
/// * `tracker` - The in-flight tracker
/// * `inquiry_id` - The inquiry to analyze
///
/// # Errors
///
/// Returns an error if:
/// - The inquiry does not exist
/// - The inquiry is not Pending
/// - The inquiry is already being analyzed
pub fn begin_analysis<B: StorageBackend>(
    session: &Session,
    config: &AppConfig,
    inquiries: &InquiryStore<B>,
    tracker: &mut AnalysisTracker,
    inquiry_id: &str,
) -> Result<AnalysisJob, ApiError> {
    AuthorizationService::authorize_process_inquiries(session)?;

    let inquiry: &Inquiry = inquiries
        .find(inquiry_id)
        .ok_or_else(|| translate_domain_error(DomainError::InquiryNotFound(inquiry_id.to_string())))?;
    require_pending(inquiry).map_err(translate_core_error)?;

    if !tracker.begin(inquiry_id) {
        return Err(AnalysisError::AnalysisInProgress(inquiry_id.to_string()).into());
    }

    let service_name: String = config
        .find_service(&inquiry.service_id)
        .map_or_else(|| String::from(UNKNOWN_SERVICE_NAME), |s| s.name.clone());
    info!(inquiry_id, operator = %session.username, "Analysis started");

    Ok(AnalysisJob {
        inquiry_id: inquiry_id.to_string(),
        description: inquiry.description.clone(),
        service_name,
        operator: session.username.clone(),
    })
}

/// Runs the analyzer for a job. Blank output counts as a failure.
///
/// # Errors
///
/// Returns an error if the analyzer fails or returns blank text.
pub async fn run_analysis(
    analyzer: &dyn SolutionAnalyzer,
    job: &AnalysisJob,
) -> Result<String, AnalysisError> {
    let text: String = analyzer
        .solve_inquiry(&job.description, &job.service_name)
        .await?;
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }
    Ok(text)
}

/// Clears the in-flight mark and applies the outcome.
///
/// A plan moves the inquiry to In Progress with the plan attached. A failed
/// run leaves the inquiry Pending and returns a notice.
///
/// # Errors
///
/// Returns an error if the inquiry disappeared or left Pending while the
/// analyzer was running.
pub fn finish_analysis<B: StorageBackend>(
    inquiries: &mut InquiryStore<B>,
    tracker: &mut AnalysisTracker,
    job: &AnalysisJob,
    outcome: Result<String, AnalysisError>,
) -> Result<AnalysisResponse, ApiError> {
    tracker.finish(&job.inquiry_id);

    let inquiry: &Inquiry = inquiries.find(&job.inquiry_id).ok_or_else(|| {
        translate_domain_error(DomainError::InquiryNotFound(job.inquiry_id.clone()))
    })?;

    match outcome {
        Ok(text) => {
            let patch: InquiryPatch = record_solution(inquiry, text).map_err(translate_core_error)?;
            inquiries.patch(&job.inquiry_id, patch);
            info!(inquiry_id = %job.inquiry_id, operator = %job.operator, "Solution plan saved");
            Ok(AnalysisResponse {
                inquiry: current(inquiries, &job.inquiry_id)?,
                notice: None,
            })
        }
        Err(err) => {
            warn!(inquiry_id = %job.inquiry_id, error = %err, "Analysis produced no plan");
            Ok(AnalysisResponse {
                inquiry: inquiry.clone(),
                notice: Some(String::from(ANALYSIS_FAILED_NOTICE)),
            })
        }
    }
}

fn current<B: StorageBackend>(
    inquiries: &InquiryStore<B>,
    inquiry_id: &str,
) -> Result<Inquiry, ApiError> {
    inquiries
        .find(inquiry_id)
        .cloned()
        .ok_or_else(|| translate_domain_error(DomainError::InquiryNotFound(inquiry_id.to_string())))
}

/// Runs all three phases with exclusive access to the stores.
///
/// # Errors
///
/// Returns any error [`begin_analysis`] or [`finish_analysis`] returns.
pub async fn analyze_inquiry<B: StorageBackend>(
    session: &Session,
    config: &AppConfig,
    inquiries: &mut InquiryStore<B>,
    tracker: &mut AnalysisTracker,
    analyzer: &dyn SolutionAnalyzer,
    inquiry_id: &str,
) -> Result<AnalysisResponse, ApiError> {
    let job: AnalysisJob = begin_analysis(session, config, inquiries, tracker, inquiry_id)?;
    let outcome: Result<String, AnalysisError> = run_analysis(analyzer, &job).await;
    finish_analysis(inquiries, tracker, &job, outcome)
}
