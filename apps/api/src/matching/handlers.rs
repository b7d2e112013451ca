//! Axum route handlers for the Matching API.

use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::lexicon::SkillLexicon;
use crate::matching::scoring::ScoreBreakdown;
use crate::matching::screener::{rank, ResumeUpload};
use crate::models::{JobRequirement, Profile, Resume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub content: String,
    pub job: JobRequirement,
}

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub content: String,
    #[serde(default)]
    pub file_name: Option<String>,
    pub job: JobRequirement,
}

#[derive(Debug, Deserialize)]
pub struct BatchScreenRequest {
    pub job: JobRequirement,
    pub resumes: Vec<ResumeUpload>,
    /// Sort results best-first instead of input order.
    #[serde(default)]
    pub ranked: bool,
}

#[derive(Debug, Serialize)]
pub struct BatchScreenResponse {
    pub job_title: String,
    pub resumes: Vec<Resume>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/lexicon
pub async fn handle_get_lexicon(State(state): State<AppState>) -> Json<SkillLexicon> {
    Json(state.screener.extractor().lexicon().clone())
}

/// POST /api/v1/profiles/extract
///
/// Extraction never fails; empty content yields an empty profile.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<Profile>, AppError> {
    let screener = Arc::clone(&state.screener);
    let profile = tokio::task::spawn_blocking(move || {
        screener.extractor().extract(&request.content)
    })
    .await
    .context("extraction task panicked")?;
    Ok(Json(profile))
}

/// POST /api/v1/resumes/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let screener = Arc::clone(&state.screener);
    let breakdown = tokio::task::spawn_blocking(move || {
        let profile = screener.extractor().extract(&request.content);
        screener
            .scorer()
            .breakdown(&request.content, &profile, &request.job.required_skills)
    })
    .await
    .context("scoring task panicked")??;
    Ok(Json(breakdown))
}

/// POST /api/v1/resumes/screen
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<Resume>, AppError> {
    let upload = ResumeUpload {
        content: request.content,
        file_name: request.file_name,
    };
    let job = request.job;
    let screener = Arc::clone(&state.screener);
    let resume = tokio::task::spawn_blocking(move || screener.screen(upload, &job))
        .await
        .context("screening task panicked")??;
    Ok(Json(resume))
}

/// POST /api/v1/resumes/screen/batch
///
/// Screens all resumes against one job, one blocking task per resume.
pub async fn handle_screen_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchScreenRequest>,
) -> Result<Json<BatchScreenResponse>, AppError> {
    if request.resumes.is_empty() {
        return Err(AppError::Validation("resumes cannot be empty".to_string()));
    }
    let max = state.config.max_batch_size;
    if request.resumes.len() > max {
        return Err(AppError::Validation(format!(
            "batch of {} resumes exceeds the limit of {max}",
            request.resumes.len()
        )));
    }

    let job = Arc::new(request.job);
    info!(job = %job.title, count = request.resumes.len(), "screening batch");

    let mut resumes = state
        .screener
        .screen_batch(request.resumes, Arc::clone(&job))
        .await?;
    if request.ranked {
        rank(&mut resumes);
    }

    Ok(Json(BatchScreenResponse {
        job_title: job.title.clone(),
        resumes,
    }))
}
