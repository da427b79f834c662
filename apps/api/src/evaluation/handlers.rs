//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::prompts::{ats_response_schema, build_prompt, ATS_SYSTEM};
use crate::evaluation::verdict::{assess_response, AtsEvaluation, MatchVerdict};
use crate::extraction::{self, ResumeKind};
use crate::state::AppState;

/// Maximum accepted resume upload size (10 MB).
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// The model's answer, verbatim — shown regardless of whether it parsed.
    pub raw_response: String,
    /// Structured evaluation, present when the response deserialized as requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<AtsEvaluation>,
    pub verdict: MatchVerdict,
}

struct ResumeUpload {
    content_type: Option<String>,
    file_name: Option<String>,
    data: Bytes,
}

/// POST /api/v1/evaluations
///
/// Multipart form: `job_description` (text) and `resume` (PDF or DOCX file).
/// Runs the full pipeline: extract → build prompt → call model → assess.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationResponse>, AppError> {
    let mut job_description = String::new();
    let mut resume: Option<ResumeUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        match field.name().unwrap_or("") {
            "job_description" => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable job description: {e}")))?;
            }
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable resume upload: {e}")))?;
                resume = Some(ResumeUpload {
                    content_type,
                    file_name,
                    data,
                });
            }
            _ => {
                // unknown fields are drained and ignored
                let _ = field.bytes().await;
            }
        }
    }

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let upload = resume.ok_or_else(|| AppError::Validation("a resume file is required".to_string()))?;

    if upload.data.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation(
            "Resume too large. Maximum size is 10MB".to_string(),
        ));
    }

    let kind = ResumeKind::resolve(upload.content_type.as_deref(), upload.file_name.as_deref())
        .ok_or_else(|| {
            AppError::UnsupportedMedia(format!(
                "Unsupported resume type '{}'. Upload a PDF or DOCX file",
                upload
                    .content_type
                    .as_deref()
                    .or(upload.file_name.as_deref())
                    .unwrap_or("unknown")
            ))
        })?;

    let resume_text = extraction::extract_text(&upload.data, kind)?;

    info!(
        "evaluating resume ({} chars extracted) against job description ({} chars)",
        resume_text.len(),
        job_description.len()
    );

    let prompt = build_prompt(&resume_text, &job_description);

    let raw_response = state
        .llm
        .generate(&prompt, ATS_SYSTEM, Some(&ats_response_schema()))
        .await?;

    let (evaluation, verdict) = assess_response(&raw_response);

    Ok(Json(EvaluationResponse {
        raw_response,
        evaluation,
        verdict,
    }))
}
