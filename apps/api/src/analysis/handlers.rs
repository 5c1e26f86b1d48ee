//! Axum route handler for the résumé analysis endpoint.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Serialize)]
pub struct AnalyseResumeResponse {
    pub result: String,
}

/// The two inputs pulled out of the multipart body.
struct AnalysisForm {
    resume: Bytes,
    job_description: String,
}

/// POST /api/analyse_resume
///
/// extract text → build prompt → generate. Any failure along the way becomes
/// `500 {"error": ...}` through `AppError`.
pub async fn handle_analyse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyseResumeResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Multipart(e.body_text()))?;
    let AnalysisForm {
        resume,
        job_description,
    } = read_form(multipart).await?;

    info!(
        resume_bytes = resume.len(),
        job_description_chars = job_description.chars().count(),
        "Analysing résumé"
    );

    let extractor = Arc::clone(&state.extractor);
    let resume_text = tokio::task::spawn_blocking(move || extractor.extract(&resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Résumé extraction task failed: {e}")))??;

    let prompt = state.prompt_builder.build(&resume_text, &job_description);
    let result = state.generator.generate(&prompt).await?;

    info!(result_chars = result.chars().count(), "Analysis complete");
    Ok(Json(AnalyseResumeResponse { result }))
}

/// Collects the résumé file and job description.
///
/// `resume` only counts when sent as a file part and `job_description` only when
/// sent as a plain form field. The first occurrence of each wins; later duplicates
/// and unknown fields are skipped.
async fn read_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut resume = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        let is_file = field.file_name().is_some();
        match (name.as_deref(), is_file) {
            (Some(RESUME_FIELD), true) if resume.is_none() => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
                resume = Some(data);
            }
            (Some(JOB_DESCRIPTION_FIELD), false) if job_description.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Multipart(e.body_text()))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(AnalysisForm {
        resume: resume.ok_or(AppError::MissingField(RESUME_FIELD))?,
        job_description: job_description.ok_or(AppError::MissingField(JOB_DESCRIPTION_FIELD))?,
    })
}
