//! Request Handler — the single linear upload path.
//!
//! ReceiveUpload → ValidatePresence → ValidateMediaType → Extract →
//! ValidateNonEmptyText → BuildPrompt → Generate → RespondSuccess, with an
//! error exit at each step. No retries, no persistence, no shared state.

use anyhow::anyhow;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::roast::prompts::{build_prompt, Mode, ResponseLength};
use crate::state::AppState;

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastResponse {
    pub result: String,
    pub original_file_name: String,
    pub mode: Mode,
    pub response_length: ResponseLength,
}

/// GET /api/roast — liveness echo kept for client compatibility.
pub async fn handle_roast_probe() -> Json<Value> {
    Json(json!({ "message": "GET request successful" }))
}

struct UploadedFile {
    bytes: Bytes,
    content_type: Option<String>,
    file_name: String,
}

/// POST /api/roast
pub async fn handle_roast(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RoastResponse>, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut mode = Mode::default();
    let mut response_length = ResponseLength::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(anyhow!("Failed to read multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Internal(anyhow!("Failed to read upload: {e}")))?;
                file = Some(UploadedFile {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            Some("mode") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Internal(anyhow!("Failed to read field: {e}")))?;
                mode = raw.parse().map_err(AppError::Validation)?;
            }
            Some("responseLength") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Internal(anyhow!("Failed to read field: {e}")))?;
                response_length = raw.parse().map_err(AppError::Validation)?;
            }
            _ => {} // unknown fields are ignored
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;

    if file.content_type.as_deref() != Some(PDF_MIME) {
        return Err(AppError::Validation(
            "Only PDF files are allowed".to_string(),
        ));
    }

    let resume_text = extract_text(file.bytes).await?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Unable to extract readable text from resume".to_string(),
        ));
    }

    let prompt = build_prompt(&resume_text, mode, response_length);
    let result = state.generator.generate(&prompt).await?;

    info!(
        file = %file.file_name,
        %mode,
        length = %response_length,
        "Processed resume ({} chars in, {} chars out)",
        resume_text.len(),
        result.len()
    );

    Ok(Json(RoastResponse {
        result,
        original_file_name: file.file_name,
        mode,
        response_length,
    }))
}
