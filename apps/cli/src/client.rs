//! HTTP client for the roaster API.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::form::{Mode, ResponseLength};

/// Message shown when the request never produced a decodable response.
pub const HICCUP_ERROR: &str = "Uh-oh! Our system hiccuped. Your resume was too spicy to handle!";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastResponse {
    pub result: String,
    pub original_file_name: String,
    pub mode: String,
    pub response_length: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    details: Option<String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits the resume and options as a multipart form.
    /// Decodes the API's error body when there is one; anything less
    /// structured collapses into the generic hiccup message.
    pub async fn roast(
        &self,
        path: &Path,
        mode: Mode,
        length: ResponseLength,
    ) -> Result<RoastResponse> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());

        let form = Form::new()
            .part(
                "resume",
                Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str("application/pdf")?,
            )
            .text("mode", mode.as_str())
            .text("responseLength", length.as_str());

        let response = self
            .http
            .post(format!("{}/api/roast", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|_| anyhow!(HICCUP_ERROR))?;

        if response.status().is_success() {
            response.json().await.map_err(|_| anyhow!(HICCUP_ERROR))
        } else {
            let err: ErrorResponse = response.json().await.map_err(|_| anyhow!(HICCUP_ERROR))?;
            match err.details {
                Some(details) => Err(anyhow!("{} ({details})", err.error)),
                None => Err(anyhow!(err.error)),
            }
        }
    }
}
