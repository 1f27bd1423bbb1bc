use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{AnalysisResult, SelectedFile};

/// Fallback detail when a failed response has no parseable `detail` body.
pub const FALLBACK_ERROR_DETAIL: &str =
    "Verifique se o backend está a funcionar.";

/// Document analysis can be slow (text extraction + AI call); generous
/// timeout, surfaced through the normal error path when exceeded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// An API client for interfacing with the analysis service.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl APIClient {
    /// Submit a document for analysis.
    ///
    /// With `force_ai` set, the service redoes only the AI portion of the
    /// report, reusing its cached extracted text and rule findings.
    pub async fn analyze(
        &self,
        file: &SelectedFile,
        force_ai: bool,
    ) -> Result<AnalysisResult, ClientError> {
        let url = format!(
            "{}/analisar/{}",
            self.address.trim_end_matches('/'),
            if force_ai { "?force_ai=true" } else { "" }
        );

        let mut part =
            Part::bytes(file.data.clone()).file_name(file.name.clone());
        if !file.mime_type.is_empty() {
            part = part.mime_str(&file.mime_type)?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .inner_client
            .post(url)
            .multipart(form)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-2xx response, carrying the human-readable detail extracted
    /// from the body (or a fixed fallback).
    #[error("Falha na comunicação: {1}")]
    Api(StatusCode, String),
    #[error("Falha na comunicação: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error body shape used by the analysis service for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Deserialize a successful response into an [`AnalysisResult`], or
/// extract a displayable detail from an error response.
async fn ok_body(
    response: reqwest::Response,
) -> Result<AnalysisResult, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| FALLBACK_ERROR_DETAIL.to_string());
        return Err(ClientError::Api(status, detail));
    }
    Ok(response.json::<AnalysisResult>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_formats_the_fixed_communication_message() {
        let err = ClientError::Api(
            StatusCode::INTERNAL_SERVER_ERROR,
            "indisponível".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Falha na comunicação: indisponível"
        );
    }

    #[test]
    fn error_body_detail_is_optional() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"quota excedida"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("quota excedida"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }
}
