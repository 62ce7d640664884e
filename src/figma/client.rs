//! Thin HTTP wrapper for the Figma Variables endpoint.

use super::FigmaError;
use super::payload::{PushSummary, VariablesRequest, parse_response};
use crate::config::SyncConfig;

pub struct FigmaClient {
    http: reqwest::Client,
    config: SyncConfig,
}

impl FigmaClient {
    pub fn new(config: SyncConfig) -> Result<Self, FigmaError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| FigmaError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Submit a bulk variable change to the configured file.
    pub async fn post_variables(&self, request: &VariablesRequest) -> Result<PushSummary, FigmaError> {
        let url = self.config.variables_url();
        tracing::info!(
            file_key = %self.config.file_key,
            variables = request.variables.len(),
            "pushing variables"
        );

        let response = self
            .http
            .post(&url)
            .header("X-Figma-Token", &self.config.access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| FigmaError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| FigmaError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(status, "figma rejected variables push");
            return Err(FigmaError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}
