//! Figma Variables REST integration.
//!
//! `payload` turns a resolved [`tokens::TokenSet`] into the bulk-change body
//! accepted by `POST /v1/files/:key/variables`; `client` sends it. Payload
//! building is pure so it can be printed with `--dry-run` and unit tested.

pub mod client;
pub mod payload;

pub use client::FigmaClient;
pub use payload::build_variables_request;

/// Errors produced by Figma client operations.
#[derive(Debug, thiserror::Error)]
pub enum FigmaError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to Figma failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// Figma returned a non-success HTTP status.
    #[error("API response error: status {status}: {body}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),
}

impl FigmaError {
    /// Whether retrying the same request may succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}
