//! The seam between the classification client and a generative-AI service

use crate::error::BackendError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// MIME type requested for schema-constrained output
pub const JSON_MIME_TYPE: &str = "application/json";

/// Output constraints attached to a generation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

impl GenerationConfig {
    /// Ask for JSON conforming to `schema`
    #[must_use]
    pub fn json(schema: Value) -> Self {
        Self {
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema: schema,
        }
    }
}

/// One request: a model, a prompt and optional output constraints.
///
/// `config` is `None` for free-text generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub config: Option<GenerationConfig>,
}

/// Generated text as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: String,
}

impl GenerateResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A single-shot request/response generation service.
///
/// Implementations must not retry internally; the caller decides whether a
/// failed call is attempted again.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError>;
}

#[async_trait]
impl<B: GenerativeBackend + ?Sized> GenerativeBackend for Box<B> {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        (**self).generate(request).await
    }
}

#[async_trait]
impl<B: GenerativeBackend + ?Sized> GenerativeBackend for std::sync::Arc<B> {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        (**self).generate(request).await
    }
}
