//! Inference client: the single point of entry for calls to the hosted
//! text-generation endpoint.
//!
//! One synchronous request per generation. No retries, no streaming, and no
//! timeout beyond the transport default.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Generation parameters are fixed for every call.
pub const MAX_NEW_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.5;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    /// When false the endpoint returns only the newly generated text.
    pub return_full_text: bool,
}

impl Default for InferenceParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            return_full_text: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a InferenceParameters,
}

/// Backend seam for the generation service.
///
/// Implementations return the endpoint's JSON payload untouched; shape
/// interpretation belongs to the caller.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(
        &self,
        inputs: &str,
        parameters: &InferenceParameters,
    ) -> Result<Value, InferenceError>;
}

/// Client for a Hugging Face style text-generation endpoint.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    model_url: String,
    api_token: String,
}

impl HuggingFaceClient {
    pub fn new(api_token: String, model_url: String) -> Result<Self, InferenceError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()?,
            model_url,
            api_token,
        })
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(
        &self,
        inputs: &str,
        parameters: &InferenceParameters,
    ) -> Result<Value, InferenceError> {
        let request_body = InferenceRequest { inputs, parameters };

        let response = self
            .client
            .post(&self.model_url)
            .bearer_auth(&self.api_token)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        debug!("Inference call succeeded with status {}", status);

        Ok(payload)
    }
}

/// Pulls `generated_text` out of the first element of the endpoint payload.
///
/// Any unexpected shape yields an empty string rather than an error.
pub fn first_generated_text(payload: &Value) -> &str {
    payload
        .get(0)
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
        .unwrap_or("")
}
