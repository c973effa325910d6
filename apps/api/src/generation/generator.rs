//! Generation Service: orchestrates one test case generation call.
//!
//! Flow: validate → split counts → build instruction → inference call →
//!       extract generated text → parse (primary or fallback) → count policy.
//!
//! Strictly sequential. The inference call is the only suspension point and
//! nothing is shared between concurrent calls.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::generation::error::GenerationError;
use crate::generation::models::{GenerationRequest, GenerationResult};
use crate::generation::parser::parse_generated_text;
use crate::generation::prompts::build_instruction;
use crate::llm_client::{
    first_generated_text, HuggingFaceClient, InferenceClient, InferenceParameters,
};

/// Whether returned category counts must match the requested split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Under- or over-generation is passed through to the caller.
    #[default]
    Lenient,
    Strict,
}

/// Explicit configuration for the Generation Service.
#[derive(Clone)]
pub struct GeneratorConfig {
    pub api_token: String,
    pub model_url: String,
    pub count_policy: CountPolicy,
}

impl GeneratorConfig {
    /// Fails with `MissingCredential` when no token is configured.
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let api_token = config
            .hf_token
            .clone()
            .ok_or(GenerationError::MissingCredential)?;

        Ok(Self {
            api_token,
            model_url: config.model_url.clone(),
            count_policy: if config.strict_counts {
                CountPolicy::Strict
            } else {
                CountPolicy::Lenient
            },
        })
    }
}

#[derive(Clone)]
pub struct GenerationService {
    client: Arc<dyn InferenceClient>,
    parameters: InferenceParameters,
    count_policy: CountPolicy,
}

impl GenerationService {
    /// Builds the service against the hosted inference endpoint.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        if config.api_token.trim().is_empty() {
            return Err(GenerationError::MissingCredential);
        }
        let client = HuggingFaceClient::new(config.api_token, config.model_url)?;
        Ok(Self::with_client(Arc::new(client), config.count_policy))
    }

    pub fn with_client(client: Arc<dyn InferenceClient>, count_policy: CountPolicy) -> Self {
        Self {
            client,
            parameters: InferenceParameters::default(),
            count_policy,
        }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        request.validate()?;

        let counts = request.split_counts();
        info!(
            "Generating {} positive and {} negative test cases",
            counts.positive, counts.negative
        );

        let instruction = build_instruction(&request.description, counts);
        let payload = self.client.generate(&instruction, &self.parameters).await?;

        let result = parse_generated_text(first_generated_text(&payload));
        if result.is_empty() {
            warn!("Model output produced no test cases");
        }
        info!(
            "Model produced {} test cases (fallback: {})",
            result.len(),
            result.is_fallback()
        );

        if self.count_policy == CountPolicy::Strict {
            let returned = result.counts_by_type();
            if returned != counts {
                return Err(GenerationError::CountMismatch {
                    requested: counts,
                    returned,
                });
            }
        }

        Ok(result)
    }
}
