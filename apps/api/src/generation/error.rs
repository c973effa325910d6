use thiserror::Error;

use crate::generation::models::SplitCounts;
use crate::llm_client::InferenceError;

/// Failure taxonomy of a generation call. No partial results accompany an error.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Missing Hugging Face API token.")]
    MissingCredential,

    #[error("Hugging Face API error: {body}")]
    Upstream { status: u16, body: String },

    #[error("Model returned {returned} test cases; requested {requested}")]
    CountMismatch {
        requested: SplitCounts,
        returned: SplitCounts,
    },

    #[error("{0}")]
    Internal(String),
}

impl From<InferenceError> for GenerationError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Status { status, body } => GenerationError::Upstream { status, body },
            InferenceError::Http(e) => GenerationError::Internal(e.to_string()),
        }
    }
}
