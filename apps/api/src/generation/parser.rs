//! Turns the model's generated text into test case records.
//!
//! A strict JSON array parse is tried first. Anything else goes through the
//! line-based fallback in full; the two paths never merge.
//!
//! The strict parse is serde_json's: unpaired surrogate escapes, nesting
//! deeper than 128 levels and numbers outside f64 range (`1e400`) are
//! rejected, so such arrays are line split.

use serde_json::Value;
use tracing::warn;

use crate::generation::models::{
    test_case_id, FallbackTestCase, GenerationResult, TestCaseType, FALLBACK_PLACEHOLDER,
};

pub fn parse_generated_text(text: &str) -> GenerationResult {
    match serde_json::from_str::<Vec<Value>>(text) {
        Ok(records) => GenerationResult::Parsed(records),
        Err(e) => {
            warn!("Generated text is not a JSON array ({e}); falling back to line parsing");
            GenerationResult::Fallback(parse_lines(text))
        }
    }
}

/// One record per non-blank line, numbered in line order.
fn parse_lines(text: &str) -> Vec<FallbackTestCase> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| FallbackTestCase {
            id: test_case_id(index + 1),
            case_type: classify_line(line),
            email: FALLBACK_PLACEHOLDER,
            password: FALLBACK_PLACEHOLDER,
            expected: line.trim().to_string(),
        })
        .collect()
}

fn classify_line(line: &str) -> TestCaseType {
    if line.to_lowercase().contains("negative") {
        TestCaseType::Negative
    } else {
        TestCaseType::Positive
    }
}
