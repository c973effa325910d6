//! Request and result types for test case generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generation::error::GenerationError;

/// Inbound generation request.
///
/// Missing fields deserialize to empty/false/zero so that an incomplete body
/// is reported as invalid input rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, rename = "prompt")]
    pub description: String,
    #[serde(default, rename = "count")]
    pub total_count: u32,
    #[serde(default)]
    pub include_positive: bool,
    #[serde(default)]
    pub include_negative: bool,
}

impl GenerationRequest {
    /// Fails fast before any prompt building or network work.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.description.trim().is_empty() {
            return Err(GenerationError::InvalidInput);
        }
        if !self.include_positive && !self.include_negative {
            return Err(GenerationError::InvalidInput);
        }
        if self.total_count == 0 {
            return Err(GenerationError::InvalidInput);
        }
        Ok(())
    }

    pub fn split_counts(&self) -> SplitCounts {
        SplitCounts::new(self.total_count, self.include_positive, self.include_negative)
    }
}

/// Per-category counts derived from the requested total.
///
/// Positive takes the ceiling half and negative the floor half, so an odd
/// total with both categories enabled asks for one more positive case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCounts {
    pub positive: u32,
    pub negative: u32,
}

impl std::fmt::Display for SplitCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} positive and {} negative", self.positive, self.negative)
    }
}

impl SplitCounts {
    pub fn new(total: u32, include_positive: bool, include_negative: bool) -> Self {
        Self {
            positive: if include_positive { total.div_ceil(2) } else { 0 },
            negative: if include_negative { total / 2 } else { 0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestCaseType {
    Positive,
    Negative,
}

impl TestCaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCaseType::Positive => "Positive",
            TestCaseType::Negative => "Negative",
        }
    }
}

/// Degraded record produced when the model output is not a JSON array.
///
/// Carries placeholder `email`/`password` fields and no `case`, kept for
/// compatibility with clients that already consume this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackTestCase {
    pub id: String,
    #[serde(rename = "type")]
    pub case_type: TestCaseType,
    pub email: &'static str,
    pub password: &'static str,
    pub expected: String,
}

pub const FALLBACK_PLACEHOLDER: &str = "unknown";

/// Formats the 1-based sequence number as `TC0001`, `TC0002`, ...
pub fn test_case_id(sequence: usize) -> String {
    format!("TC{sequence:04}")
}

/// Ordered result of one generation call.
///
/// Both variants serialize as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    /// Records exactly as the model returned them.
    Parsed(Vec<Value>),
    Fallback(Vec<FallbackTestCase>),
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        match self {
            GenerationResult::Parsed(records) => records.len(),
            GenerationResult::Fallback(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationResult::Fallback(_))
    }

    /// Counts records by their `type` field. Records with any other type are ignored.
    pub fn counts_by_type(&self) -> SplitCounts {
        let mut counts = SplitCounts {
            positive: 0,
            negative: 0,
        };
        let mut tally = |case_type: Option<&str>| match case_type {
            Some("Positive") => counts.positive += 1,
            Some("Negative") => counts.negative += 1,
            _ => {}
        };
        match self {
            GenerationResult::Parsed(records) => records
                .iter()
                .for_each(|record| tally(record.get("type").and_then(Value::as_str))),
            GenerationResult::Fallback(records) => records
                .iter()
                .for_each(|record| tally(Some(record.case_type.as_str()))),
        }
        counts
    }
}
