// Prompt template for test case generation.
// The model receives the whole instruction as a single input string.

use crate::generation::models::SplitCounts;

/// Replace: {positive_count}, {negative_count}, {description}
pub const TEST_CASE_PROMPT_TEMPLATE: &str = r#"
You are a test engineer. Generate exactly {positive_count} positive and {negative_count} negative test cases for: "{description}"

Format the result in valid JSON array like:
[
  {
    "id": "TC0001",
    "type": "Positive",
    "case": "valid test case for the input",
    "expected": "Login successful"
  },
  {
    "id": "TC0002",
    "type": "Negative",
    "case": "invalid test case for input",
    "expected": "Display 'invalid credentials' error"
  }
]

Output ONLY the JSON array. No explanation or markdown.
"#;

/// Builds the instruction string for one generation request.
///
/// The description is interpolated verbatim, after the counts, so placeholder
/// text inside a description is never substituted.
pub fn build_instruction(description: &str, counts: SplitCounts) -> String {
    TEST_CASE_PROMPT_TEMPLATE
        .replace("{positive_count}", &counts.positive.to_string())
        .replace("{negative_count}", &counts.negative.to_string())
        .replace("{description}", description)
}
