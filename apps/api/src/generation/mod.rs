// Test case generation: prompt compiler, inference call, response parsing.
// All inference calls go through llm_client.

pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
