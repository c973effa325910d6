use anyhow::{Context, Result};

/// Default hosted text-generation endpoint.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mixtral-8x7B-Instruct-v0.1";

/// Application configuration loaded from environment variables.
///
/// `hf_token` is optional at startup: without it the service still boots and
/// reports a missing credential on every generation request.
#[derive(Clone)]
pub struct Config {
    pub hf_token: Option<String>,
    pub model_url: String,
    pub strict_counts: bool,
    pub port: u16,
    pub rust_log: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("hf_token", &self.hf_token.as_ref().map(|_| "<redacted>"))
            .field("model_url", &self.model_url)
            .field("strict_counts", &self.strict_counts)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_token: optional_env("HF_TOKEN"),
            model_url: optional_env("HF_MODEL_URL")
                .unwrap_or_else(|| DEFAULT_MODEL_URL.to_string()),
            strict_counts: match optional_env("STRICT_COUNTS") {
                Some(raw) => parse_flag(&raw)
                    .with_context(|| format!("STRICT_COUNTS must be a boolean, got '{raw}'"))?,
                None => false,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(parse_flag("YES").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(!parse_flag("0").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_debug_output_redacts_token() {
        let config = Config {
            hf_token: Some("hf_secret".to_string()),
            model_url: DEFAULT_MODEL_URL.to_string(),
            strict_counts: false,
            port: 8080,
            rust_log: "info".to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
