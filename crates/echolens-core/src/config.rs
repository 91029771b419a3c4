//! Client configuration.

use crate::errors::{EchoError, EchoResult, API_KEY_ENV};

/// Model used when `ECHOLENS_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

/// OpenAI-compatible base URL of the hosted completion API.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Immutable configuration of a completion client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bearer credential.
    pub api_key: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `GROQ_API_KEY` | API credential (required) |
    /// | `ECHOLENS_MODEL` | Model identifier (default: `openai/gpt-oss-120b`) |
    /// | `ECHOLENS_API_URL` | Base URL (default: `https://api.groq.com/openai/v1`) |
    pub fn from_env() -> EchoResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(EchoError::MissingCredential)?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty_env("ECHOLENS_MODEL") {
            config.model = model;
        }
        if let Some(url) = non_empty_env("ECHOLENS_API_URL") {
            config.base_url = url;
        }
        Ok(config)
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var("ECHOLENS_MODEL");
        std::env::remove_var("ECHOLENS_API_URL");
    }

    #[test]
    #[serial]
    fn missing_key_is_config_error() {
        clear_env();
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, EchoError::MissingCredential));
    }

    #[test]
    #[serial]
    fn blank_key_counts_as_missing() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "   ");
        assert!(matches!(
            ClientConfig::from_env(),
            Err(EchoError::MissingCredential)
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn env_overrides_model_and_url() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "gsk-test");
        std::env::set_var("ECHOLENS_MODEL", "llama-3.1-70b");
        std::env::set_var("ECHOLENS_API_URL", "http://localhost:9999/v1/");
        let cfg = ClientConfig::from_env().unwrap();
        assert_eq!(cfg.api_key, "gsk-test");
        assert_eq!(cfg.model, "llama-3.1-70b");
        assert_eq!(
            cfg.completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
        clear_env();
    }

    #[test]
    fn debug_output_hides_key() {
        let cfg = ClientConfig::new("gsk-secret");
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("gsk-secret"));
        assert!(dbg.contains(DEFAULT_MODEL));
    }
}
