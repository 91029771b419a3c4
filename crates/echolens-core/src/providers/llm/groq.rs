use super::{CompletionRequest, LlmClient};
use crate::config::ClientConfig;
use crate::errors::{EchoError, EchoResult};
use crate::model::LlmResponse;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::json;
use tracing::{debug, info};

const USER_AGENT_VALUE: &str = concat!("echolens/", env!("CARGO_PKG_VERSION"));

/// Client for an OpenAI-compatible chat-completion endpoint (Groq by default).
///
/// One request per call: no retries, no backoff and no timeout beyond the
/// transport defaults.
#[derive(Debug, Clone)]
pub struct GroqClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: ClientConfig) -> EchoResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| EchoError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut body = json!({
            "messages": request.messages,
            "model": self.config.model,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": request.stream,
        });
        if let Some(top_p) = request.top_p {
            body["top_p"] = json!(top_p);
        }
        body
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> EchoResult<LlmResponse> {
        let url = self.config.completions_url();
        let body = self.request_body(request);
        debug!(url = %url, model = %self.config.model, max_tokens = request.max_tokens, "sending chat completion");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            return Err(EchoError::Api {
                status: status.as_u16(),
                message: api_error_message(&error_text, status),
            });
        }

        let json: serde_json::Value = resp.json().await.map_err(|e| EchoError::InvalidResponse {
            message: format!("failed to parse completion response: {}", e),
        })?;

        // Only the first choice is consumed.
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| EchoError::InvalidResponse {
                message: "completion response missing choices[0].message.content".to_string(),
            })?
            .to_string();

        let usage = json.get("usage").cloned().unwrap_or_else(|| json!({}));
        info!(
            model = %self.config.model,
            chars = text.len(),
            "chat completion received"
        );

        Ok(LlmResponse {
            text,
            provider: self.provider_name().to_string(),
            model: json
                .get("model")
                .and_then(|m| m.as_str())
                .unwrap_or(&self.config.model)
                .to_string(),
            meta: json!({ "usage": usage }),
        })
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}

/// Prefer the OpenAI-style `error.message`, fall back to the raw body or the status line.
fn api_error_message(body: &str, status: reqwest::StatusCode) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    if let Some(msg) = parsed
        .as_ref()
        .and_then(|v| v.pointer("/error/message"))
        .and_then(|v| v.as_str())
    {
        return msg.to_string();
    }
    if body.trim().is_empty() {
        status.to_string()
    } else {
        body.trim().to_string()
    }
}
