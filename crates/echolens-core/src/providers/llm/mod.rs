//! Chat-completion providers.

use crate::errors::EchoResult;
use crate::model::{ChatMessage, LlmResponse};
use async_trait::async_trait;

pub mod fake;
pub mod groq;

pub use fake::FakeClient;
pub use groq::GroqClient;

/// One chat-completion call: ordered messages plus generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Optional system message first, then exactly one user message.
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: Option<f64>,
    /// Always false; responses are read in one piece.
    pub stream: bool,
}

impl CompletionRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(user_prompt)],
            temperature: 1.0,
            max_tokens: 1024,
            top_p: None,
            stream: false,
        }
    }

    /// Put a system message in front of the user message, replacing any previous one.
    pub fn with_system(mut self, content: impl Into<String>) -> Self {
        self.messages
            .retain(|m| m.role != crate::model::Role::System);
        self.messages.insert(0, ChatMessage::system(content));
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Content of the user message.
    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::model::Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one request and return the text of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> EchoResult<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}
