use super::{CompletionRequest, LlmClient};
use crate::errors::{EchoError, EchoResult};
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::sync::Mutex;

/// Deterministic in-process client. Never touches the network.
#[derive(Debug)]
pub struct FakeClient {
    model: String,
    fixed_response: Option<String>,
    failure: Option<String>,
    /// Number of calls that succeed before `failure` kicks in.
    fail_after: usize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeClient {
    pub fn new(model: String) -> Self {
        Self {
            model,
            fixed_response: None,
            failure: None,
            fail_after: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: String) -> Self {
        self.fixed_response = Some(response);
        self
    }

    /// Answer every call with a transport failure.
    pub fn failing(self, message: impl Into<String>) -> Self {
        self.failing_after(0, message)
    }

    /// Let `successes` calls through, then fail every following call.
    pub fn failing_after(mut self, successes: usize, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self.fail_after = successes;
        self
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, request: &CompletionRequest) -> EchoResult<LlmResponse> {
        let call_index = {
            let mut requests = self.requests.lock().map_err(|_| EchoError::Network {
                message: "fake client state poisoned".to_string(),
            })?;
            requests.push(request.clone());
            requests.len() - 1
        };

        if let Some(message) = &self.failure {
            if call_index >= self.fail_after {
                return Err(EchoError::Network {
                    message: message.clone(),
                });
            }
        }

        let text = self
            .fixed_response
            .clone()
            .unwrap_or_else(|| format!("fake completion for: {}", first_line(request.user_prompt())));

        Ok(LlmResponse {
            text,
            provider: "fake".to_string(),
            model: self.model.clone(),
            meta: serde_json::json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_and_fails_on_schedule() {
        let client = FakeClient::new("fake-model".into()).failing_after(1, "connection reset");

        let ok = client.complete(&CompletionRequest::new("first")).await.unwrap();
        assert_eq!(ok.text, "fake completion for: first");
        assert_eq!(ok.provider, "fake");

        let err = client
            .complete(&CompletionRequest::new("second"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));

        let seen = client.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].user_prompt(), "second");
    }
}
