//! OpenAI Chat Completions client
//!
//! Works against any endpoint speaking the `/v1/chat/completions` protocol.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::domain::ports::{CompletionApi, CompletionRequest};
use crate::error::{CardsmithError, CardsmithResult};

/// Blocking chat-completions client
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CardsmithResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CardsmithError::Completion {
                message: format!("cannot build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
        })
    }

    /// Read the API key from `env_name`; a missing key fails on first use
    pub fn with_api_key_from_env(mut self, env_name: &str) -> Self {
        self.api_key = std::env::var(env_name).ok().filter(|k| !k.is_empty());
        self.api_key_env = env_name.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl CompletionApi for OpenAiClient {
    fn complete(&self, request: &CompletionRequest<'_>) -> CardsmithResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CardsmithError::Completion {
                message: format!("{} is not set", self.api_key_env),
            })?;

        let body = serde_json::json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "messages": request.messages,
        });

        let url = self.endpoint();
        tracing::debug!(%url, model = request.model, max_tokens = request.max_tokens, "chat completion");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .map_err(|e| CardsmithError::Completion {
                message: format!("request to {url} failed: {e}"),
            })?;

        let status = response.status();
        let response_text = response.text().map_err(|e| CardsmithError::Completion {
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(CardsmithError::Completion {
                message: format!("API error ({status}): {response_text}"),
            });
        }

        first_choice_text(&response_text)
    }
}

/// `choices[0].message.content` of a chat completion response
pub(crate) fn first_choice_text(response_text: &str) -> CardsmithResult<String> {
    let json: Value =
        serde_json::from_str(response_text).map_err(|e| CardsmithError::Completion {
            message: format!("failed to parse response: {e}"),
        })?;

    json["choices"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|choice| choice["message"]["content"].as_str())
        .map(str::to_string)
        .ok_or_else(|| CardsmithError::Completion {
            message: format!("unexpected response format: {json}"),
        })
}
