/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All LLM interactions go through the `LlmGateway` trait defined here.
///
/// Model: gpt-4o-mini (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response did not contain choices[0].message.content")]
    MissingCompletion,
}

/// One chat-completion call: a system message, a user message and sampling limits.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Anything that can turn a `CompletionRequest` into completion text.
///
/// Carried in `AppState` as `Arc<dyn LlmGateway>` so tests can substitute a fake.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Token accounting, logged only. Compatible servers may omit either count.
#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if the upstream sent one.
    fn completion(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Gateway backed by an OpenAI-compatible `/chat/completions` endpoint.
/// No retries: every `complete` is exactly one upstream round-trip.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmGateway for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat_response
            .completion()
            .map(str::to_string)
            .ok_or(LlmError::MissingCompletion)
    }
}
