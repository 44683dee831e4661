//! HTTP bindings for chat completion providers.
//!
//! OpenRouter, OpenAI, and Ollama share the OpenAI-compatible
//! `/chat/completions` wire format; Anthropic uses its `/messages` API with
//! a separate system field. The binding hides the difference behind a single
//! `chat` call that takes a system prompt and a user prompt and returns the
//! assistant's text.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{ModelConfig, Provider};
use crate::error::{ExecutorError, ExecutorResult};

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A resolved connection to one model at one provider.
#[derive(Debug, Clone)]
pub struct LlmBinding {
    config: ModelConfig,
    client: reqwest::Client,
}

impl LlmBinding {
    /// Create a binding for the given model configuration.
    pub fn resolve(config: ModelConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// The model configuration behind this binding.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Send a system + user prompt pair and return the assistant's text.
    pub async fn chat(&self, system: &str, user: &str) -> ExecutorResult<String> {
        let api_key = self.api_key()?;

        match self.config.provider {
            Provider::Anthropic => self.chat_anthropic(api_key, system, user).await,
            _ => self.chat_openai_compatible(api_key, system, user).await,
        }
    }

    /// Full request URL for this binding's provider.
    fn endpoint(&self) -> String {
        match self.config.provider {
            Provider::Anthropic => format!("{}/v1/messages", self.config.base_url),
            _ => format!("{}/chat/completions", self.config.base_url),
        }
    }

    fn api_key(&self) -> ExecutorResult<Option<&str>> {
        if self.config.provider.requires_api_key() && self.config.api_key.is_none() {
            return Err(ExecutorError::Configuration(format!(
                "no API key configured for provider {}",
                self.config.provider
            )));
        }
        Ok(self.config.api_key.as_deref())
    }

    async fn chat_openai_compatible(
        &self,
        api_key: Option<&str>,
        system: &str,
        user: &str,
    ) -> ExecutorResult<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(self.config.temperature),
        };

        trace!(?request, "sending chat request");

        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(key) = api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ExecutorError::ModelInvocation(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ExecutorError::ModelInvocation(format!(
                "{} API error {status}: {text}",
                self.config.provider
            )));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExecutorError::ResponseParse(e.to_string()))?;

        debug!(
            tokens = response.usage.as_ref().map_or(0, |u| u.total_tokens),
            "chat response received"
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ExecutorError::ResponseParse("response contained no assistant content".into())
            })
    }

    async fn chat_anthropic(
        &self,
        api_key: Option<&str>,
        system: &str,
        user: &str,
    ) -> ExecutorResult<String> {
        let request = AnthropicRequest {
            model: self.config.model.clone(),
            system: system.to_string(),
            messages: vec![ChatMessage::user(user)],
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        trace!(?request, "sending messages request");

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request);
        if let Some(key) = api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ExecutorError::ModelInvocation(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ExecutorError::ModelInvocation(format!(
                "anthropic API error {status}: {text}"
            )));
        }

        let response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| ExecutorError::ResponseParse(e.to_string()))?;

        let text: String = response
            .content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect();
        if text.is_empty() {
            return Err(ExecutorError::ResponseParse(
                "response contained no text content".into(),
            ));
        }
        Ok(text)
    }
}

/// OpenAI-compatible chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages.
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Temperature for generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A message in the chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: String,

    /// Text content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices.
    pub choices: Vec<ChatChoice>,

    /// Token usage information.
    pub usage: Option<ChatUsage>,
}

/// A choice in the completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message for this choice.
    pub message: ResponseMessage,

    /// Finish reason (stop, length, etc.).
    pub finish_reason: Option<String>,
}

/// Message in a completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Role (always "assistant" for responses).
    pub role: String,

    /// Text content of the response.
    pub content: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,

    /// Tokens in the completion.
    pub completion_tokens: u32,

    /// Total tokens used.
    pub total_tokens: u32,
}

/// Anthropic messages request.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    /// Model identifier.
    pub model: String,

    /// System prompt, passed out of band from the message list.
    pub system: String,

    /// Conversation messages (user/assistant only).
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate. Required by the API.
    pub max_tokens: u32,

    /// Temperature for generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Anthropic messages response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicResponse {
    /// Content blocks.
    pub content: Vec<ContentBlock>,

    /// Reason generation stopped.
    pub stop_reason: Option<String>,
}

/// One content block in an Anthropic response.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// Block type ("text" for text blocks).
    #[serde(rename = "type")]
    pub block_type: String,

    /// Text payload, present for text blocks.
    pub text: Option<String>,

    /// Remaining fields for non-text blocks.
    #[serde(flatten)]
    pub extra: Value,
}
