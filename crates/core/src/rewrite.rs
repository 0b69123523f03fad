//! Chat-completion client for content rewriting.
//!
//! This module sends the assembled rewrite prompt to an OpenAI-compatible
//! `/chat/completions` endpoint and returns the first completion's text.
//! Credentials live in an explicit [`RewriterConfig`] passed at
//! construction, not in process-global state, so tests can substitute a
//! mock endpoint and key.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prompt::{RewriteRequest, SYSTEM_PROMPT, build_prompt};
use crate::{RecastError, Result};

/// Default chat-completion endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model used for rewrites.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Configuration for the chat-completion client.
#[derive(Debug, Clone)]
pub struct RewriterConfig {
    /// Bearer token for the model API.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API (no trailing slash needed).
    pub base_url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Completion token ceiling.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl RewriterConfig {
    /// Creates a config with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1500,
            temperature: 0.7,
            timeout: 120,
        }
    }

    /// Reads the config from the process environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL` and `RECAST_MODEL`
    /// override the endpoint and model when set.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::MissingApiKey`] when `OPENAI_API_KEY` is
    /// absent or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(RecastError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL")
            && !base_url.is_empty()
        {
            config.base_url = base_url;
        }

        if let Ok(model) = std::env::var("RECAST_MODEL")
            && !model.is_empty()
        {
            config.model = model;
        }

        Ok(config)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Client for rewriting content via a hosted chat-completion model.
pub struct Rewriter {
    client: Client,
    config: RewriterConfig,
}

impl Rewriter {
    /// Creates a new rewriter from a configuration.
    pub fn new(config: RewriterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(RecastError::ModelRequestError)?;

        Ok(Self { client, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RewriterConfig {
        &self.config
    }

    /// Sends a two-message (system + user) chat request and returns the
    /// first completion's text.
    ///
    /// # Errors
    ///
    /// Returns [`RecastError::ApiError`] for non-success statuses,
    /// [`RecastError::ModelRequestError`] for transport failures, and
    /// [`RecastError::EmptyCompletion`] when the response has no choices.
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<String> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user".to_string(), content: build_prompt(request) },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let endpoint = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(RecastError::ModelRequestError)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecastError::ApiError { status: status.as_u16(), message });
        }

        let parsed: ChatResponse = response.json().await.map_err(RecastError::ModelRequestError)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(RecastError::EmptyCompletion)
    }
}
