//! Model client for text completion using an OpenAI-compatible API

use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::debug;

use crate::config::{BASE_URL_ENV, MODEL_ENV};
use crate::error::{Result, TranslatorError};

/// Groq's OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Anything that can turn a rendered prompt into completion text
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one completion request and return the response text
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Configuration for the completion model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "EMPTY".to_string(),
            model_name: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
        }
    }
}

impl ModelConfig {
    /// Create a new ModelConfig with custom settings
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `GROQ_BASE_URL` and `GROQ_MODEL` when set and non-empty
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::new(
            non_empty_var(BASE_URL_ENV).unwrap_or(defaults.base_url),
            non_empty_var(MODEL_ENV).unwrap_or(defaults.model_name),
        )
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Backoff that gives up after the first failed attempt, including HTTP 429
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Client for an OpenAI-compatible chat completion endpoint
///
/// Every call sends exactly one HTTP request; failed requests are not retried.
pub struct ModelClient {
    config: ModelConfig,
    client: Client<OpenAIConfig>,
}

impl ModelClient {
    /// Create a new ModelClient
    pub fn new(config: ModelConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.base_url)
            .with_api_key(&config.api_key);

        let client = Client::with_config(openai_config).with_backoff(no_retry());

        Self { config, client }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Test connection to the model API by sending a simple request
    pub async fn test_connection(&self) -> Result<()> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model_name)
            .max_tokens(5_u32)
            .temperature(0.0_f32)
            .messages(vec![ChatCompletionRequestUserMessageArgs::default()
                .content("Hi")
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        if response.choices.is_empty() {
            return Err(TranslatorError::EmptyCompletion);
        }

        Ok(())
    }
}

#[async_trait]
impl CompletionBackend for ModelClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model_name)
            .temperature(self.config.temperature)
            .messages(vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        debug!(
            "Requesting completion from {} ({} prompt bytes)",
            self.config.model_name,
            prompt.len()
        );

        let response = self.client.chat().create(request).await?;

        // Only the text of the first choice is used; a message without text is an empty reply
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(TranslatorError::EmptyCompletion)?;
        let content = choice.message.content.unwrap_or_default();

        debug!("Received completion ({} bytes)", content.len());

        Ok(content)
    }
}
