//! Generation client for text completion using an OpenAI-compatible API.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Default maximum number of tokens to generate.
pub const DEFAULT_MAX_TOKENS: u32 = 20;

/// Generation client errors.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// Configuration for the text-generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/v1".to_string(),
            api_key: "EMPTY".to_string(),
            model_name: "distilgpt2".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.0,
        }
    }
}

impl GenerationConfig {
    /// Create a new GenerationConfig with custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a new GenerationConfig with custom API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Create a new GenerationConfig with custom model name.
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// One completion returned by the endpoint.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model: String,
}

/// Completions API response structures.
#[derive(Debug, Deserialize)]
struct CompletionsResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// Client for OpenAI-compatible text completion endpoints.
pub struct GenerationClient {
    config: GenerationConfig,
    client: Client,
}

impl GenerationClient {
    /// Create a new GenerationClient with the given configuration.
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a new GenerationClient with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GenerationConfig::default())
    }

    /// Request one completion for the given prompt.
    ///
    /// # Arguments
    /// * `prompt` - Input text for the model.
    ///
    /// # Returns
    /// Completion bounded by the configured `max_tokens`. A single request is
    /// issued; any failure is returned to the caller as-is.
    pub async fn complete(&self, prompt: &str) -> Result<Completion, GenerationError> {
        let url = format!("{}/completions", self.config.base_url);
        let body = self.build_request_body(prompt);

        debug!(%url, model = %self.config.model_name, "requesting completion");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError(error_text));
        }

        let completion: CompletionsResponse = response.json().await?;

        if completion.choices.is_empty() {
            return Err(GenerationError::ParseError(
                "No choices in response".to_string(),
            ));
        }

        Ok(Completion {
            text: completion.choices[0].text.clone(),
            model: completion.model,
        })
    }

    /// Build the JSON request body for a prompt.
    fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model_name,
            "prompt": prompt,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/v1");
        assert_eq!(config.model_name, "distilgpt2");
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_generation_config_builders() {
        let config = GenerationConfig::default()
            .with_base_url("http://example.com/v1")
            .with_model_name("gpt2")
            .with_max_tokens(64);
        assert_eq!(config.base_url, "http://example.com/v1");
        assert_eq!(config.model_name, "gpt2");
        assert_eq!(config.max_tokens, 64);
    }

    #[test]
    fn test_build_request_body() {
        let client = GenerationClient::with_defaults();
        let body = client.build_request_body("Hello!");
        assert_eq!(body["model"], "distilgpt2");
        assert_eq!(body["prompt"], "Hello!");
        assert_eq!(body["max_tokens"], DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_parse_completions_response() {
        let payload = r#"{"choices":[{"text":" How are you today?"}],"model":"distilgpt2"}"#;
        let response: CompletionsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].text, " How are you today?");
        assert_eq!(response.model, "distilgpt2");
    }

    #[test]
    fn test_parse_completions_response_missing_model() {
        let payload = r#"{"choices":[{"text":"hi"}]}"#;
        let response: CompletionsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.model, "");
    }
}
