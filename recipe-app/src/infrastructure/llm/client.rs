use super::prompt::build_recipe_prompt;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::LlmConfig;
use recipe_errors::AppError;

pub struct ChatCompletionClient {
    http_client: reqwest::Client,
    config: LlmConfig,
}

impl ChatCompletionClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends one completion request for the given ingredients and returns the
    /// first choice's text. No retries.
    pub async fn generate_recipe(&self, ingredients: &str) -> Result<String, AppError> {
        let prompt = build_recipe_prompt(ingredients);
        let request = ChatCompletionRequest::new(
            &self.config.model,
            prompt,
            self.config.temperature,
            self.config.max_tokens,
        );
        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Completion service error: {} - {}", status, body);
            return Err(AppError::ProviderRejected {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_else(|| status.to_string()),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::ProviderUnavailable(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AppError::EmptyCompletion)
    }
}

/// Pulls `error.message` (or a bare `error` string) out of an
/// OpenAI-style error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    error
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| error.as_str())
        .map(str::to_string)
}
