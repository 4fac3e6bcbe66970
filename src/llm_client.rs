use async_trait::async_trait;

use crate::config::GeminiConfig;
use crate::consts;
use crate::errors::RelayError;
use crate::models::gemini::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Opaque text-in/text-out model call.
#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, RelayError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, config: &GeminiConfig) -> Self {
        Self {
            client,
            base_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, RelayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            RelayError::ConfigError("GEMINI_API_KEY is not configured".to_string())
        })?;

        let url = self.endpoint();
        log::debug!(
            "generateContent: model {}, prompt length {}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header(consts::API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ApiErrorResponse>(&text)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or(text);

            return Err(RelayError::ApiError(format!(
                "Error fetching from {url}: [{status}] {reason}"
            )));
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        parsed.text().map_err(RelayError::ApiError)
    }
}
