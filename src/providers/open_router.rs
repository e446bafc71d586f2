use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::PlanError;
use crate::prompt::SYSTEM_PROMPT;
use crate::providers::LlmProvider;

/// OpenRouter speaks the OpenAI chat-completions dialect with optional
/// attribution headers.
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, PlanError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .ok_or(PlanError::MissingApiKey("OpenRouter"))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://openrouter.ai".to_string());

        Ok(OpenRouterProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            referer: config
                .referer
                .clone()
                .or_else(|| std::env::var("OPENROUTER_REFERER").ok()),
            title: config
                .title
                .clone()
                .or_else(|| std::env::var("OPENROUTER_TITLE").ok()),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenRouterProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
            referer: None,
            title: None,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    fn provider_name(&self) -> &str {
        "openrouter"
    }

    async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
        let mut request = self
            .client
            .post(format!("{}/api/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key));

        if let Some(referer) = &self.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            request = request.header("X-Title", title);
        }

        let response = request
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("openrouter response ({}): {}", status, body);

        if !(200..300).contains(&status) {
            return Err(PlanError::Upstream { status, body });
        }

        let parsed: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => return Err(PlanError::Upstream { status, body }),
        };

        match parsed["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => Err(PlanError::Upstream { status, body }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r####"{"choices": [{"message": {"content": "### **1. Lentil Soup**"}}]}"####,
            )
            .create();

        let provider = OpenRouterProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "mistralai/mistral-small-3.2-24b-instruct:free".to_string(),
        );

        let result = provider.generate("two meals").await.unwrap();
        assert!(result.contains("Lentil Soup"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_generate_error_keeps_status_and_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": "rate limited"}"#)
            .create();

        let provider = OpenRouterProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "some-model".to_string(),
        );

        match provider.generate("two meals").await {
            Err(PlanError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limited"));
            }
            other => panic!("expected upstream error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = OpenRouterProvider::with_base_url(
            "fake_api_key".to_string(),
            "http://localhost".to_string(),
            "some-model".to_string(),
        );
        assert_eq!(provider.provider_name(), "openrouter");
    }
}
