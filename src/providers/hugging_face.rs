use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::error::PlanError;
use crate::prompt::SYSTEM_PROMPT;
use crate::providers::LlmProvider;

/// Hugging Face inference API.
///
/// Takes a bare `inputs` string and answers with
/// `[{"generated_text": ...}]`; this provider normalizes that shape
/// into the plain content string the rest of the crate expects. Any
/// other body is propagated as an upstream error with the status code
/// and the raw payload as diagnostic text.
pub struct HuggingFaceProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, PlanError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("HUGGING_FACE_API_KEY").ok())
            .ok_or(PlanError::MissingApiKey("Hugging Face"))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api-inference.huggingface.co".to_string());

        Ok(HuggingFaceProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        HuggingFaceProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    fn provider_name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
        // The inference API has no message roles; prepend the system line.
        let inputs = format!("{}\n{}", SYSTEM_PROMPT, prompt);

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({ "inputs": inputs }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("huggingface response ({}): {}", status, body);

        if !(200..300).contains(&status) {
            return Err(PlanError::Upstream { status, body });
        }

        let parsed: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => {
                warn!("non-JSON response from Hugging Face model {}", self.model);
                return Err(PlanError::Upstream { status, body });
            }
        };

        match parsed[0]["generated_text"].as_str() {
            Some(text) => Ok(text.to_string()),
            None => Err(PlanError::Upstream { status, body }),
        }
    }
}
