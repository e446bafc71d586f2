use crate::config::{AiConfig, ProviderConfig};
use crate::error::PlanError;
use crate::providers::{HuggingFaceProvider, LlmProvider, OpenAiProvider, OpenRouterProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, PlanError> {
        if !config.enabled {
            return Err(PlanError::Provider(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAiProvider::new(config)?)),
            "openrouter" => Ok(Box::new(OpenRouterProvider::new(config)?)),
            "huggingface" => Ok(Box::new(HuggingFaceProvider::new(config)?)),
            _ => Err(PlanError::Provider(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &AiConfig) -> Result<Box<dyn LlmProvider>, PlanError> {
        let provider_name = &config.default_provider;
        let provider_config = config.providers.get(provider_name).ok_or_else(|| {
            PlanError::Provider(format!(
                "Default provider '{}' not found in configuration",
                provider_name
            ))
        })?;

        Self::create(provider_name, provider_config)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "openrouter", "huggingface"]
    }
}
