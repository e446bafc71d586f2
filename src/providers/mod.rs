mod factory;
mod hugging_face;
mod open_ai;
mod open_router;

pub use factory::ProviderFactory;
pub use hugging_face::HuggingFaceProvider;
pub use open_ai::OpenAiProvider;
pub use open_router::OpenRouterProvider;

use async_trait::async_trait;

use crate::error::PlanError;

/// Unified trait for all LLM providers.
///
/// Implementations normalize whatever shape the upstream returns into
/// the plain content string of the generated meal plan. A provider
/// makes exactly one round trip; there is no retry policy.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "huggingface")
    fn provider_name(&self) -> &str;

    /// Send the composed prompt upstream and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, PlanError>;
}
