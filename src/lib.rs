pub mod config;
pub mod error;
pub mod links;
pub mod model;
pub mod parse;
pub mod prompt;
pub mod providers;

use log::debug;

pub use config::{AiConfig, ProviderConfig};
pub use error::PlanError;
pub use links::{retailer_links, RetailerLinks};
pub use model::{GenerationRequest, GrocerySection, MealPlan, Recipe};
pub use parse::{normalize_ingredient, parse_meal_plan, split_response};
pub use prompt::compose_prompt;
pub use providers::{LlmProvider, ProviderFactory};

/// Generate a meal plan with the default provider from configuration.
///
/// Composes the prompt, makes a single round trip upstream, and parses
/// the returned text. Configuration is read from `config.toml` and
/// `MEALGEN__`-prefixed environment variables.
pub async fn generate_meal_plan(request: &GenerationRequest) -> Result<MealPlan, PlanError> {
    let config = AiConfig::load()?;
    let provider = ProviderFactory::get_default_provider(&config)?;

    generate_meal_plan_with_provider(request, provider.as_ref()).await
}

/// Generate a meal plan with an explicit provider.
pub async fn generate_meal_plan_with_provider(
    request: &GenerationRequest,
    provider: &dyn LlmProvider,
) -> Result<MealPlan, PlanError> {
    let prompt = compose_prompt(request);
    if prompt.trim().is_empty() {
        return Err(PlanError::EmptyPrompt);
    }
    debug!("composed prompt: {}", prompt);

    let content = provider.generate(&prompt).await?;
    debug!("model returned {} bytes", content.len());

    Ok(parse_meal_plan(&content))
}
