use thiserror::Error;

/// Errors that can occur while generating a meal plan.
///
/// Parsing a model response is deliberately infallible: malformed text
/// degrades to empty fields or dropped blocks, never an error. Only the
/// request path can fail.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Composed prompt was empty; rejected before any upstream call
    #[error("No prompt provided")]
    EmptyPrompt,

    /// Upstream provider returned a non-success status or an
    /// unrecognized body; the body is kept as opaque diagnostic text
    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure talking to the provider
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider credential missing from config and environment
    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),

    /// Unknown or disabled provider requested
    #[error("Provider error: {0}")]
    Provider(String),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
