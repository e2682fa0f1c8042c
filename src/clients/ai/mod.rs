pub mod gemini;
pub mod json_response;
pub mod prompts;

pub use gemini::GeminiClient;

use crate::config::GeminiConfig;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Knobs passed to the upstream model alongside the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    /// e.g. `application/json` to bias the model towards JSON output.
    pub response_mime_type: Option<String>,
    /// Ground the answer in live web search results.
    pub web_search: bool,
    pub system_instruction: Option<String>,
}

impl GenerationOptions {
    /// Low temperature, JSON-biased, web-grounded settings used for product analysis.
    pub fn product_analysis() -> Self {
        Self {
            temperature: 0.2,
            response_mime_type: Some("application/json".to_string()),
            web_search: true,
            system_instruction: Some(prompts::SHOPPING_ASSISTANT_INSTRUCTION.to_string()),
        }
    }
}

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Submits the prompt and returns the model's raw text.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
    fn provider_name(&self) -> &'static str;
}

/// Builds the process-wide upstream client, or `None` when no credential is configured.
pub fn create_ai_client(config: &GeminiConfig) -> Result<Option<Arc<dyn AiClient>>> {
    match &config.api_key {
        Some(_) => Ok(Some(Arc::new(GeminiClient::new(config.clone())?))),
        None => Ok(None),
    }
}
