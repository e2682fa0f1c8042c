use crate::clients::ai::{AiClient, GenerationOptions};
use crate::config::GeminiConfig;
use crate::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    // Grounded responses may carry non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search_retrieval: GoogleSearchRetrieval,
}

#[derive(Debug, Serialize)]
struct GoogleSearchRetrieval {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| AppError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.as_str().trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            api_key,
            endpoint,
            model: config.model,
        })
    }

    fn build_request(prompt: &str, options: &GenerationOptions) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            system_instruction: options.system_instruction.as_ref().map(|text| Content {
                role: None,
                parts: vec![Part {
                    text: Some(text.clone()),
                }],
            }),
            tools: if options.web_search {
                vec![Tool {
                    google_search_retrieval: GoogleSearchRetrieval {},
                }]
            } else {
                Vec::new()
            },
            generation_config: GenerationConfig {
                temperature: options.temperature,
                response_mime_type: options.response_mime_type.clone(),
            },
        }
    }

    /// Concatenated text of the first candidate.
    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(AppError::Upstream(format!(
                "Gemini returned no response: {}",
                reason
            )));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::Upstream(format!(
                "Gemini response contained no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let request = Self::build_request(prompt, options);

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            web_search = options.web_search,
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Gemini API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(AppError::Upstream(format!(
                    "Gemini API quota exceeded ({}): {}",
                    status, error_text
                )));
            }
            return Err(AppError::Upstream(format!(
                "Gemini API returned {}: {}",
                status, error_text
            )));
        }

        let gemini_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse Gemini response: {}", e)))?;

        let text = Self::extract_text(gemini_response)?;
        tracing::debug!(response_len = text.len(), "Received Gemini response");

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
