use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::AppState;
use crate::clients::ai::json_response::parse_model_json;
use crate::clients::ai::prompts::build_product_analysis_prompt;
use crate::clients::ai::GenerationOptions;
use crate::types::{AnalysisResult, AnalyzeProductRequest};
use crate::{AppError, Result};

pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "Missing GEMINI_API_KEY. Add it to your environment variables.";

pub async fn handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>> {
    // An unreadable body is treated like a missing product name.
    let request = match payload {
        Ok(Json(body)) => AnalyzeProductRequest::from_body(body),
        Err(rejection) => {
            tracing::debug!("Rejected analyze request body: {}", rejection);
            AnalyzeProductRequest::default()
        }
    };
    let product_name = request.product_name()?;

    let ai_client = state
        .ai_client
        .as_ref()
        .ok_or_else(|| AppError::Configuration(MISSING_CREDENTIAL_MESSAGE.to_string()))?;

    tracing::info!(
        product = %product_name,
        provider = ai_client.provider_name(),
        "Analyzing product"
    );

    let prompt = build_product_analysis_prompt(product_name);
    let raw = ai_client
        .generate(&prompt, &GenerationOptions::product_analysis())
        .await?;

    let parsed = parse_model_json(&raw)?;

    if let Err(e) = serde_json::from_value::<AnalysisResult>(parsed.clone()) {
        tracing::warn!(
            product = %product_name,
            "Model response does not match the AnalysisResult shape: {}",
            e
        );
    }

    Ok(Json(parsed))
}
