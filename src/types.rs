use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AppError, Result};

pub const INVALID_PRODUCT_NAME_MESSAGE: &str =
    "Please provide a valid productName in the request body.";

// Request Types
#[derive(Debug, Default)]
pub struct AnalyzeProductRequest {
    pub product_name: Option<Value>,
}

impl AnalyzeProductRequest {
    /// Reads `productName` from a JSON object body; any other body has none.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                product_name: fields.remove("productName"),
            },
            _ => Self::default(),
        }
    }

    /// Returns the product name if it is a non-empty string.
    pub fn product_name(&self) -> Result<&str> {
        match &self.product_name {
            Some(Value::String(name)) if !name.is_empty() => Ok(name.as_str()),
            _ => Err(AppError::InvalidInput(
                INVALID_PRODUCT_NAME_MESSAGE.to_string(),
            )),
        }
    }
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub product_name: String,
    pub price_comparison: Vec<PriceQuote>,
    pub value_summary: ValueSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub store: String,
    pub price: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueSummary {
    pub sentiment: String,
    pub recommendation: Recommendation,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Wait,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> AnalyzeProductRequest {
        AnalyzeProductRequest::from_body(body)
    }

    #[test]
    fn accepts_string_product_name() {
        let req = request(json!({ "productName": "Sony WH-1000XM5" }));
        assert_eq!(req.product_name().unwrap(), "Sony WH-1000XM5");
    }

    #[test]
    fn rejects_missing_non_string_and_empty_names() {
        for body in [
            json!({}),
            json!({ "productName": null }),
            json!({ "productName": 42 }),
            json!({ "productName": ["a"] }),
            json!({ "productName": "" }),
            json!(["Kindle"]),
            json!("Kindle"),
        ] {
            let err = request(body.clone()).product_name().unwrap_err();
            assert!(
                matches!(err, AppError::InvalidInput(_)),
                "expected invalid input for {body}"
            );
        }
    }

    #[test]
    fn whitespace_name_is_a_non_empty_string() {
        let req = request(json!({ "productName": "   " }));
        assert_eq!(req.product_name().unwrap(), "   ");
    }

    #[test]
    fn analysis_result_uses_camel_case_fields() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "productName": "Kindle",
            "priceComparison": [{ "store": "Amazon", "price": "$99", "url": "https://a" }],
            "valueSummary": { "sentiment": "positive", "recommendation": "Wait", "reasoning": "Sale soon." }
        }))
        .unwrap();

        assert_eq!(result.price_comparison.len(), 1);
        assert_eq!(result.value_summary.recommendation, Recommendation::Wait);
    }
}
