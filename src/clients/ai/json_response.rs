//! Recovery of JSON objects from model output.
//!
//! Models asked for JSON sometimes wrap it in a Markdown code block anyway.
//! Parsing is attempted once on the raw text and once more after removing a
//! single leading and trailing fence.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::{AppError, Result};

static LEADING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^```(?:json\b)?[ \t]*\r?\n?").expect("leading fence pattern is valid")
});

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```$").expect("trailing fence pattern is valid"));

/// Removes one leading ```` ``` ```` / ```` ```json ```` marker, one trailing
/// ```` ``` ```` marker and the surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let text = match LEADING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    let text = text.trim_end();
    let text = match TRAILING_FENCE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    text.trim()
}

/// Parses model output as JSON, retrying once on the fence-stripped text.
pub fn parse_model_json(raw: &str) -> Result<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(_) => {
            let cleaned = strip_code_fences(raw);
            tracing::debug!(
                raw_len = raw.len(),
                cleaned_len = cleaned.len(),
                "Strict parse failed, retrying on fence-stripped text"
            );
            serde_json::from_str(cleaned).map_err(|e| AppError::Parse(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_json_is_returned_as_is() {
        let value = parse_model_json(r#"{"productName":"Kindle","priceComparison":[]}"#).unwrap();
        assert_eq!(value, json!({ "productName": "Kindle", "priceComparison": [] }));
    }

    #[test]
    fn strips_tagged_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
        assert_eq!(parse_model_json(raw).unwrap(), json!({ "a": 1 }));
    }

    #[test]
    fn strips_bare_and_uppercase_fences_with_surrounding_whitespace() {
        assert_eq!(strip_code_fences("\n  ```\n[1, 2]\n```  \n"), "[1, 2]");
        assert_eq!(strip_code_fences("```JSON {\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn stripping_clean_json_is_a_no_op() {
        let clean = "{\"a\": {\"b\": \"```\"}}";
        assert_eq!(strip_code_fences(clean), clean);
        assert_eq!(strip_code_fences(strip_code_fences(clean)), clean);
    }

    #[test]
    fn only_outer_fences_are_removed() {
        let raw = "```json\n{\"code\": \"```rust```\"}\n```";
        assert_eq!(strip_code_fences(raw), "{\"code\": \"```rust```\"}");
        assert_eq!(
            parse_model_json(raw).unwrap(),
            json!({ "code": "```rust```" })
        );
    }

    #[test]
    fn other_language_tags_are_not_split() {
        assert_eq!(strip_code_fences("```jsonc\n{}\n```"), "jsonc\n{}");
        assert_eq!(strip_code_fences("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn prose_is_a_parse_error() {
        let err = parse_model_json("Sorry, I could not find prices for that product.").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn truncated_fenced_json_is_a_parse_error() {
        let err = parse_model_json("```json\n{\"productName\": \"Kindle\",\n```").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
