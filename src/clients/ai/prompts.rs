pub const SHOPPING_ASSISTANT_INSTRUCTION: &str = "You are an expert shopping assistant. Use grounded web search results to compare current prices and sentiment. Always return valid JSON only.";

pub fn build_product_analysis_prompt(product_name: &str) -> String {
    format!(
        r#"Analyze this product: "{}".

Tasks:
1) Search the web for CURRENT pricing from major retailers.
2) Provide at least 3 prices from different major retailers.
3) Summarize Reddit and expert-review sentiment.
4) Provide a concise recommendation: "Buy" or "Wait" with a one-paragraph reason.

Return ONLY valid JSON with this shape:
{{
  "productName": "string",
  "priceComparison": [
    {{ "store": "string", "price": "string", "url": "string" }}
  ],
  "valueSummary": {{
    "sentiment": "string",
    "recommendation": "Buy or Wait",
    "reasoning": "string"
  }}
}}"#,
        product_name
    )
}
