use anyhow::Context;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` when GEMINI_API_KEY is unset or empty.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Url,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty());

        let model = lookup("GEMINI_MODEL")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let base = lookup("GEMINI_API_BASE")
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());
        let base_url = Url::parse(&base)
            .with_context(|| format!("GEMINI_API_BASE is not a valid URL: {base:?}"))?;

        Ok(Self {
            port,
            gemini: GeminiConfig {
                api_key,
                model,
                base_url,
            },
        })
    }
}
