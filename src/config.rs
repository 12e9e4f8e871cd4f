use std::env;
use std::str::FromStr;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub fallback_provider: String,
    pub fallback_model: String,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub ollama_base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub retriever_url: Option<String>,
    pub retriever_top_k: usize,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: Option<String>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            environment: or("APP_ENVIRONMENT", "development"),
            llm_provider: or("LLM_PROVIDER", "groq").to_lowercase(),
            llm_model: or("LLM_MODEL", "llama-3.1-8b-instant"),
            fallback_provider: or("FALLBACK_PROVIDER", "none").to_lowercase(),
            fallback_model: or("FALLBACK_MODEL", "llama-3.1-8b-instant"),
            groq_api_key: get("GROQ_API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            ollama_base_url: or("OLLAMA_BASE_URL", "http://localhost:11434"),
            temperature: parse_or(get("LLM_TEMPERATURE"), "LLM_TEMPERATURE", 0.1)?,
            max_tokens: parse_or(get("LLM_MAX_TOKENS"), "LLM_MAX_TOKENS", 2048)?,
            retriever_url: get("RETRIEVER_URL"),
            retriever_top_k: parse_or(get("RETRIEVER_TOP_K"), "RETRIEVER_TOP_K", 5)?,
            otel_service_name: or("OTEL_SERVICE_NAME", "nirogya-triage"),
            otel_exporter_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
            log_filter: or("LOG_FILTER", "warn"),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        None => Ok(default),
    }
}
