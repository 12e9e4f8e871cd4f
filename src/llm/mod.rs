pub mod anthropic;
pub mod client;
pub mod openai;

use std::sync::Arc;

pub use client::LlmClient;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stage: String,
}

#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub finish_reason: String,
    pub provider: String,
}

#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, req: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
    fn name(&self) -> &str;
}

/// Instantiate a provider by name. `"none"` and the empty string mean no
/// provider; a hosted provider without its API key is a configuration error.
pub fn build_provider(name: &str, config: &Config) -> anyhow::Result<Option<Arc<dyn Provider>>> {
    let provider: Arc<dyn Provider> = match name {
        "" | "none" => return Ok(None),
        "groq" => Arc::new(openai::OpenAIProvider::new_groq(required_key(
            config.groq_api_key.as_deref(),
            "GROQ_API_KEY",
        )?)),
        "openai" => Arc::new(openai::OpenAIProvider::new(required_key(
            config.openai_api_key.as_deref(),
            "OPENAI_API_KEY",
        )?)),
        "anthropic" => Arc::new(anthropic::AnthropicProvider::new(required_key(
            config.anthropic_api_key.as_deref(),
            "ANTHROPIC_API_KEY",
        )?)),
        "ollama" => Arc::new(openai::OpenAIProvider::new_ollama(&config.ollama_base_url)),
        other => anyhow::bail!("unknown LLM provider: {other}"),
    };
    Ok(Some(provider))
}

fn required_key<'a>(key: Option<&'a str>, var: &str) -> anyhow::Result<&'a str> {
    match key {
        Some(k) if !k.trim().is_empty() => Ok(k),
        _ => anyhow::bail!("{var} must be set for the selected provider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned()).unwrap()
    }

    #[test]
    fn none_means_no_provider() {
        let cfg = config(&[]);
        assert!(build_provider("none", &cfg).unwrap().is_none());
        assert!(build_provider("", &cfg).unwrap().is_none());
    }

    #[test]
    fn hosted_provider_requires_key() {
        let cfg = config(&[]);
        let err = build_provider("groq", &cfg).err().unwrap();
        assert!(err.to_string().contains("GROQ_API_KEY"));
        assert!(build_provider("anthropic", &cfg).is_err());
    }

    #[test]
    fn builds_named_providers() {
        let cfg = config(&[("GROQ_API_KEY", "gsk_test"), ("ANTHROPIC_API_KEY", "sk-ant")]);
        assert_eq!(build_provider("groq", &cfg).unwrap().unwrap().name(), "groq");
        assert_eq!(
            build_provider("anthropic", &cfg).unwrap().unwrap().name(),
            "anthropic"
        );
        assert_eq!(build_provider("ollama", &cfg).unwrap().unwrap().name(), "ollama");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let cfg = config(&[]);
        assert!(build_provider("watson", &cfg).is_err());
    }
}
