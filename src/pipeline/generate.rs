use std::sync::Arc;

use crate::error::TriageError;
use crate::llm::{GenerateRequest, LlmClient};

use super::compose::ComposedPrompt;

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &ComposedPrompt) -> anyhow::Result<String>;
}

/// Sends the composed prompt as a single user message.
pub struct LlmGenerator {
    client: Arc<LlmClient>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmGenerator {
    pub fn new(client: Arc<LlmClient>, model: &str, temperature: f32, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.to_string(),
            temperature,
            max_tokens,
        }
    }
}

#[async_trait::async_trait]
impl Generator for LlmGenerator {
    async fn generate(&self, prompt: &ComposedPrompt) -> anyhow::Result<String> {
        let resp = self
            .client
            .generate(&GenerateRequest {
                model: self.model.clone(),
                system: String::new(),
                prompt: prompt.text.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                stage: "generate".to_string(),
            })
            .await?;

        tracing::debug!(
            provider = %resp.provider,
            model = %resp.model,
            output_tokens = resp.output_tokens,
            finish_reason = %resp.finish_reason,
            "report generated"
        );

        Ok(resp.content)
    }
}

#[tracing::instrument(
    name = "pipeline_stage generate",
    skip(generator, prompt),
    fields(
        pipeline.stage = "generate",
        language = prompt.language.tag(),
        generate.chars,
    )
)]
pub async fn generate(
    generator: &dyn Generator,
    prompt: &ComposedPrompt,
) -> Result<String, TriageError> {
    let text = generator
        .generate(prompt)
        .await
        .map_err(|e| TriageError::Generation(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(TriageError::Generation(
            "generator returned an empty response".into(),
        ));
    }

    tracing::Span::current().record("generate.chars", text.chars().count());

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::language::SupportedLanguage;

    struct Echo(&'static str);

    #[async_trait::async_trait]
    impl Generator for Echo {
        async fn generate(&self, _prompt: &ComposedPrompt) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    #[async_trait::async_trait]
    impl Generator for Broken {
        async fn generate(&self, _prompt: &ComposedPrompt) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("429 rate limit exceeded"))
        }
    }

    fn prompt() -> ComposedPrompt {
        ComposedPrompt {
            language: SupportedLanguage::English,
            text: "prompt".to_string(),
        }
    }

    #[tokio::test]
    async fn trims_generated_text() {
        let text = generate(&Echo("\n  Cholera suspected.  \n"), &prompt())
            .await
            .unwrap();
        assert_eq!(text, "Cholera suspected.");
    }

    #[tokio::test]
    async fn blank_response_is_a_generation_failure() {
        let err = generate(&Echo("   \n"), &prompt()).await.unwrap_err();
        assert!(matches!(err, TriageError::Generation(_)));
    }

    #[tokio::test]
    async fn provider_errors_map_to_generation_failure() {
        let err = generate(&Broken, &prompt()).await.unwrap_err();
        assert_eq!(err.to_string(), "Generation error: 429 rate limit exceeded");
    }
}
