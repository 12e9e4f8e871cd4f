use std::sync::Arc;

use tokio::io::BufReader;

use nirogya_triage::Config;
use nirogya_triage::llm::{self, LlmClient};
use nirogya_triage::pipeline::{EmptyRetriever, HttpRetriever, LlmGenerator, Retriever, Session};
use nirogya_triage::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let telemetry_guard = init_telemetry(&config)?;

    tracing::info!(
        environment = %config.environment,
        provider = %config.llm_provider,
        model = %config.llm_model,
        "Starting nirogya-triage"
    );

    let primary = llm::build_provider(&config.llm_provider, &config)?
        .ok_or_else(|| anyhow::anyhow!("LLM_PROVIDER must name a provider"))?;
    let mut client = LlmClient::new(primary);
    if let Some(fallback) = llm::build_provider(&config.fallback_provider, &config)? {
        client = client.with_fallback(fallback, &config.fallback_model);
    }

    tracing::info!(
        primary_provider = %config.llm_provider,
        fallback_provider = %config.fallback_provider,
        "LLM client initialized"
    );

    let generator = Arc::new(LlmGenerator::new(
        Arc::new(client),
        &config.llm_model,
        config.temperature,
        config.max_tokens,
    ));

    let retriever: Arc<dyn Retriever> = match config.retriever_url.as_deref() {
        Some(url) => Arc::new(HttpRetriever::new(url, config.retriever_top_k)),
        None => {
            tracing::warn!("RETRIEVER_URL not set, reports will not be grounded");
            Arc::new(EmptyRetriever)
        }
    };

    let mut session = Session::new(retriever, generator);
    let result = session
        .run(BufReader::new(tokio::io::stdin()), &mut tokio::io::stdout())
        .await;

    telemetry_guard.shutdown();

    result
}
