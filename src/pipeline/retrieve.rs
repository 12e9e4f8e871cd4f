use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// Ordered grounding chunks returned by a retriever, most similar first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrievedContext {
    chunks: Vec<String>,
}

impl RetrievedContext {
    pub fn new(chunks: Vec<String>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[async_trait::async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> anyhow::Result<RetrievedContext>;
    fn name(&self) -> &str;
}

/// Client for an external similarity-search service.
///
/// Posts `{"query": .., "k": ..}` and expects `{"chunks": [..]}` back.
pub struct HttpRetriever {
    client: reqwest::Client,
    endpoint: String,
    top_k: usize,
}

impl HttpRetriever {
    pub fn new(endpoint: &str, top_k: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            top_k,
        }
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    k: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    chunks: Vec<String>,
}

#[derive(Deserialize)]
struct SearchError {
    error: String,
}

#[async_trait::async_trait]
impl Retriever for HttpRetriever {
    async fn retrieve(&self, query: &str) -> anyhow::Result<RetrievedContext> {
        let response = self
            .client
            .post(format!("{}/retrieve", self.endpoint))
            .json(&SearchRequest {
                query,
                k: self.top_k,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<SearchError>(&error_body) {
                return Err(anyhow::anyhow!("retriever error ({}): {}", status, err.error));
            }
            return Err(anyhow::anyhow!("retriever error ({}): {}", status, error_body));
        }

        let body: SearchResponse = response.json().await?;
        Ok(parse_chunks(body.chunks, self.top_k))
    }

    fn name(&self) -> &str {
        "http"
    }
}

fn parse_chunks(chunks: Vec<String>, top_k: usize) -> RetrievedContext {
    RetrievedContext::new(
        chunks
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .take(top_k)
            .collect(),
    )
}

/// Ungrounded mode: every query gets an empty context.
pub struct EmptyRetriever;

#[async_trait::async_trait]
impl Retriever for EmptyRetriever {
    async fn retrieve(&self, _query: &str) -> anyhow::Result<RetrievedContext> {
        Ok(RetrievedContext::default())
    }

    fn name(&self) -> &str {
        "none"
    }
}

#[tracing::instrument(
    name = "pipeline_stage retrieve",
    skip(retriever, query),
    fields(
        pipeline.stage = "retrieve",
        retriever = retriever.name(),
        retrieve.chunks,
    )
)]
pub async fn retrieve(
    retriever: &dyn Retriever,
    query: &str,
) -> Result<RetrievedContext, TriageError> {
    let context = retriever
        .retrieve(query)
        .await
        .map_err(|e| TriageError::Retrieval(e.to_string()))?;

    tracing::Span::current().record("retrieve.chunks", context.len());

    if context.is_empty() {
        tracing::debug!("no grounding context retrieved");
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingRetriever;

    #[async_trait::async_trait]
    impl Retriever for FailingRetriever {
        async fn retrieve(&self, _query: &str) -> anyhow::Result<RetrievedContext> {
            Err(anyhow::anyhow!("connection refused"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn parse_chunks_drops_blank_and_caps_at_top_k() {
        let chunks = vec![
            "Cholera spreads through contaminated water.".to_string(),
            "   ".to_string(),
            "Typhoid causes prolonged fever.".to_string(),
            "Hepatitis A affects the liver.".to_string(),
        ];
        let context = parse_chunks(chunks, 2);
        assert_eq!(
            context.chunks(),
            &[
                "Cholera spreads through contaminated water.".to_string(),
                "Typhoid causes prolonged fever.".to_string(),
            ]
        );
    }

    #[test]
    fn search_response_deserializes() {
        let body = r#"{"chunks": ["a", "b"]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.chunks, vec!["a", "b"]);
    }

    #[test]
    fn search_request_serializes() {
        let body = serde_json::to_value(SearchRequest {
            query: "fever",
            k: 5,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"query": "fever", "k": 5}));
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let retriever = HttpRetriever::new("http://localhost:8000/", 5);
        assert_eq!(retriever.endpoint, "http://localhost:8000");
    }

    #[tokio::test]
    async fn empty_retriever_returns_no_context() {
        let context = tokio_test::assert_ok!(retrieve(&EmptyRetriever, "fever").await);
        assert!(context.is_empty());
    }

    #[tokio::test]
    async fn failures_map_to_retrieval_error() {
        let err = tokio_test::assert_err!(retrieve(&FailingRetriever, "fever").await);
        assert!(matches!(err, TriageError::Retrieval(ref msg) if msg.contains("connection refused")));
    }
}
