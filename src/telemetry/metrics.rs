use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("nirogya-triage"));

// --- LLM Gateway Metrics ---

pub static GEN_AI_TOKEN_USAGE: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("gen_ai.client.token.usage")
        .with_description("Number of tokens used per LLM call")
        .with_unit("{token}")
        .build()
});

pub static GEN_AI_OPERATION_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("gen_ai.client.operation.duration")
        .with_description("Duration of LLM operations in seconds")
        .with_unit("s")
        .build()
});

pub static GEN_AI_RETRY_COUNT: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("gen_ai.client.retry.count")
        .with_description("Number of LLM call retries")
        .with_unit("{retry}")
        .build()
});

pub static GEN_AI_FALLBACK_COUNT: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("gen_ai.client.fallback.count")
        .with_description("Number of LLM fallback activations")
        .with_unit("{fallback}")
        .build()
});

pub static GEN_AI_ERROR_COUNT: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("gen_ai.client.error.count")
        .with_description("Number of LLM call errors")
        .with_unit("{error}")
        .build()
});

// --- Triage Metrics ---

pub static TRIAGE_TURNS: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("triage.turns")
        .with_description("Session turns by outcome")
        .with_unit("{turn}")
        .build()
});

pub static TRIAGE_LANGUAGE_DETECTED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("triage.language.detected")
        .with_description("Detected input languages")
        .with_unit("{detection}")
        .build()
});

pub static TRIAGE_TURN_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("triage.turn.duration")
        .with_description("End-to-end duration of a triage turn in seconds")
        .with_unit("s")
        .build()
});

pub static TRIAGE_CONTEXT_CHUNKS: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("triage.context.chunks")
        .with_description("Number of grounding chunks retrieved per turn")
        .with_unit("{chunk}")
        .with_boundaries(vec![0.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0])
        .build()
});
