pub mod compose;
pub mod format;
pub mod generate;
pub mod language;
pub mod normalize;
pub mod orchestrator;
pub mod retrieve;
pub mod templates;

pub use compose::{ComposedPrompt, compose};
pub use generate::{Generator, LlmGenerator};
pub use language::{SupportedLanguage, detect};
pub use normalize::normalize;
pub use orchestrator::{Session, SessionState, TurnOutcome};
pub use retrieve::{EmptyRetriever, HttpRetriever, RetrievedContext, Retriever};
pub use templates::{ReportTemplate, SectionKey, templates_for};
