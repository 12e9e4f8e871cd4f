use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use opentelemetry::KeyValue;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{TriageError, TriageResult};
use crate::telemetry::metrics::{
    TRIAGE_CONTEXT_CHUNKS, TRIAGE_LANGUAGE_DETECTED, TRIAGE_TURN_DURATION, TRIAGE_TURNS,
};

use super::compose::compose;
use super::format::{self, TriageReport};
use super::generate::{self, Generator};
use super::language::{SupportedLanguage, detect};
use super::normalize::normalize_detailed;
use super::retrieve::{self, Retriever};

pub const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "bye"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Detecting,
    Normalizing,
    Retrieving,
    Composing,
    Generating,
    Reporting,
    ErrorRecovery,
    Exiting,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Detecting => "detecting",
            SessionState::Normalizing => "normalizing",
            SessionState::Retrieving => "retrieving",
            SessionState::Composing => "composing",
            SessionState::Generating => "generating",
            SessionState::Reporting => "reporting",
            SessionState::ErrorRecovery => "error_recovery",
            SessionState::Exiting => "exiting",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum TurnOutcome {
    Report(TriageReport),
    /// Blank input; nothing external was called.
    Rejected(TriageError),
    /// An external call failed; the session is back in `Idle`.
    Failed {
        language: SupportedLanguage,
        error: TriageError,
    },
    Exit,
}

impl TurnOutcome {
    fn label(&self) -> &'static str {
        match self {
            TurnOutcome::Report(_) => "report",
            TurnOutcome::Rejected(_) => "rejected",
            TurnOutcome::Failed { error, .. } => error.kind(),
            TurnOutcome::Exit => "exit",
        }
    }
}

/// Exact match against the exit keywords after trimming, ignoring case.
pub fn is_exit_command(input: &str) -> bool {
    let command = input.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&command.as_str())
}

pub struct Session {
    id: Uuid,
    retriever: Arc<dyn Retriever>,
    generator: Arc<dyn Generator>,
    state: SessionState,
    turns: u64,
    path: Vec<SessionState>,
}

impl Session {
    pub fn new(retriever: Arc<dyn Retriever>, generator: Arc<dyn Generator>) -> Self {
        Self {
            id: Uuid::new_v4(),
            retriever,
            generator,
            state: SessionState::Idle,
            turns: 0,
            path: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of turns that reached the pipeline.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// States visited during the most recent turn, starting state included.
    pub fn last_path(&self) -> &[SessionState] {
        &self.path
    }

    fn enter(&mut self, state: SessionState) {
        tracing::trace!(from = %self.state, to = %state, "session transition");
        self.state = state;
        self.path.push(state);
    }

    pub async fn handle_turn(&mut self, input: &str) -> TurnOutcome {
        self.path.clear();
        self.path.push(self.state);

        if self.state == SessionState::Exiting {
            return TurnOutcome::Exit;
        }

        let outcome = if is_exit_command(input) {
            self.enter(SessionState::Exiting);
            TurnOutcome::Exit
        } else if input.trim().is_empty() {
            tracing::debug!("blank input rejected");
            TurnOutcome::Rejected(TriageError::EmptyInput)
        } else {
            self.turns += 1;
            let span = tracing::info_span!(
                "triage turn",
                session.id = %self.id,
                turn = self.turns,
                language = tracing::field::Empty,
                outcome = tracing::field::Empty,
            );
            let start = Instant::now();
            let outcome = self.run_pipeline(input).instrument(span.clone()).await;

            span.record("outcome", outcome.label());
            TRIAGE_TURN_DURATION.record(
                start.elapsed().as_secs_f64(),
                &[KeyValue::new("outcome", outcome.label())],
            );
            outcome
        };

        TRIAGE_TURNS.add(1, &[KeyValue::new("outcome", outcome.label())]);
        outcome
    }

    async fn run_pipeline(&mut self, input: &str) -> TurnOutcome {
        self.enter(SessionState::Detecting);
        let language = detect(input);
        tracing::Span::current().record("language", language.tag());
        TRIAGE_LANGUAGE_DETECTED.add(1, &[KeyValue::new("language", language.tag())]);

        self.enter(SessionState::Normalizing);
        let normalized = normalize_detailed(input);
        tracing::debug!(
            rules_matched = normalized.matched.len(),
            families = ?normalized.families(),
            "input normalized"
        );

        match self.ground_and_generate(language, &normalized.text).await {
            Ok(report) => {
                self.enter(SessionState::Reporting);
                tracing::info!(
                    report.id = %report.id,
                    context_chunks = report.context_chunks,
                    "report ready"
                );
                self.enter(SessionState::Idle);
                TurnOutcome::Report(report)
            }
            Err(error) => {
                self.enter(SessionState::ErrorRecovery);
                tracing::warn!(error = %error, kind = error.kind(), "turn failed, recovering");
                self.enter(SessionState::Idle);
                TurnOutcome::Failed { language, error }
            }
        }
    }

    async fn ground_and_generate(
        &mut self,
        language: SupportedLanguage,
        normalized: &str,
    ) -> TriageResult<TriageReport> {
        let retriever = Arc::clone(&self.retriever);
        let generator = Arc::clone(&self.generator);

        self.enter(SessionState::Retrieving);
        let context = retrieve::retrieve(retriever.as_ref(), normalized).await?;
        TRIAGE_CONTEXT_CHUNKS.record(context.len() as f64, &[]);

        self.enter(SessionState::Composing);
        let prompt = compose(language, &context, normalized);

        self.enter(SessionState::Generating);
        let body = generate::generate(generator.as_ref(), &prompt).await?;

        Ok(TriageReport::new(language, body, context.len()))
    }

    /// Drive the interactive loop until an exit keyword or end of input.
    ///
    /// Only I/O errors on `input`/`output` end the loop with an error; turn
    /// failures are written out and the next line is read.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        output.write_all(format::render_banner().as_bytes()).await?;

        loop {
            output.write_all(format::render_prompt().as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                tracing::info!(session.id = %self.id, "input closed");
                self.state = SessionState::Exiting;
                break;
            };

            if !is_exit_command(&line) && !line.trim().is_empty() {
                output
                    .write_all(format::render_detected(detect(&line)).as_bytes())
                    .await?;
                output.flush().await?;
            }

            match self.handle_turn(&line).await {
                TurnOutcome::Exit => break,
                TurnOutcome::Rejected(_) => {
                    output.write_all(format::render_rejection().as_bytes()).await?;
                }
                TurnOutcome::Report(report) => {
                    output
                        .write_all(format::render_report(&report).as_bytes())
                        .await?;
                }
                TurnOutcome::Failed { language, error } => {
                    output
                        .write_all(format::render_failure(language, &error).as_bytes())
                        .await?;
                }
            }
        }

        output.write_all(format::render_farewell().as_bytes()).await?;
        output.flush().await?;

        tracing::info!(session.id = %self.id, turns = self.turns, "session ended");
        Ok(())
    }
}
