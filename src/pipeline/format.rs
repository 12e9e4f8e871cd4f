use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::TriageError;

use super::language::SupportedLanguage;
use super::templates::messages_for;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct TriageReport {
    pub id: Uuid,
    pub language: SupportedLanguage,
    pub body: String,
    pub context_chunks: usize,
    pub generated_at: DateTime<Utc>,
}

impl TriageReport {
    pub fn new(language: SupportedLanguage, body: String, context_chunks: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            body,
            context_chunks,
            generated_at: Utc::now(),
        }
    }
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

pub fn render_banner() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule('='));
    out.push_str("\n🏥 NORTHEAST INDIA MEDICAL ASSISTANT\n");
    out.push_str(&rule('='));
    out.push('\n');
    out.push_str("📍 Coverage: All 8 Northeast States\n");
    out.push_str("🌐 Languages: English • Hindi • অসমীয়া • বাংলা\n");
    out.push_str("💊 Focus: Water-borne diseases\n");
    out.push_str("⚠️  Educational guidance only - Always consult a doctor!\n");
    out.push_str("\nType 'exit' to quit\n");
    out.push_str(&rule('-'));
    out.push('\n');
    out
}

pub fn render_prompt() -> &'static str {
    "\n🔸 Describe your symptoms: "
}

pub fn render_detected(language: SupportedLanguage) -> String {
    format!(
        "🌐 Detected language: {}\n{}\n",
        language.display_name(),
        messages_for(language).analyzing
    )
}

pub fn render_report(report: &TriageReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule('='));
    out.push_str("\n📋 ANALYSIS REPORT\n");
    out.push_str(&rule('='));
    out.push('\n');
    out.push_str(report.body.trim());
    out.push('\n');
    out.push_str(&rule('='));
    out.push_str(&format!(
        "\nReport {} · {} · {} reference chunk(s)\n",
        report.id,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.context_chunks
    ));
    out
}

pub fn render_rejection() -> &'static str {
    "⚠️ Please describe your symptoms.\n"
}

pub fn render_failure(language: SupportedLanguage, error: &TriageError) -> String {
    format!("❌ Error: {}\n{}\n", error, messages_for(language).retry_hint)
}

pub fn render_farewell() -> &'static str {
    "\n💙 Stay healthy! Consult a doctor for any health concerns.\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lists_languages_and_exit_hint() {
        let banner = render_banner();
        assert!(banner.contains("NORTHEAST INDIA MEDICAL ASSISTANT"));
        assert!(banner.contains("অসমীয়া"));
        assert!(banner.contains("Type 'exit' to quit"));
    }

    #[test]
    fn report_is_framed_with_metadata() {
        let report = TriageReport::new(
            SupportedLanguage::Hindi,
            "\n🔍 **पहचानी गई बीमारी**: हैजा\n".to_string(),
            3,
        );
        let out = render_report(&report);
        assert!(out.contains("📋 ANALYSIS REPORT"));
        assert!(out.contains("🔍 **पहचानी गई बीमारी**: हैजा\n"));
        assert!(out.contains(&report.id.to_string()));
        assert!(out.contains("3 reference chunk(s)"));
    }

    #[test]
    fn detected_notice_is_localized() {
        let out = render_detected(SupportedLanguage::Bengali);
        assert!(out.starts_with("🌐 Detected language: Bengali\n"));
        assert!(out.contains(messages_for(SupportedLanguage::Bengali).analyzing));
    }

    #[test]
    fn failure_line_carries_error_and_localized_hint() {
        let err = TriageError::Retrieval("index offline".to_string());
        let out = render_failure(SupportedLanguage::Assamese, &err);
        assert!(out.contains("Retrieval error: index offline"));
        assert!(out.contains(messages_for(SupportedLanguage::Assamese).retry_hint));
    }
}
