//! Builds the instruction text sent to the generator.
//!
//! Layout: system framing, the same-language rule, nine labeled section
//! slots in canonical order, the verbatim disclaimer, then the delimited
//! `<context>` and `<symptoms>` blocks.

use super::language::SupportedLanguage;
use super::retrieve::RetrievedContext;
use super::templates::{SectionKey, templates_for};

pub const NO_CONTEXT_MARKER: &str = "(no reference material was retrieved for this query)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub language: SupportedLanguage,
    pub text: String,
}

fn section_instruction(key: SectionKey, lang: &str) -> String {
    match key {
        SectionKey::Disease => format!("[Disease Name in {lang}]"),
        SectionKey::Symptoms => format!(
            "- [Match user's described symptoms with the disease in {lang}]\n\
             - [Explain how the symptoms align in {lang}]"
        ),
        SectionKey::Description => format!("[Brief explanation of the disease in {lang}]"),
        SectionKey::Causes => format!(
            "[Main causes, especially water-related sources common in Northeast India in {lang}]"
        ),
        SectionKey::Precautions => format!("[What to do right now in {lang}]"),
        SectionKey::Prevention => format!("[Long-term prevention strategies in {lang}]"),
        SectionKey::MedicalHelp => format!(
            "[Warning signs that require immediate medical attention in {lang}]"
        ),
        SectionKey::LocalContext => format!(
            "[Specific information about this disease in Northeast Indian states in {lang}]"
        ),
        SectionKey::Disclaimer => String::new(),
    }
}

#[tracing::instrument(
    name = "pipeline_stage compose",
    skip(context, normalized_input),
    fields(
        pipeline.stage = "compose",
        compose.context_chunks = context.len(),
        compose.prompt_chars,
    )
)]
pub fn compose(
    language: SupportedLanguage,
    context: &RetrievedContext,
    normalized_input: &str,
) -> ComposedPrompt {
    let template = templates_for(language);
    let lang = language.display_name();

    let mut text = String::new();
    text.push_str(
        "You are a medical assistant specialized in water-borne diseases common in Northeast India.\n",
    );
    text.push_str(&format!(
        "The user has described symptoms in {lang}. Respond in the SAME language ({lang}).\n"
    ));
    text.push_str(&format!(
        "You MUST write the entire response in {lang}, even if the context below is in another language.\n\n"
    ));
    text.push_str(&format!(
        "**IMPORTANT**: Provide your response in the following structured format in {lang}, \
         keeping the sections in exactly this order:\n\n"
    ));

    for (key, label) in template.sections() {
        match key {
            SectionKey::Disease => {
                text.push_str(&format!("{label}: {}\n\n", section_instruction(key, lang)));
            }
            SectionKey::Disclaimer => {
                text.push_str(label);
                text.push_str("\n\n");
            }
            _ => {
                text.push_str(&format!("{label}:\n{}\n\n", section_instruction(key, lang)));
            }
        }
    }

    text.push_str("Context from medical database:\n<context>\n");
    if context.is_empty() {
        text.push_str(NO_CONTEXT_MARKER);
        text.push('\n');
    } else {
        for (i, chunk) in context.chunks().iter().enumerate() {
            text.push_str(&format!("[{}] {}\n\n", i + 1, chunk.trim()));
        }
    }
    text.push_str("</context>\n\n");

    text.push_str("User's symptoms:\n<symptoms>\n");
    text.push_str(normalized_input.trim());
    text.push_str("\n</symptoms>\n\n");

    text.push_str(&format!("Respond in {lang}:\n"));

    tracing::Span::current().record("compose.prompt_chars", text.chars().count());

    ComposedPrompt { language, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(chunks: &[&str]) -> RetrievedContext {
        RetrievedContext::new(chunks.iter().map(|c| c.to_string()).collect())
    }

    fn label_positions(prompt: &str, language: SupportedLanguage) -> Vec<usize> {
        templates_for(language)
            .sections()
            .iter()
            .map(|(key, label)| {
                prompt
                    .find(label)
                    .unwrap_or_else(|| panic!("missing label for {}", key.key()))
            })
            .collect()
    }

    #[test]
    fn labels_appear_in_canonical_order_for_every_language() {
        for language in SupportedLanguage::ALL {
            for ctx in [context(&[]), context(&["Cholera causes watery diarrhea."])] {
                let prompt = compose(language, &ctx, "fever and diarrhea");
                let positions = label_positions(&prompt.text, language);
                assert!(
                    positions.windows(2).all(|w| w[0] < w[1]),
                    "{language}: sections out of order: {positions:?}"
                );
            }
        }
    }

    #[test]
    fn disclaimer_is_embedded_verbatim() {
        let prompt = compose(SupportedLanguage::Bengali, &context(&[]), "জ্বর");
        assert!(
            prompt
                .text
                .contains(templates_for(SupportedLanguage::Bengali).disclaimer)
        );
    }

    #[test]
    fn names_the_response_language() {
        let prompt = compose(SupportedLanguage::Hindi, &context(&[]), "fever");
        assert_eq!(prompt.language, SupportedLanguage::Hindi);
        assert!(prompt.text.contains("Respond in the SAME language (Hindi)"));
        assert!(prompt.text.contains("[Disease Name in Hindi]"));
        assert!(prompt.text.trim_end().ends_with("Respond in Hindi:"));
    }

    #[test]
    fn manipuri_uses_english_labels_but_keeps_its_name() {
        let prompt = compose(SupportedLanguage::Manipuri, &context(&[]), "fever");
        assert!(prompt.text.contains("📋 **SYMPTOM ANALYSIS**"));
        assert!(prompt.text.contains("Respond in the SAME language (Manipuri)"));
    }

    #[test]
    fn empty_context_is_still_well_formed() {
        let prompt = compose(SupportedLanguage::English, &context(&[]), "fever");
        assert!(prompt.text.contains("<context>\n"));
        assert!(prompt.text.contains(NO_CONTEXT_MARKER));
        assert!(prompt.text.contains("</context>"));
        assert!(prompt.text.contains("<symptoms>\nfever\n</symptoms>"));
    }

    #[test]
    fn context_and_input_are_delimited_after_instructions() {
        let prompt = compose(
            SupportedLanguage::English,
            &context(&["Cholera: acute watery diarrhea.", "Typhoid: sustained fever."]),
            "fever ar headache",
        );
        let text = &prompt.text;
        let disclaimer = text
            .find(templates_for(SupportedLanguage::English).disclaimer)
            .unwrap();
        let ctx_start = text.find("<context>").unwrap();
        let first = text.find("[1] Cholera: acute watery diarrhea.").unwrap();
        let second = text.find("[2] Typhoid: sustained fever.").unwrap();
        let ctx_end = text.find("</context>").unwrap();
        let input = text.find("<symptoms>\nfever ar headache\n</symptoms>").unwrap();

        assert!(disclaimer < ctx_start);
        assert!(ctx_start < first && first < second && second < ctx_end);
        assert!(ctx_end < input);
        assert!(!text.contains(NO_CONTEXT_MARKER));
    }

    #[test]
    fn prompts_are_rebuilt_per_query() {
        let a = compose(SupportedLanguage::English, &context(&["A"]), "fever");
        let b = compose(SupportedLanguage::English, &context(&["B"]), "fever");
        assert_ne!(a, b);
    }
}
