//! Rewrites informal and transliterated symptom phrases into canonical
//! English terms.
//!
//! Rules run in declaration order over the progressively rewritten string,
//! so a rule may match text produced by an earlier one. `pet cholova` is
//! rewritten to `loose motion` after the `loose motion` rule has already
//! run, which is why it survives as `loose motion` rather than `diarrhea`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFamily {
    Hindi,
    Assamese,
    Bengali,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRule {
    pub family: SourceFamily,
    pub informal: &'static str,
    pub canonical: &'static str,
}

const fn rule(family: SourceFamily, informal: &'static str, canonical: &'static str) -> TermRule {
    TermRule {
        family,
        informal,
        canonical,
    }
}

pub static TERM_RULES: &[TermRule] = &[
    rule(SourceFamily::Hindi, "bukhar", "fever"),
    rule(SourceFamily::Hindi, "sir dard", "headache"),
    rule(SourceFamily::Hindi, "pet dard", "stomach pain"),
    rule(SourceFamily::Hindi, "ulti", "vomiting"),
    rule(SourceFamily::Hindi, "kamzori", "weakness"),
    rule(SourceFamily::Hindi, "loose motion", "diarrhea"),
    rule(SourceFamily::Assamese, "jor", "fever"),
    rule(SourceFamily::Assamese, "matha byatha", "headache"),
    rule(SourceFamily::Assamese, "pet byatha", "stomach pain"),
    rule(SourceFamily::Assamese, "boroni", "vomiting"),
    rule(SourceFamily::Assamese, "pet cholova", "loose motion"),
    rule(SourceFamily::Bengali, "jvoor", "fever"),
    rule(SourceFamily::Bengali, "matha betha", "headache"),
    rule(SourceFamily::Bengali, "pete betha", "stomach pain"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Rules that rewrote at least one occurrence, in application order.
    pub matched: Vec<&'static TermRule>,
}

impl Normalized {
    pub fn families(&self) -> Vec<SourceFamily> {
        let mut families = Vec::new();
        for rule in &self.matched {
            if !families.contains(&rule.family) {
                families.push(rule.family);
            }
        }
        families
    }
}

pub fn normalize(text: &str) -> String {
    normalize_detailed(text).text
}

pub fn normalize_detailed(text: &str) -> Normalized {
    let mut text = text.to_lowercase();
    let mut matched = Vec::new();

    for rule in TERM_RULES {
        if text.contains(rule.informal) {
            text = text.replace(rule.informal, rule.canonical);
            matched.push(rule);
        }
    }

    Normalized { text, matched }
}
