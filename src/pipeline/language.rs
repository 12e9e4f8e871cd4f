//! Heuristic language detection for symptom descriptions.
//!
//! Classification is script based: the Bengali block covers both Bengali and
//! Assamese, so a small set of Bengali function words decides between the
//! two. Short inputs without any of those words land on Assamese.

use std::fmt;
use std::str::FromStr;

const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';
const DEVANAGARI_BLOCK: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Common Bengali function words that Assamese writes differently.
const BENGALI_KEYWORDS: &[&str] = &[
    "\u{0986}\u{09AE}\u{09BF}",             // আমি
    "\u{0986}\u{09AE}\u{09BE}\u{09B0}",     // আমার
    "\u{0995}\u{09B0}\u{09BE}",             // করা
    "\u{09B9}\u{09AF}\u{09BC}",             // হয় (decomposed)
    "\u{09B9}\u{09DF}",                     // হয় (precomposed)
    "\u{0986}\u{099B}\u{09C7}",             // আছে
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLanguage {
    English,
    Hindi,
    Assamese,
    Bengali,
    Manipuri,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 5] = [
        SupportedLanguage::English,
        SupportedLanguage::Hindi,
        SupportedLanguage::Assamese,
        SupportedLanguage::Bengali,
        SupportedLanguage::Manipuri,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            SupportedLanguage::English => "english",
            SupportedLanguage::Hindi => "hindi",
            SupportedLanguage::Assamese => "assamese",
            SupportedLanguage::Bengali => "bengali",
            SupportedLanguage::Manipuri => "manipuri",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SupportedLanguage::English => "English",
            SupportedLanguage::Hindi => "Hindi",
            SupportedLanguage::Assamese => "Assamese",
            SupportedLanguage::Bengali => "Bengali",
            SupportedLanguage::Manipuri => "Manipuri",
        }
    }

    /// ISO 639 code.
    pub fn code(self) -> &'static str {
        match self {
            SupportedLanguage::English => "en",
            SupportedLanguage::Hindi => "hi",
            SupportedLanguage::Assamese => "as",
            SupportedLanguage::Bengali => "bn",
            SupportedLanguage::Manipuri => "mni",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for SupportedLanguage {
    type Err = UnknownLanguage;

    /// Accepts either the lowercase tag or the ISO code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SupportedLanguage::ALL
            .into_iter()
            .find(|lang| lang.tag() == needle || lang.code() == needle)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Classify `text` into one of the supported languages.
///
/// Priority: Bengali script (then keyword check), Devanagari, English.
/// Never fails; empty or ASCII-only input is English.
pub fn detect(text: &str) -> SupportedLanguage {
    if text.chars().any(|c| BENGALI_BLOCK.contains(&c)) {
        let lower = text.to_lowercase();
        if BENGALI_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return SupportedLanguage::Bengali;
        }
        return SupportedLanguage::Assamese;
    }

    if text.chars().any(|c| DEVANAGARI_BLOCK.contains(&c)) {
        return SupportedLanguage::Hindi;
    }

    SupportedLanguage::English
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_text_is_hindi() {
        assert_eq!(detect("मुझे बुखार है"), SupportedLanguage::Hindi);
        assert_eq!(detect("सिरदर्द"), SupportedLanguage::Hindi);
    }

    #[test]
    fn bengali_script_with_keyword_is_bengali() {
        assert_eq!(detect("আমার জ্বর আছে"), SupportedLanguage::Bengali);
        assert_eq!(detect("আমি অসুস্থ"), SupportedLanguage::Bengali);
    }

    #[test]
    fn both_forms_of_hoy_count_as_keyword() {
        assert_eq!(detect("মাথা ব্যথা \u{09B9}\u{09AF}\u{09BC}"), SupportedLanguage::Bengali);
        assert_eq!(detect("মাথা ব্যথা \u{09B9}\u{09DF}"), SupportedLanguage::Bengali);
    }

    #[test]
    fn bengali_script_without_keyword_is_assamese() {
        assert_eq!(detect("মোৰ জ্বৰ"), SupportedLanguage::Assamese);
        assert_eq!(detect("জ্বৰ"), SupportedLanguage::Assamese);
    }

    #[test]
    fn bengali_script_wins_over_devanagari() {
        assert_eq!(detect("बुखार জ্বৰ"), SupportedLanguage::Assamese);
    }

    #[test]
    fn everything_else_is_english() {
        assert_eq!(detect(""), SupportedLanguage::English);
        assert_eq!(detect("   "), SupportedLanguage::English);
        assert_eq!(detect("I have a fever and headache"), SupportedLanguage::English);
        assert_eq!(detect("fièvre 39°C"), SupportedLanguage::English);
    }

    #[test]
    fn romanized_hindi_has_no_script_signal() {
        // Transliterated input carries no script signal; the normalizer still
        // rewrites its symptom terms.
        assert_eq!(detect("mujhe bukhar aur sir dard hai"), SupportedLanguage::English);
        assert_eq!(detect("मुझे बुखार और सिर दर्द है"), SupportedLanguage::Hindi);
    }

    #[test]
    fn parse_accepts_tags_and_codes() {
        assert_eq!("hindi".parse::<SupportedLanguage>(), Ok(SupportedLanguage::Hindi));
        assert_eq!(" Bengali ".parse::<SupportedLanguage>(), Ok(SupportedLanguage::Bengali));
        assert_eq!("mni".parse::<SupportedLanguage>(), Ok(SupportedLanguage::Manipuri));
        assert_eq!("as".parse::<SupportedLanguage>(), Ok(SupportedLanguage::Assamese));
        assert!("klingon".parse::<SupportedLanguage>().is_err());
    }

    #[test]
    fn tags_round_trip_through_parse() {
        for lang in SupportedLanguage::ALL {
            assert_eq!(lang.tag().parse::<SupportedLanguage>(), Ok(lang));
            assert_eq!(lang.code().parse::<SupportedLanguage>(), Ok(lang));
        }
    }
}
