// ============================================================
// Layer 5 — Stop-Word Lists
// ============================================================
// Default StopWordSource backed by the stop-words crate.
// Vocabularies are addressed by English name (english, german,
// ...) or ISO 639-1 code, case-insensitively.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::domain::error::NlpError;
use crate::domain::traits::StopWordSource;

/// Stop words shipped with the `stop-words` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStopWords;

impl BuiltinStopWords {
    pub fn new() -> Self {
        Self
    }

    /// Map a vocabulary name onto the crate's language enum
    fn language(vocabulary: &str) -> Option<LANGUAGE> {
        let lang = match vocabulary.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}

impl StopWordSource for BuiltinStopWords {
    fn for_vocabulary(&self, vocabulary: &str) -> Result<FxHashSet<String>, NlpError> {
        let lang = Self::language(vocabulary)
            .ok_or_else(|| NlpError::UnknownVocabulary(vocabulary.to_string()))?;

        let words: FxHashSet<String> = get(lang).iter().map(|s| s.to_lowercase()).collect();
        tracing::debug!("Loaded {} stop words for '{}'", words.len(), vocabulary);
        Ok(words)
    }
}
