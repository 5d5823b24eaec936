// ============================================================
// Layer 4 — Unicode Tokenizer
// ============================================================
// Default Tokenizer adapter built on UAX #29 segmentation:
//
//   line ──split_sentence_bounds──▶ sentences
//   sentence ──split_word_bounds──▶ tokens (whitespace dropped)
//
// Punctuation and symbols come out as their own tokens, so
// "traveled," becomes ["traveled", ","] and "today$" becomes
// ["today", "$"]. Contractions stay whole ("who've").

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::traits::Tokenizer;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        Self
    }

    fn words(sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|piece| !piece.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn split(&self, line: &str) -> Vec<(Vec<String>, String)> {
        line.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| (Self::words(sentence), sentence.to_string()))
            .collect()
    }
}
