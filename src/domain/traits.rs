// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Capabilities the host application injects. The pipeline and
// the corpus builder only ever see these traits, never the
// concrete adapters in `data` and `nlp`.
//
//   DocumentSource — where documents come from
//   Tokenizer      — line → sentences → word tokens
//   Tagger         — word tokens → (token, POS tag)
//   StopWordSource — vocabulary name → stop-word set
//   Stemmer        — token → stem

use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::domain::document::Document;
use crate::domain::error::NlpError;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can load documents from a source.
///
/// Implementations:
///   - TextLoader → loads every .txt file of a directory
pub trait DocumentSource {
    /// Load all available documents from this source.
    fn load_all(&self) -> Result<Vec<Document>>;

    /// How many documents `load_all` would return, without reading them.
    fn count(&self) -> Result<usize>;
}

// ─── Tokenizer ────────────────────────────────────────────────────────────────
/// Splits one input line into sentences and each sentence into tokens.
pub trait Tokenizer {
    /// Returns one `(tokens, sentence_text)` pair per sentence.
    /// An empty line yields no pairs.
    fn split(&self, line: &str) -> Vec<(Vec<String>, String)>;
}

// ─── Tagger ───────────────────────────────────────────────────────────────────
/// Part-of-speech tagger over an already tokenized sentence.
pub trait Tagger {
    /// Returns one `(token, tag)` pair per input token, in order.
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

// ─── StopWordSource ───────────────────────────────────────────────────────────
/// Supplies the stop-word set of a vocabulary (language).
pub trait StopWordSource {
    /// Lowercase stop words for `vocabulary`.
    ///
    /// Fails with [`NlpError::UnknownVocabulary`] when no list exists.
    fn for_vocabulary(&self, vocabulary: &str) -> Result<FxHashSet<String>, NlpError>;
}

// ─── Stemmer ──────────────────────────────────────────────────────────────────
pub trait Stemmer {
    fn stem(&self, token: &str) -> String;
}
