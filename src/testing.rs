// Shared test doubles and fixtures for unit tests.

use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::domain::corpus::LineRecord;
use crate::domain::error::NlpError;
use crate::domain::traits::{Stemmer, StopWordSource, Tagger};
use crate::pipeline::steps::NlpToolkit;

/// Build a LineRecord from string slices.
pub fn line(words: &[&str], text: &str, document_id: &str) -> LineRecord {
    LineRecord::new(
        words.iter().map(|w| w.to_string()).collect(),
        text,
        document_id,
    )
}

/// Tags tokens from a fixed table, everything else as `NN`.
pub struct FixedTagger {
    tags: FxHashMap<String, String>,
}

impl FixedTagger {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let tags = pairs
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect();
        Self { tags }
    }
}

impl Tagger for FixedTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens
            .iter()
            .map(|t| {
                let tag = self.tags.get(t).cloned().unwrap_or_else(|| "NN".to_string());
                (t.clone(), tag)
            })
            .collect()
    }
}

/// Stop words for a single vocabulary.
pub struct MemoryStopWords {
    vocabulary: String,
    words:      FxHashSet<String>,
}

impl MemoryStopWords {
    pub fn new(vocabulary: &str, words: &[&str]) -> Self {
        Self {
            vocabulary: vocabulary.to_string(),
            words:      words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl StopWordSource for MemoryStopWords {
    fn for_vocabulary(&self, vocabulary: &str) -> Result<FxHashSet<String>, NlpError> {
        if vocabulary.eq_ignore_ascii_case(&self.vocabulary) {
            Ok(self.words.clone())
        } else {
            Err(NlpError::UnknownVocabulary(vocabulary.to_string()))
        }
    }
}

/// Cuts a trailing `s`.
pub struct TrimPluralStemmer;

impl Stemmer for TrimPluralStemmer {
    fn stem(&self, token: &str) -> String {
        token.strip_suffix('s').unwrap_or(token).to_string()
    }
}

/// Toolkit with `english` stop words {the, a, to}, `DT` for determiners
/// and the plural-trimming stemmer.
pub fn toolkit() -> NlpToolkit {
    NlpToolkit {
        tagger:     Rc::new(FixedTagger::new(&[("the", "DT"), ("a", "DT"), ("runs", "VBZ")])),
        stop_words: Rc::new(MemoryStopWords::new("english", &["the", "a", "to"])),
        stemmer:    Some(Rc::new(TrimPluralStemmer)),
    }
}
