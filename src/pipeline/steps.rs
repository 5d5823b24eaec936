// ============================================================
// Layer 4 — Filter Steps
// ============================================================
// The built-in steps. Each one rewrites the word list of every
// record in place:
//
//   filter_punctuation  keep purely alphabetic tokens
//   filter_duplicates   keep the first sighting in each record
//   filter_stop_words   drop stop words of the vocabulary
//   filter_by_tag       keep tokens whose tag is selected
//   filter_stem         replace tokens with their stems
//
// Records are never dropped or reordered, and text and document
// id are never touched. A failing step fails before it writes.

use std::collections::BTreeSet;
use std::rc::Rc;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::domain::corpus::Corpus;
use crate::domain::error::{NlpError, PipelineError};
use crate::domain::traits::{Stemmer, StopWordSource, Tagger};

/// Options every step receives. Steps ignore what they do not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Stop-word vocabulary name, e.g. `english` or `en`
    pub vocabulary: String,
    /// Part-of-speech tags kept by [`TagFilter`]
    pub tags:       BTreeSet<String>,
}

impl FilterOptions {
    pub fn new(vocabulary: impl Into<String>, tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            tags:       tags.into_iter().collect(),
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::new("english", ["NN".to_string(), "NNS".to_string()])
    }
}

/// The NLP capabilities the built-in steps are constructed from.
#[derive(Clone)]
pub struct NlpToolkit {
    pub tagger:     Rc<dyn Tagger>,
    pub stop_words: Rc<dyn StopWordSource>,
    /// `None` when the stemmer setting resolves to no algorithm
    pub stemmer:    Option<Rc<dyn Stemmer>>,
}

/// One named transformation of the corpus.
///
/// `name` doubles as the checkpoint name, so it must be non-empty and use
/// only ASCII letters, digits, `_` and `-`.
pub trait FilterStep {
    fn name(&self) -> &str;

    fn apply(&self, corpus: &mut Corpus, options: &FilterOptions) -> Result<(), NlpError>;
}

// ─── Punctuation ─────────────────────────────────────────────────────────────

/// Keeps tokens made only of alphabetic characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationFilter;

impl FilterStep for PunctuationFilter {
    fn name(&self) -> &str {
        StepKind::Punctuation.name()
    }

    fn apply(&self, corpus: &mut Corpus, _options: &FilterOptions) -> Result<(), NlpError> {
        for record in corpus.iter_mut() {
            let mut words = record.take_words();
            words.retain(|w| is_alphabetic(w));
            record.set_words(words);
        }
        Ok(())
    }
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

// ─── Duplicates ──────────────────────────────────────────────────────────────

/// Keeps the first occurrence of each token within a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateFilter;

impl FilterStep for DuplicateFilter {
    fn name(&self) -> &str {
        StepKind::Duplicates.name()
    }

    fn apply(&self, corpus: &mut Corpus, _options: &FilterOptions) -> Result<(), NlpError> {
        for record in corpus.iter_mut() {
            let mut seen = FxHashSet::default();
            let mut words = record.take_words();
            words.retain(|w| seen.insert(w.clone()));
            record.set_words(words);
        }
        Ok(())
    }
}

// ─── Stop words ──────────────────────────────────────────────────────────────

/// Drops tokens whose lowercase form is a stop word of the vocabulary.
pub struct StopWordFilter {
    source: Rc<dyn StopWordSource>,
}

impl StopWordFilter {
    pub fn new(source: Rc<dyn StopWordSource>) -> Self {
        Self { source }
    }
}

impl FilterStep for StopWordFilter {
    fn name(&self) -> &str {
        StepKind::StopWords.name()
    }

    fn apply(&self, corpus: &mut Corpus, options: &FilterOptions) -> Result<(), NlpError> {
        let stop_words = self.source.for_vocabulary(&options.vocabulary)?;
        tracing::debug!(
            "{} stop words for vocabulary '{}'",
            stop_words.len(),
            options.vocabulary
        );

        for record in corpus.iter_mut() {
            let mut words = record.take_words();
            words.retain(|w| !stop_words.contains(&w.to_lowercase()));
            record.set_words(words);
        }
        Ok(())
    }
}

// ─── Tags ────────────────────────────────────────────────────────────────────

/// Keeps tokens whose part-of-speech tag is in `options.tags`.
///
/// The tagger sees the whole record at once, so context-sensitive taggers
/// can use neighbouring tokens.
pub struct TagFilter {
    tagger: Rc<dyn Tagger>,
}

impl TagFilter {
    pub fn new(tagger: Rc<dyn Tagger>) -> Self {
        Self { tagger }
    }
}

impl FilterStep for TagFilter {
    fn name(&self) -> &str {
        StepKind::Tags.name()
    }

    fn apply(&self, corpus: &mut Corpus, options: &FilterOptions) -> Result<(), NlpError> {
        for record in corpus.iter_mut() {
            if record.words().is_empty() {
                continue;
            }
            let kept = self
                .tagger
                .tag(record.words())
                .into_iter()
                .filter(|(_, tag)| options.tags.contains(tag))
                .map(|(word, _)| word)
                .collect();
            record.set_words(kept);
        }
        Ok(())
    }
}

// ─── Stemming ────────────────────────────────────────────────────────────────

/// Replaces each token with its stem.
pub struct StemFilter {
    stemmer: Rc<dyn Stemmer>,
}

impl StemFilter {
    pub fn new(stemmer: Rc<dyn Stemmer>) -> Self {
        Self { stemmer }
    }
}

impl FilterStep for StemFilter {
    fn name(&self) -> &str {
        StepKind::Stem.name()
    }

    fn apply(&self, corpus: &mut Corpus, _options: &FilterOptions) -> Result<(), NlpError> {
        for record in corpus.iter_mut() {
            let stems = record.words().iter().map(|w| self.stemmer.stem(w)).collect();
            record.set_words(stems);
        }
        Ok(())
    }
}

// ─── Step names ──────────────────────────────────────────────────────────────

/// The built-in steps, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Punctuation,
    Duplicates,
    StopWords,
    Tags,
    Stem,
}

impl StepKind {
    pub const ALL: [StepKind; 5] = [
        StepKind::Punctuation,
        StepKind::Duplicates,
        StepKind::StopWords,
        StepKind::Tags,
        StepKind::Stem,
    ];

    /// Punctuation, then stop words, then tags.
    pub const DEFAULTS: [StepKind; 3] = [StepKind::Punctuation, StepKind::StopWords, StepKind::Tags];

    pub fn name(self) -> &'static str {
        match self {
            StepKind::Punctuation => "filter_punctuation",
            StepKind::Duplicates => "filter_duplicates",
            StepKind::StopWords => "filter_stop_words",
            StepKind::Tags => "filter_by_tag",
            StepKind::Stem => "filter_stem",
        }
    }

    /// Instantiate the step with the capabilities it needs.
    pub fn build(self, toolkit: &NlpToolkit) -> Result<Box<dyn FilterStep>, PipelineError> {
        let step: Box<dyn FilterStep> = match self {
            StepKind::Punctuation => Box::new(PunctuationFilter),
            StepKind::Duplicates => Box::new(DuplicateFilter),
            StepKind::StopWords => Box::new(StopWordFilter::new(Rc::clone(&toolkit.stop_words))),
            StepKind::Tags => Box::new(TagFilter::new(Rc::clone(&toolkit.tagger))),
            StepKind::Stem => match &toolkit.stemmer {
                Some(stemmer) => Box::new(StemFilter::new(Rc::clone(stemmer))),
                None => {
                    return Err(PipelineError::InvalidStep {
                        name:   self.name().to_string(),
                        reason: "no stemmer is available for the configured settings",
                    })
                }
            },
        };
        Ok(step)
    }
}

impl FromStr for StepKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PipelineError::InvalidStep {
                name:   s.to_string(),
                reason: "not a built-in filter step",
            })
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
