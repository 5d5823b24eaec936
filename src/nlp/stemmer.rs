// ============================================================
// Layer 5 — Snowball Stemmer
// ============================================================
// Default Stemmer backed by rust-stemmers.
//
// The `stemmer` setting picks the algorithm:
//   auto            → the vocabulary's algorithm (english = Porter2)
//   porter          → English Porter2
//   <language>      → that language's Snowball algorithm
// Anything else, lancaster included, has no stemmer here.

use rust_stemmers::Algorithm;

use crate::domain::error::NlpError;
use crate::domain::traits::Stemmer;

pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
    name:  String,
}

/// Setting value that follows the vocabulary
pub const AUTO_STEMMER: &str = "auto";

fn algorithm_for(name: &str) -> Option<Algorithm> {
    let algorithm = match name {
        "en" | "english" => Algorithm::English,
        "de" | "german" => Algorithm::German,
        "fr" | "french" => Algorithm::French,
        "es" | "spanish" => Algorithm::Spanish,
        "it" | "italian" => Algorithm::Italian,
        "pt" | "portuguese" => Algorithm::Portuguese,
        "nl" | "dutch" => Algorithm::Dutch,
        "ru" | "russian" => Algorithm::Russian,
        "sv" | "swedish" => Algorithm::Swedish,
        "no" | "norwegian" => Algorithm::Norwegian,
        "da" | "danish" => Algorithm::Danish,
        "fi" | "finnish" => Algorithm::Finnish,
        "hu" | "hungarian" => Algorithm::Hungarian,
        "ro" | "romanian" => Algorithm::Romanian,
        "tr" | "turkish" => Algorithm::Turkish,
        "ar" | "arabic" => Algorithm::Arabic,
        "el" | "greek" => Algorithm::Greek,
        _ => return None,
    };
    Some(algorithm)
}

impl SnowballStemmer {
    /// Build the stemmer for a vocabulary name or ISO 639-1 code.
    pub fn for_vocabulary(vocabulary: &str) -> Result<Self, NlpError> {
        let algorithm = algorithm_for(vocabulary.trim().to_lowercase().as_str())
            .ok_or_else(|| NlpError::NoStemmer(vocabulary.to_string()))?;
        Ok(Self::create(algorithm, vocabulary))
    }

    /// Build the stemmer named by the `stemmer` setting, falling back to
    /// the vocabulary's algorithm for `auto`.
    pub fn from_setting(stemmer: &str, vocabulary: &str) -> Result<Self, NlpError> {
        let name = stemmer.trim().to_lowercase();
        if name.is_empty() || name == AUTO_STEMMER {
            return Self::for_vocabulary(vocabulary);
        }
        let algorithm = match name.as_str() {
            "porter" | "porter2" => Some(Algorithm::English),
            other => algorithm_for(other),
        }
        .ok_or_else(|| NlpError::UnknownStemmer(stemmer.to_string()))?;
        Ok(Self::create(algorithm, stemmer))
    }

    fn create(algorithm: Algorithm, name: &str) -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
            name:  name.to_string(),
        }
    }

    /// The setting or vocabulary this stemmer was built from
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}
