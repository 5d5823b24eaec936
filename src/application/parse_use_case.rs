// ============================================================
// Layer 2 — ParseUseCase
// ============================================================
// Turns the documents directory into a token corpus:
//
//   Step 1: Reuse <saves>/extracted_tokens.json if present   (infra)
//   Step 2: Otherwise load every .txt document                (data)
//   Step 3: Clean, split and tokenize each line               (data)
//   Step 4: Cache the corpus for the next run                 (infra)
//
// Also answers `info`: how many documents, records and tokens.

use anyhow::{Context, Result};
use std::rc::Rc;

use crate::application::config::AppConfig;
use crate::data::{corpus_builder::CorpusBuilder, loader::TextLoader, tokenizer::UnicodeTokenizer};
use crate::domain::corpus::Corpus;
use crate::domain::traits::{DocumentSource, Tokenizer};
use crate::infra::checkpoint::CheckpointStore;

/// Size of the input and of the parsed corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusInfo {
    pub documents: usize,
    pub records:   usize,
    pub tokens:    usize,
}

pub struct ParseUseCase {
    source:    Box<dyn DocumentSource>,
    tokenizer: Rc<dyn Tokenizer>,
    store:     CheckpointStore,
}

impl ParseUseCase {
    /// Reads `.txt` files from `docs_dir` and caches in `saves_dir`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_parts(
            config,
            Box::new(TextLoader::new(config.docs_path())),
            Rc::new(UnicodeTokenizer::new()),
        )
    }

    pub fn with_parts(
        config: &AppConfig,
        source: Box<dyn DocumentSource>,
        tokenizer: Rc<dyn Tokenizer>,
    ) -> Result<Self> {
        let store = CheckpointStore::new(config.saves_path())
            .context("Cannot open the saves directory")?;
        Ok(Self { source, tokenizer, store })
    }

    /// The parsed corpus, from cache unless `reparse` is set.
    pub fn execute(&self, reparse: bool) -> Result<Corpus> {
        if !reparse {
            if let Some(corpus) = self.store.load_cache()? {
                tracing::info!(
                    "Using cached tokens from '{}' ({} lines)",
                    self.store.dir().display(),
                    corpus.len()
                );
                return Ok(corpus);
            }
        }

        let docs = self.source.load_all()?;
        let corpus = CorpusBuilder::new(Rc::clone(&self.tokenizer)).build(&docs);

        let path = self.store.save_cache(&corpus)?;
        tracing::debug!("Cached tokens at '{}'", path.display());
        Ok(corpus)
    }

    /// Number of input documents, without parsing them.
    pub fn document_count(&self) -> Result<usize> {
        self.source.count()
    }

    pub fn info(&self) -> Result<CorpusInfo> {
        let corpus = self.execute(false)?;
        Ok(CorpusInfo {
            documents: self.document_count()?,
            records:   corpus.len(),
            tokens:    corpus.token_count(),
        })
    }
}
