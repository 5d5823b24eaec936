// ============================================================
// Layer 2 — FilterUseCase
// ============================================================
// Wires the default NLP adapters into a FilterPipeline and runs
// it, or lists and restores the checkpoints a run left behind.
//
//   --step NAME ...  → those steps, in the order given
//   --all            → punctuation, stop words, tags
//   neither          → empty pipeline, which is an error

use anyhow::{Context, Result};
use std::rc::Rc;

use crate::application::config::AppConfig;
use crate::domain::corpus::Corpus;
use crate::domain::traits::Stemmer;
use crate::infra::checkpoint::CheckpointStore;
use crate::nlp::{stemmer::SnowballStemmer, stopwords::BuiltinStopWords, tagger::SuffixTagger};
use crate::pipeline::runner::FilterPipeline;
use crate::pipeline::steps::NlpToolkit;

/// Which steps a filter run should use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSelection {
    pub steps: Vec<String>,
    /// Replace `steps` with the default punctuation, stop-word, tag chain
    pub all:   bool,
}

impl StepSelection {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && !self.all
    }
}

pub struct FilterUseCase {
    config:  AppConfig,
    toolkit: NlpToolkit,
}

impl FilterUseCase {
    pub fn new(config: AppConfig) -> Self {
        let toolkit = default_toolkit(&config.vocabulary, &config.stemmer);
        Self::with_toolkit(config, toolkit)
    }

    pub fn with_toolkit(config: AppConfig, toolkit: NlpToolkit) -> Self {
        Self { config, toolkit }
    }

    fn store(&self) -> Result<CheckpointStore> {
        CheckpointStore::new(self.config.saves_path()).context("Cannot open the saves directory")
    }

    /// A pipeline over `corpus` with the selected steps added.
    pub fn pipeline(&self, corpus: Corpus, selection: &StepSelection) -> Result<FilterPipeline> {
        let mut pipeline = FilterPipeline::new(
            corpus,
            self.config.filter_options(),
            self.toolkit.clone(),
            self.store()?,
        )
        .with_checkpointing(self.config.checkpointing);

        if selection.all {
            pipeline.add_default_steps()?;
        } else {
            for name in &selection.steps {
                pipeline.add_step_named(name)?;
            }
        }
        Ok(pipeline)
    }

    /// Run the selected steps over `corpus` and return the result.
    pub fn execute(&self, corpus: Corpus, selection: &StepSelection) -> Result<Corpus> {
        let mut pipeline = self.pipeline(corpus, selection)?;
        tracing::info!("Running filter steps: {}", pipeline.step_names().join(", "));
        pipeline.apply()?;
        Ok(pipeline.into_corpus())
    }

    pub fn checkpoints(&self) -> Result<Vec<String>> {
        Ok(self.store()?.list()?)
    }

    /// The corpus saved under `name`.
    pub fn restore(&self, name: &str) -> Result<Corpus> {
        let mut pipeline = self.pipeline(Corpus::default(), &StepSelection::default())?;
        pipeline
            .restore(name)
            .with_context(|| format!("Cannot restore checkpoint '{name}'"))?;
        Ok(pipeline.into_corpus())
    }
}

/// Builtin stop words, the suffix tagger and, when the stemmer setting
/// resolves to one, a Snowball stemmer.
pub fn default_toolkit(vocabulary: &str, stemmer: &str) -> NlpToolkit {
    let stemmer = match SnowballStemmer::from_setting(stemmer, vocabulary) {
        Ok(stemmer) => Some(Rc::new(stemmer) as Rc<dyn Stemmer>),
        Err(e) => {
            tracing::debug!("{}; filter_stem is unavailable", e);
            None
        }
    };
    NlpToolkit {
        tagger:     Rc::new(SuffixTagger::new()),
        stop_words: Rc::new(BuiltinStopWords::new()),
        stemmer,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{CheckpointError, PipelineError};
    use crate::testing::{line, toolkit};
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, FilterUseCase) {
        let tmp = tempdir().unwrap();
        let cfg = AppConfig {
            saves_dir: tmp.path().join("saves").to_string_lossy().into_owned(),
            ..AppConfig::default()
        };
        (tmp, FilterUseCase::with_toolkit(cfg, toolkit()))
    }

    fn corpus() -> Corpus {
        Corpus::from(vec![line(&["The", "dogs", ",", "bark"], "The dogs, bark", "d1.txt")])
    }

    fn selection(steps: &[&str]) -> StepSelection {
        StepSelection {
            steps: steps.iter().map(|s| s.to_string()).collect(),
            all:   false,
        }
    }

    #[test]
    fn test_named_steps_run_in_given_order() {
        let (_tmp, uc) = setup();
        let out = uc
            .execute(corpus(), &selection(&["filter_stem", "filter_punctuation"]))
            .unwrap();
        assert_eq!(out.lines()[0].words(), ["The", "dog", "bark"]);
        assert_eq!(uc.checkpoints().unwrap(), vec!["filter_punctuation", "filter_stem"]);
    }

    #[test]
    fn test_all_uses_default_chain() {
        let (_tmp, uc) = setup();
        let sel = StepSelection { steps: vec!["filter_stem".into()], all: true };
        let pipeline = uc.pipeline(corpus(), &sel).unwrap();
        assert_eq!(
            pipeline.step_names(),
            vec!["filter_punctuation", "filter_stop_words", "filter_by_tag"]
        );
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let (_tmp, uc) = setup();
        let err = uc.execute(corpus(), &StepSelection::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::PipelineEmpty)
        ));
    }

    #[test]
    fn test_restore_after_run() {
        let (_tmp, uc) = setup();
        uc.execute(corpus(), &selection(&["filter_punctuation", "filter_stop_words"]))
            .unwrap();

        let restored = uc.restore("filter_punctuation").unwrap();
        assert_eq!(restored.lines()[0].words(), ["The", "dogs", "bark"]);

        let err = uc.restore("filter_by_tag").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Checkpoint(CheckpointError::NotFound(_)))
        ));
    }

    #[test]
    fn test_default_toolkit_stemmer_depends_on_settings() {
        assert!(default_toolkit("english", "auto").stemmer.is_some());
        assert!(default_toolkit("klingon", "auto").stemmer.is_none());
        assert!(default_toolkit("klingon", "porter").stemmer.is_some());
        assert!(default_toolkit("english", "lancaster").stemmer.is_none());
    }

    #[test]
    fn test_stemmer_setting_reaches_filter_stem() {
        let tmp = tempdir().unwrap();
        let cfg = AppConfig {
            saves_dir: tmp.path().join("saves").to_string_lossy().into_owned(),
            vocabulary: "klingon".into(),
            stemmer: "porter".into(),
            checkpointing: false,
            ..AppConfig::default()
        };
        let uc = FilterUseCase::new(cfg);
        let out = uc
            .execute(
                Corpus::from(vec![line(&["citizens"], "citizens", "d1.txt")]),
                &selection(&["filter_stem"]),
            )
            .unwrap();
        assert_eq!(out.lines()[0].words(), ["citizen"]);
    }
}
