// ============================================================
// Layer 2 — CommonWordsUseCase
// ============================================================
// Computes and writes the top-k common words:
//
//   Step 1: Pick the corpus                                   (app)
//             --from CKPT     → restore that checkpoint
//             --step / --all  → parse, then filter
//             neither         → the parsed corpus as is
//   Step 2: Check the criterion against that corpus's documents (app)
//   Step 3: Count words and apply the criterion               (stats)
//   Step 4: Dump the filtered index when debugging            (infra)
//   Step 5: Rank, export and write CSV + JSON                 (stats, infra)
//
// The index dump happens before ranking so it is on disk even
// when the ranking runs out of words.

use anyhow::Result;
use std::path::PathBuf;

use crate::application::config::AppConfig;
use crate::application::filter_use_case::{FilterUseCase, StepSelection};
use crate::application::parse_use_case::ParseUseCase;
use crate::domain::corpus::Corpus;
use crate::infra::report::ReportWriter;
use crate::stats::engine::{CommonWordEngine, CommonWordsReport};

/// Where the corpus for a `show` run comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSource {
    pub checkpoint: Option<String>,
    pub selection:  StepSelection,
}

/// A written report and the files it went to.
#[derive(Debug, Clone)]
pub struct ShowOutcome {
    pub report:     CommonWordsReport,
    pub csv_path:   PathBuf,
    pub json_path:  PathBuf,
    pub index_dump: Option<PathBuf>,
}

pub struct CommonWordsUseCase {
    config: AppConfig,
    parse:  ParseUseCase,
    filter: FilterUseCase,
}

impl CommonWordsUseCase {
    pub fn new(config: AppConfig) -> Result<Self> {
        let parse = ParseUseCase::new(&config)?;
        let filter = FilterUseCase::new(config.clone());
        Ok(Self::with_parts(config, parse, filter))
    }

    pub fn with_parts(config: AppConfig, parse: ParseUseCase, filter: FilterUseCase) -> Self {
        Self { config, parse, filter }
    }

    fn corpus(&self, source: &CorpusSource) -> Result<Corpus> {
        if let Some(name) = &source.checkpoint {
            return self.filter.restore(name);
        }
        let parsed = self.parse.execute(false)?;
        if source.selection.is_empty() {
            Ok(parsed)
        } else {
            self.filter.execute(parsed, &source.selection)
        }
    }

    pub fn execute(&self, source: &CorpusSource) -> Result<ShowOutcome> {
        let cfg = &self.config;
        let corpus = self.corpus(source)?;
        cfg.validate_criterion(corpus.document_count())?;

        let engine = CommonWordEngine::new(&corpus, cfg.criterion)?;
        tracing::info!(
            "{} words appear in at least {} documents",
            engine.index().len(),
            cfg.criterion
        );

        let writer = ReportWriter::new(cfg.results_path())?;
        let index_dump = if cfg.debug {
            Some(writer.write_index(engine.index())?)
        } else {
            None
        };

        let report = engine.export(cfg.top_k, &cfg.results_file_name)?;
        let csv_path = writer.write_csv(&report)?;
        let json_path = writer.write_json(&report)?;
        tracing::info!("Results written to '{}'", writer.dir().display());

        Ok(ShowOutcome { report, csv_path, json_path, index_dump })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::EngineError;
    use crate::testing::toolkit;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// "cat" in three documents, "dog" in two, "bird" in one.
    fn setup(criterion: usize, top_k: usize, debug: bool) -> (TempDir, CommonWordsUseCase) {
        let tmp = tempdir().unwrap();
        let docs = tmp.path().join("data");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("1.txt"), "cat dog\nbird\n").unwrap();
        fs::write(docs.join("2.txt"), "the cat\ndog\n").unwrap();
        fs::write(docs.join("3.txt"), "cat!\n").unwrap();

        let path = |p: &str| tmp.path().join(p).to_string_lossy().into_owned();
        let cfg = AppConfig {
            docs_dir: path("data"),
            saves_dir: path("saves"),
            results_dir: path("results"),
            criterion,
            top_k,
            debug,
            ..AppConfig::default()
        };
        let parse = ParseUseCase::new(&cfg).unwrap();
        let filter = FilterUseCase::with_toolkit(cfg.clone(), toolkit());
        (tmp, CommonWordsUseCase::with_parts(cfg, parse, filter))
    }

    #[test]
    fn test_show_writes_reports() {
        let (tmp, uc) = setup(2, 2, false);
        let out = uc.execute(&CorpusSource::default()).unwrap();

        let words: Vec<&str> = out.report.rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
        assert_eq!(out.report.rows[0].counter, 3);
        assert!(out.csv_path.ends_with("results-topk=2-criterion=2.csv"));
        assert!(out.json_path.exists());
        assert!(out.index_dump.is_none());
        assert!(!tmp.path().join("results").join("common_words.json").exists());
    }

    #[test]
    fn test_show_after_filtering() {
        let (_tmp, uc) = setup(2, 1, false);
        let source = CorpusSource {
            checkpoint: None,
            selection:  StepSelection {
                steps: vec!["filter_punctuation".into(), "filter_stop_words".into()],
                all:   false,
            },
        };
        let out = uc.execute(&source).unwrap();
        assert_eq!(out.report.rows[0].word, "cat");
        assert_eq!(
            out.report.rows[0].lines,
            vec!["cat dog", "the cat", "cat!"]
        );
    }

    #[test]
    fn test_show_from_checkpoint() {
        let (_tmp, uc) = setup(1, 1, false);
        let sel = StepSelection { steps: vec!["filter_stop_words".into()], all: false };
        uc.filter
            .execute(uc.parse.execute(false).unwrap(), &sel)
            .unwrap();

        let source = CorpusSource { checkpoint: Some("filter_stop_words".into()), ..Default::default() };
        let out = uc.execute(&source).unwrap();
        assert_eq!(out.report.rows[0].word, "cat");
    }

    #[test]
    fn test_exhausted_still_dumps_index() {
        let (tmp, uc) = setup(3, 5, true);
        let err = uc.execute(&CorpusSource::default()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<EngineError>(),
            Some(&EngineError::Exhausted { requested: 5, available: 1 })
        );
        assert!(tmp.path().join("results").join("common_words.json").exists());
    }

    #[test]
    fn test_criterion_above_document_count_is_rejected() {
        let (_tmp, uc) = setup(4, 1, false);
        let err = uc.execute(&CorpusSource::default()).unwrap_err();
        assert!(err.to_string().contains("total number of input files (3)"));
    }

    #[test]
    fn test_checkpoint_does_not_need_the_docs_dir() {
        let (tmp, uc) = setup(3, 1, false);
        let sel = StepSelection { steps: vec!["filter_punctuation".into()], all: false };
        uc.filter
            .execute(uc.parse.execute(true).unwrap(), &sel)
            .unwrap();
        fs::remove_dir_all(tmp.path().join("data")).unwrap();

        let source = CorpusSource { checkpoint: Some("filter_punctuation".into()), ..Default::default() };
        let out = uc.execute(&source).unwrap();
        assert_eq!(out.report.rows[0].word, "cat");
        assert_eq!(out.report.rows[0].documents.len(), 3);
    }

    #[test]
    fn test_criterion_is_checked_against_the_ranked_corpus() {
        let (tmp, uc) = setup(4, 1, false);
        let sel = StepSelection { steps: vec!["filter_punctuation".into()], all: false };
        uc.filter
            .execute(uc.parse.execute(true).unwrap(), &sel)
            .unwrap();
        fs::write(tmp.path().join("data").join("4.txt"), "cat\n").unwrap();

        let source = CorpusSource { checkpoint: Some("filter_punctuation".into()), ..Default::default() };
        let err = uc.execute(&source).unwrap_err();
        assert!(err.to_string().contains("total number of input files (3)"));
    }
}
