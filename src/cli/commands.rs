// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Global settings flags plus one subcommand per workflow.
//
// Settings flags are all optional. Whatever is given overrides
// the defaults and the --config file; whatever is left out
// keeps their value.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::common_words_use_case::CorpusSource;
use crate::application::config::AppConfig;
use crate::application::filter_use_case::StepSelection;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the documents into tokens and cache them
    Parse(ParseArgs),

    /// Show how many documents, lines and tokens there are
    Info,

    /// Print the effective settings
    Settings,

    /// Run filter steps over the parsed corpus, checkpointing each one
    Filter(FilterArgs),

    /// List the available checkpoints
    Checkpoints,

    /// Compute the top-k common words and write the report files
    Show(ShowArgs),
}

/// Settings shared by every command
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// JSON file with settings; flags given here override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory with the .txt documents
    #[arg(long, global = true)]
    pub docs_dir: Option<String>,

    /// Directory for checkpoints, the token cache and settings.json
    #[arg(long, global = true)]
    pub saves_dir: Option<String>,

    /// Directory for the report files
    #[arg(long, global = true)]
    pub results_dir: Option<String>,

    /// Stop-word and stemmer vocabulary, e.g. english or en
    #[arg(long, global = true)]
    pub vocabulary: Option<String>,

    /// Part-of-speech tags kept by filter_by_tag, comma separated
    #[arg(long, global = true, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Stemmer for filter_stem: auto, porter or a Snowball language
    #[arg(long, global = true)]
    pub stemmer: Option<String>,

    /// Minimum number of documents a common word must appear in
    #[arg(long, global = true)]
    pub criterion: Option<usize>,

    /// How many common words to report
    #[arg(long, global = true)]
    pub top_k: Option<usize>,

    /// Base name of the report files
    #[arg(long = "results-name", global = true)]
    pub results_file_name: Option<String>,

    /// Do not write a checkpoint after each filter step
    #[arg(long, global = true)]
    pub no_checkpoints: bool,

    /// Also dump every common word to common_words.json
    #[arg(long, global = true)]
    pub debug: bool,
}

impl SettingsArgs {
    /// Defaults, then the --config file, then the flags.
    pub fn resolve(&self) -> anyhow::Result<AppConfig> {
        let mut cfg = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(v) = &self.docs_dir {
            cfg.docs_dir = v.clone();
        }
        if let Some(v) = &self.saves_dir {
            cfg.saves_dir = v.clone();
        }
        if let Some(v) = &self.results_dir {
            cfg.results_dir = v.clone();
        }
        if let Some(v) = &self.vocabulary {
            cfg.vocabulary = v.clone();
        }
        if let Some(v) = &self.tags {
            cfg.tags = v.clone();
        }
        if let Some(v) = &self.stemmer {
            cfg.stemmer = v.clone();
        }
        if let Some(v) = self.criterion {
            cfg.criterion = v;
        }
        if let Some(v) = self.top_k {
            cfg.top_k = v;
        }
        if let Some(v) = &self.results_file_name {
            cfg.results_file_name = v.clone();
        }
        if self.no_checkpoints {
            cfg.checkpointing = false;
        }
        if self.debug {
            cfg.debug = true;
        }
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Ignore the token cache and parse the documents again
    #[arg(long)]
    pub reparse: bool,
}

/// Which filter steps to run
#[derive(Args, Debug, Default)]
pub struct StepArgs {
    /// A filter step to run; repeat for more, they run in order.
    /// One of filter_punctuation, filter_duplicates,
    /// filter_stop_words, filter_by_tag, filter_stem
    #[arg(long = "step")]
    pub steps: Vec<String>,

    /// Run punctuation, stop-word and tag filtering
    #[arg(long)]
    pub all: bool,
}

impl From<StepArgs> for StepSelection {
    fn from(a: StepArgs) -> Self {
        StepSelection { steps: a.steps, all: a.all }
    }
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    #[command(flatten)]
    pub steps: StepArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Start from this checkpoint instead of the parsed corpus
    #[arg(long = "from", conflicts_with_all = ["steps", "all"])]
    pub from: Option<String>,

    #[command(flatten)]
    pub steps: StepArgs,
}

impl From<ShowArgs> for CorpusSource {
    fn from(a: ShowArgs) -> Self {
        CorpusSource {
            checkpoint: a.from,
            selection:  a.steps.into(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "hashtag", "--criterion", "2", "--tags", "NN,VB", "--no-checkpoints",
            "--stemmer", "porter", "info",
        ])
        .unwrap();
        let cfg = cli.settings.resolve().unwrap();
        assert_eq!(cfg.criterion, 2);
        assert_eq!(cfg.stemmer, "porter");
        assert_eq!(cfg.tags, vec!["NN", "VB"]);
        assert!(!cfg.checkpointing);
        assert_eq!(cfg.top_k, 10);
    }

    #[test]
    fn test_flags_override_config_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cfg.json");
        fs::write(&path, r#"{"criterion": 3, "top_k": 4}"#).unwrap();

        let cli = Cli::try_parse_from([
            "hashtag",
            "settings",
            "--config",
            path.to_str().unwrap(),
            "--top-k",
            "7",
        ])
        .unwrap();
        let cfg = cli.settings.resolve().unwrap();
        assert_eq!(cfg.criterion, 3);
        assert_eq!(cfg.top_k, 7);
    }

    #[test]
    fn test_show_args() {
        let cli = Cli::try_parse_from([
            "hashtag", "show", "--step", "filter_punctuation", "--step", "filter_stem",
        ])
        .unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        let source = CorpusSource::from(args);
        assert_eq!(source.checkpoint, None);
        assert_eq!(source.selection.steps, vec!["filter_punctuation", "filter_stem"]);
    }

    #[test]
    fn test_show_from_conflicts_with_steps() {
        assert!(Cli::try_parse_from([
            "hashtag", "show", "--from", "filter_by_tag", "--all",
        ])
        .is_err());
    }
}
