// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to a
// use case in Layer 2. Printing happens here and only here.
//
//   parse        — parse and cache the documents
//   info         — document, line and token counts
//   settings     — effective settings
//   filter       — run filter steps with checkpoints
//   checkpoints  — list checkpoints
//   show         — top-k common words to CSV / JSON

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, FilterArgs, ParseArgs, SettingsArgs, ShowArgs};

use crate::application::{
    common_words_use_case::CommonWordsUseCase,
    config::AppConfig,
    filter_use_case::FilterUseCase,
    parse_use_case::ParseUseCase,
};
use crate::domain::error::EngineError;

#[derive(Parser, Debug)]
#[command(
    name = "hashtag",
    version,
    about = "Filter a folder of text documents and report the words they have in common."
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the settings, then dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        let config = self.settings.resolve()?;
        if config.debug {
            tracing::debug!("Effective settings: {:?}", config);
        }

        match self.command {
            Commands::Parse(args) => run_parse(config, args),
            Commands::Info => run_info(config),
            Commands::Settings => run_settings(config),
            Commands::Filter(args) => run_filter(config, args),
            Commands::Checkpoints => run_checkpoints(config),
            Commands::Show(args) => run_show(config, args),
        }
    }
}

fn run_parse(config: AppConfig, args: ParseArgs) -> Result<()> {
    config.save()?;
    let corpus = ParseUseCase::new(&config)?.execute(args.reparse)?;
    println!(
        "Parsed {} lines with {} tokens from '{}'.",
        corpus.len(),
        corpus.token_count(),
        config.docs_dir
    );
    Ok(())
}

fn run_info(config: AppConfig) -> Result<()> {
    let info = ParseUseCase::new(&config)?.info()?;
    println!("Input documents: {}", info.documents);
    println!("Line records:    {}", info.records);
    println!("Tokens:          {}", info.tokens);
    Ok(())
}

fn run_settings(config: AppConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn run_filter(config: AppConfig, args: FilterArgs) -> Result<()> {
    config.save()?;
    let corpus = ParseUseCase::new(&config)?.execute(false)?;
    let filtered = FilterUseCase::new(config.clone()).execute(corpus, &args.steps.into())?;
    println!(
        "Filtered corpus: {} lines, {} tokens.",
        filtered.len(),
        filtered.token_count()
    );
    if config.checkpointing {
        println!("Checkpoints are in '{}'.", config.saves_dir);
    }
    Ok(())
}

fn run_checkpoints(config: AppConfig) -> Result<()> {
    let names = FilterUseCase::new(config).checkpoints()?;
    if names.is_empty() {
        println!("No checkpoints yet. Run `hashtag filter` first.");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn run_show(config: AppConfig, args: ShowArgs) -> Result<()> {
    config.save()?;
    let use_case = CommonWordsUseCase::new(config.clone())?;

    let outcome = match use_case.execute(&args.into()) {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(EngineError::Exhausted { .. }) = e.downcast_ref::<EngineError>() {
                println!(
                    "Request common words with top_k={}\ncriterion={}\nNothing found\n\
                     Change the parameters of top_k and the criterion and repeat",
                    config.top_k, config.criterion
                );
                if config.debug {
                    println!("All the common words are stored in '{}'", config.results_dir);
                }
            }
            return Err(e);
        }
    };

    let report = &outcome.report;
    println!("{}", report.title);
    for (rank, row) in report.rows.iter().enumerate() {
        println!(
            "{:>3}. {:<20} lines: {:<4} documents: {}",
            rank + 1,
            row.word,
            row.counter,
            row.documents.len()
        );
    }
    println!("\nSaved '{}'", outcome.csv_path.display());
    println!("Saved '{}'", outcome.json_path.display());
    if let Some(path) = &outcome.index_dump {
        println!("Saved '{}'", path.display());
    }
    Ok(())
}
