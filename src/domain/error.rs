// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Typed errors for the library layers. The application and CLI
// layers wrap these in anyhow::Error with extra context.
//
//   PipelineError   — misconfigured or empty pipeline, checkpoint
//                     failures surfaced through the pipeline
//   CheckpointError — checkpoint naming, lookup and I/O
//   NlpError        — a capability cannot serve the request
//                     (non-fatal inside a filter step)
//   EngineError     — criterion and ranking depth problems

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or running the filter pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A step cannot be added: unknown name, or an identity that cannot
    /// name a checkpoint.
    #[error("invalid filter step `{name}`: {reason}")]
    InvalidStep { name: String, reason: &'static str },

    /// `apply` was called before any step was added.
    #[error("the filter pipeline is empty, add a filter step first")]
    PipelineEmpty,

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

/// Errors raised by the checkpoint store.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The requested name is not among the currently listed checkpoints,
    /// or vanished between listing and reading.
    #[error("checkpoint `{0}` not found")]
    NotFound(String),

    #[error("`{0}` is not a valid checkpoint name")]
    InvalidName(String),

    #[error("checkpoint I/O failed for '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("checkpoint '{path}' is not a valid corpus snapshot: {source}")]
    Format {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the injected NLP capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NlpError {
    #[error("no stop-word list is known for vocabulary `{0}`")]
    UnknownVocabulary(String),

    #[error("no stemmer is available for vocabulary `{0}`")]
    NoStemmer(String),

    #[error("unknown stemmer `{0}`")]
    UnknownStemmer(String),
}

/// Errors raised by the common-word engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("criterion must be at least 1, got {0}")]
    InvalidCriterion(usize),

    /// More ranked entries were requested than the index holds.
    #[error("requested {requested} common words but only {available} passed the criterion")]
    Exhausted { requested: usize, available: usize },
}
