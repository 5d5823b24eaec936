// ============================================================
// Layer 4 — Filter Pipeline Runner
// ============================================================
// Owns the working corpus, the ordered steps and the checkpoint
// store.
//
//   apply()    steps run in insertion order
//              success → corpus saved as <step>.checkpoint.json
//              failure → reported to the observer, step skipped
//   restore()  brings any saved snapshot back
//
// Steps do their fallible work before touching the corpus, so the
// step after a failed one sees the corpus as it was before it.
// Only an empty pipeline and checkpoint storage problems reach
// the caller.

use std::path::PathBuf;

use crate::domain::corpus::Corpus;
use crate::domain::error::PipelineError;
use crate::infra::checkpoint::{is_valid_checkpoint_name, CheckpointStore};
use crate::infra::observer::{StageClock, StageObserver, StageReport, TracingObserver};
use crate::pipeline::steps::{FilterOptions, FilterStep, NlpToolkit, StepKind};

pub struct FilterPipeline {
    corpus:        Corpus,
    options:       FilterOptions,
    steps:         Vec<Box<dyn FilterStep>>,
    store:         CheckpointStore,
    checkpointing: bool,
    toolkit:       NlpToolkit,
    observer:      Box<dyn StageObserver>,
}

impl FilterPipeline {
    /// A pipeline over `corpus` with no steps, checkpointing on, and
    /// stage events going to `tracing`.
    pub fn new(
        corpus: Corpus,
        options: FilterOptions,
        toolkit: NlpToolkit,
        store: CheckpointStore,
    ) -> Self {
        Self {
            corpus,
            options,
            steps: Vec::new(),
            store,
            checkpointing: true,
            toolkit,
            observer: Box::new(TracingObserver),
        }
    }

    pub fn with_checkpointing(mut self, enabled: bool) -> Self {
        self.checkpointing = enabled;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn StageObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Append a step. Its name must be usable as a checkpoint name.
    pub fn add_step(&mut self, step: Box<dyn FilterStep>) -> Result<(), PipelineError> {
        if !is_valid_checkpoint_name(step.name()) {
            return Err(PipelineError::InvalidStep {
                name:   step.name().to_string(),
                reason: "a step name must be non-empty and use only letters, digits, '_' or '-'",
            });
        }
        tracing::debug!("Added step '{}'", step.name());
        self.steps.push(step);
        Ok(())
    }

    /// Append the built-in step called `name`.
    pub fn add_step_named(&mut self, name: &str) -> Result<(), PipelineError> {
        let step = name.parse::<StepKind>()?.build(&self.toolkit)?;
        self.add_step(step)
    }

    /// Replace all steps with punctuation, stop-word and tag filtering.
    pub fn add_default_steps(&mut self) -> Result<(), PipelineError> {
        let steps = StepKind::DEFAULTS
            .into_iter()
            .map(|kind| kind.build(&self.toolkit))
            .collect::<Result<Vec<_>, _>>()?;
        self.steps = steps;
        Ok(())
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order and return the resulting corpus.
    pub fn apply(&mut self) -> Result<&Corpus, PipelineError> {
        if self.steps.is_empty() {
            return Err(PipelineError::PipelineEmpty);
        }

        for step in &self.steps {
            let name = step.name();
            self.observer.on_stage_start(name);
            let clock = StageClock::start();

            if let Err(e) = step.apply(&mut self.corpus, &self.options) {
                self.observer.on_stage_failed(name, &e);
                continue;
            }

            let report = StageReport::new(clock.elapsed())
                .with_corpus(self.corpus.len(), self.corpus.token_count());
            self.observer.on_stage_end(name, &report);

            if self.checkpointing {
                let path = self.store.save(name, &self.corpus)?;
                self.observer.on_checkpoint(name, &path);
            }
        }

        Ok(&self.corpus)
    }

    /// Checkpoint names currently on disk.
    pub fn list_checkpoints(&self) -> Result<Vec<String>, PipelineError> {
        Ok(self.store.list()?)
    }

    /// Replace the working corpus with the checkpoint `name`.
    pub fn restore(&mut self, name: &str) -> Result<&Corpus, PipelineError> {
        self.corpus = self.store.load(name)?;
        tracing::info!("Restored checkpoint '{}' ({} lines)", name, self.corpus.len());
        Ok(&self.corpus)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Options are read at `apply` time, so changes affect the next run.
    pub fn options_mut(&mut self) -> &mut FilterOptions {
        &mut self.options
    }

    pub fn checkpoint_dir(&self) -> PathBuf {
        self.store.dir().to_path_buf()
    }
}
