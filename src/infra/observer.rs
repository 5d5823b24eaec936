// ============================================================
// Layer 6 — Stage Observers
// ============================================================
// The filter pipeline and the common-word engine report every
// stage boundary to an injected StageObserver:
//
//   TracingObserver      → forwards to tracing
//   StageTimingObserver  → keeps the reports in memory
//   NoopObserver         → discards them

use std::path::Path;
use std::time::{Duration, Instant};

/// Stage name used by the common-word engine while scanning the corpus.
pub const STAGE_COUNT_WORDS: &str = "count_words";
/// Stage name used by the common-word engine while applying the criterion.
pub const STAGE_FIND_COMMON: &str = "find_common";

/// Starts timing a stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a finished stage reports back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    lines:   Option<usize>,
    tokens:  Option<usize>,
    entries: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed, ..Self::default() }
    }

    /// Line records and tokens in the corpus after the stage
    pub fn with_corpus(mut self, lines: usize, tokens: usize) -> Self {
        self.lines = Some(lines);
        self.tokens = Some(tokens);
        self
    }

    /// Frequency index size after the stage
    pub fn with_entries(mut self, entries: usize) -> Self {
        self.entries = Some(entries);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn lines(&self) -> Option<usize> {
        self.lines
    }

    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    pub fn entries(&self) -> Option<usize> {
        self.entries
    }
}

/// Receives notifications at stage boundaries. Every hook defaults to a no-op.
pub trait StageObserver {
    fn on_stage_start(&mut self, _stage: &str) {}

    fn on_stage_end(&mut self, _stage: &str, _report: &StageReport) {}

    /// The stage failed; the corpus was left as it was before the stage.
    fn on_stage_failed(&mut self, _stage: &str, _error: &dyn std::error::Error) {}

    fn on_checkpoint(&mut self, _name: &str, _path: &Path) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StageObserver for NoopObserver {}

/// Logs each stage boundary through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StageObserver for TracingObserver {
    fn on_stage_start(&mut self, stage: &str) {
        tracing::info!("Calling {}", stage);
    }

    fn on_stage_end(&mut self, stage: &str, report: &StageReport) {
        tracing::info!(
            lines = ?report.lines(),
            tokens = ?report.tokens(),
            entries = ?report.entries(),
            "Called {} in {:.2}s",
            stage,
            report.elapsed().as_secs_f64()
        );
    }

    fn on_stage_failed(&mut self, stage: &str, error: &dyn std::error::Error) {
        tracing::warn!("{} failed, corpus left unchanged: {}", stage, error);
    }

    fn on_checkpoint(&mut self, name: &str, path: &Path) {
        tracing::debug!("Creating checkpoint '{}' at: {}", name, path.display());
    }
}

/// Collects every report in order. Handy for tests and for summaries.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports:     Vec<(String, StageReport)>,
    failures:    Vec<(String, String)>,
    checkpoints: Vec<String>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(String, StageReport)] {
        &self.reports
    }

    /// `(stage, error message)` for each failed stage
    pub fn failures(&self) -> &[(String, String)] {
        &self.failures
    }

    pub fn checkpoints(&self) -> &[String] {
        &self.checkpoints
    }
}

impl StageObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &str, report: &StageReport) {
        self.reports.push((stage.to_string(), report.clone()));
    }

    fn on_stage_failed(&mut self, stage: &str, error: &dyn std::error::Error) {
        self.failures.push((stage.to_string(), error.to_string()));
    }

    fn on_checkpoint(&mut self, name: &str, _path: &Path) {
        self.checkpoints.push(name.to_string());
    }
}

/// Lets callers keep ownership of an observer while lending it out.
impl<O: StageObserver + ?Sized> StageObserver for &mut O {
    fn on_stage_start(&mut self, stage: &str) {
        (**self).on_stage_start(stage)
    }

    fn on_stage_end(&mut self, stage: &str, report: &StageReport) {
        (**self).on_stage_end(stage, report)
    }

    fn on_stage_failed(&mut self, stage: &str, error: &dyn std::error::Error) {
        (**self).on_stage_failed(stage, error)
    }

    fn on_checkpoint(&mut self, name: &str, path: &Path) {
        (**self).on_checkpoint(name, path)
    }
}
