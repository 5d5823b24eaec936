// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns shared by the pipeline, the engine and
// the application layer:
//
//   checkpoint.rs — corpus snapshots and the parse cache, as
//                   JSON files written atomically
//
//   observer.rs   — stage observers: tracing, timing, no-op
//
//   report.rs     — CSV / JSON rendering of ranked common words

/// Corpus checkpoint saving and loading
pub mod checkpoint;

/// Stage boundary hooks
pub mod observer;

/// Common-word report files
pub mod report;
