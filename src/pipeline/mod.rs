// ============================================================
// Layer 4 — Filter Pipeline
// ============================================================
// Ordered, checkpointed transformations over the token corpus.
//
//   steps  — FilterStep trait and the built-in steps
//   runner — FilterPipeline: add steps, apply, list, restore

pub mod runner;
pub mod steps;
