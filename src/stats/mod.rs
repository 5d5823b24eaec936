// ============================================================
// Layer 5 — Statistics
// ============================================================
// Word frequency index and the common-word engine built on it.

pub mod engine;
pub mod frequency;
