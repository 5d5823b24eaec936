// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for each command.
//
// Rules for this layer:
//   - No counting or filtering logic here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination, with anyhow context on errors

// Settings and their resolution
pub mod config;

// Documents → cached corpus, and corpus info
pub mod parse_use_case;

// Filter runs, checkpoint listing and restore
pub mod filter_use_case;

// Common-word ranking and report files
pub mod common_words_use_case;
