// ============================================================
// Layer 4 — Data Ingestion
// ============================================================
// Everything from raw .txt files up to the token corpus:
//
//   .txt files
//       │
//       ▼
//   TextLoader        → reads files, one Document each
//       │
//       ▼
//   Preprocessor      → normalises whitespace per line
//       │
//       ▼
//   UnicodeTokenizer  → sentences and word tokens
//       │
//       ▼
//   CorpusBuilder     → ordered LineRecords with provenance

/// Loads .txt files from a directory
pub mod loader;

/// Cleans raw lines before tokenization
pub mod preprocessor;

/// Default Tokenizer adapter (UAX #29)
pub mod tokenizer;

/// Documents → Corpus
pub mod corpus_builder;
