// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, error types and capability traits that every
// other layer speaks in.
//
// Rules for this layer:
//   - NO file I/O
//   - NO concrete NLP adapters (those live in `nlp` and `data`)
//   - Only data, errors and traits
//
//   document.rs — a raw text document loaded from disk
//   corpus.rs   — LineRecord + Corpus, the shared token corpus
//   error.rs    — typed errors for pipeline, checkpoints, NLP, engine
//   traits.rs   — DocumentSource, Tokenizer, Tagger, StopWordSource,
//                 Stemmer

// A loaded document from disk
pub mod document;

// Tokenized line records and the ordered corpus
pub mod corpus;

// Error taxonomy shared across layers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
