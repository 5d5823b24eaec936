// ============================================================
// Layer 5 — NLP Adapters
// ============================================================
// Default implementations of the domain's Tagger, StopWordSource
// and Stemmer traits. The pipeline never names these types; the
// application layer wires them in.

pub mod stemmer;
pub mod stopwords;
pub mod tagger;
