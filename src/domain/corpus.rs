// ============================================================
// Layer 3 — Token Corpus
// ============================================================
// The shared data model every filter step and the common-word
// engine operate on.
//
//   LineRecord — one sentence of one input line: its word tokens
//                plus provenance (sentence text, document id)
//   Corpus     — the ordered sequence of LineRecords
//
// Provenance is fixed at construction. Only the word list can be
// changed, and only by replacing it wholesale.

use serde::{Deserialize, Serialize};

/// One tokenized sentence together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    words:       Vec<String>,
    text:        String,
    document_id: String,
}

impl LineRecord {
    pub fn new(
        words:       Vec<String>,
        text:        impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            words,
            text:        text.into(),
            document_id: document_id.into(),
        }
    }

    /// Current word tokens, in tokenizer (or filter) order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The sentence text this record was tokenized from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Identifier (file name) of the source document
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Replace the word list. Filter steps always go through here.
    pub fn set_words(&mut self, words: Vec<String>) {
        self.words = words;
    }

    /// Take the word list out, leaving an empty one behind.
    pub fn take_words(&mut self) -> Vec<String> {
        std::mem::take(&mut self.words)
    }
}

/// Ordered collection of line records.
///
/// Serialises as a plain JSON array so checkpoints keep record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    lines: Vec<LineRecord>,
}

impl Corpus {
    pub fn new(lines: Vec<LineRecord>) -> Self {
        Self { lines }
    }

    pub fn push(&mut self, line: LineRecord) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRecord> {
        self.lines.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, LineRecord> {
        self.lines.iter_mut()
    }

    /// Total number of word tokens across all records
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Number of distinct document ids present in the corpus
    pub fn document_count(&self) -> usize {
        let mut seen: Vec<&str> = self.lines.iter().map(|l| l.document_id()).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

impl From<Vec<LineRecord>> for Corpus {
    fn from(lines: Vec<LineRecord>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<LineRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = LineRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Corpus {
    type Item = LineRecord;
    type IntoIter = std::vec::IntoIter<LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a LineRecord;
    type IntoIter = std::slice::Iter<'a, LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::line;

    #[test]
    fn test_set_words_replaces_wholesale() {
        let mut record = line(&["a", "b"], "a b", "doc1.txt");
        record.set_words(vec!["c".to_string()]);
        assert_eq!(record.words(), ["c".to_string()]);
        assert_eq!(record.text(), "a b");
        assert_eq!(record.document_id(), "doc1.txt");
    }

    #[test]
    fn test_counts() {
        let corpus = Corpus::from(vec![
            line(&["a", "b"], "a b", "doc1.txt"),
            line(&["c"], "c", "doc2.txt"),
            line(&[], "", "doc1.txt"),
        ]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.token_count(), 3);
        assert_eq!(corpus.document_count(), 2);
    }

    #[test]
    fn test_serialises_as_ordered_array() {
        let corpus = Corpus::from(vec![
            line(&["x"], "x", "b.txt"),
            line(&["y"], "y", "a.txt"),
        ]);
        let json = serde_json::to_string(&corpus).unwrap();
        assert!(json.starts_with('['));
        let back: Corpus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, corpus);
    }
}
