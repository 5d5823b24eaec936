// ============================================================
// Layer 5 — Frequency Index
// ============================================================
// Per unique token, the distinct line texts and the distinct
// documents it was seen in, kept in first-sighting order (the
// ranking uses it to break ties).
//
// Counting rules:
//   sighting                         lines    documents  counter
//   first time                       [text]   [doc]      1
//   unseen document                  .        + doc      .
//   unseen line text                 + text   .          + 1
//   line and document already seen   .        .          .
//
// so counter == lines.len() holds at all times.

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::corpus::{Corpus, LineRecord};

/// Where and how often one word was seen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordOccurrence {
    counter:   usize,
    lines:     Vec<String>,
    documents: Vec<String>,
}

impl WordOccurrence {
    fn first(line: &LineRecord) -> Self {
        Self {
            counter:   1,
            lines:     vec![line.text().to_string()],
            documents: vec![line.document_id().to_string()],
        }
    }

    fn record(&mut self, line: &LineRecord) {
        if !contains(&self.documents, line.document_id()) {
            self.documents.push(line.document_id().to_string());
        }
        if !contains(&self.lines, line.text()) {
            self.lines.push(line.text().to_string());
            self.counter += 1;
        }
    }

    /// Number of distinct lines the word was seen in
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Distinct line texts, in first-seen order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Distinct document ids, in first-seen order
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

// Repeated words of one line hit the last element, so check it first.
fn contains(seen: &[String], value: &str) -> bool {
    seen.last().is_some_and(|last| last == value) || seen.iter().any(|s| s == value)
}

/// Insertion-ordered map from word to [`WordOccurrence`].
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    entries:   Vec<(String, WordOccurrence)>,
    positions: FxHashMap<String, usize>,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every word of every record once.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut index = Self::new();
        for line in corpus {
            for word in line.words() {
                index.record_sighting(word, line);
            }
        }
        index
    }

    /// Record that `word` appears in `line`.
    pub fn record_sighting(&mut self, word: &str, line: &LineRecord) {
        match self.positions.get(word) {
            Some(&pos) => self.entries[pos].1.record(line),
            None => {
                self.positions.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), WordOccurrence::first(line)));
            }
        }
    }

    /// Drop every entry seen in fewer than `criterion` distinct documents.
    /// Returns how many entries were dropped. There is no way back.
    pub fn filter_by_criterion(&mut self, criterion: usize) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, occ)| occ.document_count() >= criterion);

        self.positions.clear();
        for (pos, (word, _)) in self.entries.iter().enumerate() {
            self.positions.insert(word.clone(), pos);
        }
        before - self.entries.len()
    }

    pub fn get(&self, word: &str) -> Option<&WordOccurrence> {
        self.positions.get(word).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordOccurrence)> {
        self.entries.iter().map(|(w, o)| (w.as_str(), o))
    }
}

/// Serialises as a JSON object in insertion order.
impl Serialize for FrequencyIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, occ) in &self.entries {
            map.serialize_entry(word, occ)?;
        }
        map.end()
    }
}
