// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A single input document: the file name it came from and its
// raw text. Tokenization happens later, line by line, in the
// corpus builder.

use serde::{Deserialize, Serialize};

/// A raw document loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name of the document; becomes the `document_id` of every
    /// line record produced from it.
    pub source: String,

    /// Full text content, lines separated by `\n`
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("doc1.txt", "Let me begin by saying thanks");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Iterate over the trimmed lines of the document
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().map(str::trim)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed() {
        let doc = Document::new("doc1.txt", "  first line \nsecond\t\n");
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines, vec!["first line", "second"]);
    }
}
