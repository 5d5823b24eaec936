// ============================================================
// Layer 4 — Corpus Builder
// ============================================================
// Turns loaded documents into the token corpus:
//
//   Document ──lines──▶ Preprocessor ──▶ Tokenizer ──▶ LineRecord*
//
// Every sentence of every line becomes its own LineRecord that
// shares the document id (the file name) with its siblings.

use std::rc::Rc;

use crate::data::preprocessor::Preprocessor;
use crate::domain::corpus::{Corpus, LineRecord};
use crate::domain::document::Document;
use crate::domain::traits::Tokenizer;

pub struct CorpusBuilder {
    preprocessor: Preprocessor,
    tokenizer:    Rc<dyn Tokenizer>,
}

impl CorpusBuilder {
    pub fn new(tokenizer: Rc<dyn Tokenizer>) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            tokenizer,
        }
    }

    /// Tokenize all documents, preserving document then line order.
    pub fn build(&self, docs: &[Document]) -> Corpus {
        let mut corpus = Corpus::default();

        for doc in docs {
            let before = corpus.len();
            for raw in doc.lines() {
                let clean = self.preprocessor.clean_line(raw);
                for (words, sentence) in self.tokenizer.split(&clean) {
                    corpus.push(LineRecord::new(words, sentence, doc.source.as_str()));
                }
            }
            tracing::debug!("{}: {} line records", doc.source, corpus.len() - before);
        }

        tracing::info!(
            "Built corpus: {} line records, {} tokens",
            corpus.len(),
            corpus.token_count()
        );
        corpus
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::UnicodeTokenizer;

    #[test]
    fn test_records_keep_provenance_and_order() {
        let docs = vec![
            Document::new("doc1.txt", "Let me begin, today$\n\nSecond line. Third one"),
            Document::new("doc2.txt", "  To Chairman  Dean  "),
        ];
        let corpus = CorpusBuilder::new(Rc::new(UnicodeTokenizer::new())).build(&docs);

        let texts: Vec<&str> = corpus.iter().map(|l| l.text()).collect();
        assert_eq!(
            texts,
            vec!["Let me begin, today$", "Second line.", "Third one", "To Chairman Dean"]
        );
        let ids: Vec<&str> = corpus.iter().map(|l| l.document_id()).collect();
        assert_eq!(ids, vec!["doc1.txt", "doc1.txt", "doc1.txt", "doc2.txt"]);
        assert_eq!(corpus.lines()[0].words(), ["Let", "me", "begin", ",", "today", "$"]);
    }

    #[test]
    fn test_empty_documents() {
        let corpus = CorpusBuilder::new(Rc::new(UnicodeTokenizer::new()))
            .build(&[Document::new("empty.txt", "")]);
        assert!(corpus.is_empty());
    }
}
