// ============================================================
// Layer 5 — Common-Word Engine
// ============================================================
//   Corpus ──scan──▶ FrequencyIndex ──criterion──▶ Ranking ──▶ report
//
// The ranking is sorted fresh from the index on every rank()
// call, yields at most top_k items, and yields Exhausted once
// when asked for more entries than the index holds.

use serde::Serialize;

use crate::domain::corpus::Corpus;
use crate::domain::error::EngineError;
use crate::infra::observer::{
    StageClock, StageObserver, StageReport, TracingObserver, STAGE_COUNT_WORDS,
    STAGE_FIND_COMMON,
};
use crate::stats::frequency::{FrequencyIndex, WordOccurrence};

/// Frequency index filtered by a minimum document count.
#[derive(Debug, Clone)]
pub struct CommonWordEngine {
    index:     FrequencyIndex,
    criterion: usize,
}

impl CommonWordEngine {
    /// Scan `corpus` and keep words found in at least `criterion` documents.
    pub fn new(corpus: &Corpus, criterion: usize) -> Result<Self, EngineError> {
        Self::with_observer(corpus, criterion, &mut TracingObserver)
    }

    pub fn with_observer(
        corpus: &Corpus,
        criterion: usize,
        observer: &mut dyn StageObserver,
    ) -> Result<Self, EngineError> {
        if criterion == 0 {
            return Err(EngineError::InvalidCriterion(criterion));
        }

        observer.on_stage_start(STAGE_COUNT_WORDS);
        let clock = StageClock::start();
        let mut index = FrequencyIndex::from_corpus(corpus);
        let report = StageReport::new(clock.elapsed())
            .with_corpus(corpus.len(), corpus.token_count())
            .with_entries(index.len());
        observer.on_stage_end(STAGE_COUNT_WORDS, &report);

        observer.on_stage_start(STAGE_FIND_COMMON);
        let clock = StageClock::start();
        let dropped = index.filter_by_criterion(criterion);
        tracing::debug!(
            "criterion {}: kept {} words, dropped {}",
            criterion,
            index.len(),
            dropped
        );
        let report = StageReport::new(clock.elapsed()).with_entries(index.len());
        observer.on_stage_end(STAGE_FIND_COMMON, &report);

        Ok(Self { index, criterion })
    }

    pub fn index(&self) -> &FrequencyIndex {
        &self.index
    }

    pub fn criterion(&self) -> usize {
        self.criterion
    }

    /// Ranked entries, counter descending, ties in index order.
    pub fn rank(&self, top_k: usize) -> Ranking<'_> {
        let mut order: Vec<(&str, &WordOccurrence)> = self.index.iter().collect();
        // stable: equal counters keep first-sighting order
        order.sort_by(|a, b| b.1.counter().cmp(&a.1.counter()));

        Ranking {
            available: order.len(),
            order:     order.into_iter(),
            requested: top_k,
            remaining: top_k,
            exhausted: false,
        }
    }

    /// Realise exactly `top_k` ranked entries as plain report rows.
    ///
    /// `label` becomes the base of the report name,
    /// `<label>-topk=<k>-criterion=<c>`.
    pub fn export(&self, top_k: usize, label: &str) -> Result<CommonWordsReport, EngineError> {
        let rows = self
            .rank(top_k)
            .map(|ranked| ranked.map(ReportRow::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CommonWordsReport {
            name: format!("{label}-topk={top_k}-criterion={}", self.criterion),
            title: format!("top {top_k} #hashtags for #{} input files", self.criterion),
            top_k,
            criterion: self.criterion,
            rows,
        })
    }
}

/// One ranked word, borrowed from the engine's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedWord<'a> {
    pub word:       &'a str,
    pub occurrence: &'a WordOccurrence,
}

/// Single-use ranked sequence produced by [`CommonWordEngine::rank`].
///
/// Each `next` consumes one entry. Once the index runs dry before `top_k`
/// entries were produced, the next item is `Err(Exhausted)` and the
/// sequence ends.
#[derive(Debug)]
pub struct Ranking<'a> {
    order:     std::vec::IntoIter<(&'a str, &'a WordOccurrence)>,
    requested: usize,
    remaining: usize,
    available: usize,
    exhausted: bool,
}

impl<'a> Iterator for Ranking<'a> {
    type Item = Result<RankedWord<'a>, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match self.order.next() {
            Some((word, occurrence)) => Some(Ok(RankedWord { word, occurrence })),
            None => {
                self.exhausted = true;
                Some(Err(EngineError::Exhausted {
                    requested: self.requested,
                    available: self.available,
                }))
            }
        }
    }
}

/// Plain record handed to report writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub word:      String,
    pub counter:   usize,
    pub lines:     Vec<String>,
    pub documents: Vec<String>,
}

impl From<RankedWord<'_>> for ReportRow {
    fn from(ranked: RankedWord<'_>) -> Self {
        Self {
            word:      ranked.word.to_string(),
            counter:   ranked.occurrence.counter(),
            lines:     ranked.occurrence.lines().to_vec(),
            documents: ranked.occurrence.documents().to_vec(),
        }
    }
}

/// The top-k common words plus what produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonWordsReport {
    /// File stem for rendered output
    pub name:      String,
    pub title:     String,
    pub top_k:     usize,
    pub criterion: usize,
    pub rows:      Vec<ReportRow>,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::LineRecord;
    use crate::infra::observer::StageTimingObserver;
    use crate::testing::line;
    use proptest::prelude::*;

    /// "the" in 5 documents, "cat" in 2, "sat" in 1.
    fn the_cat_sat() -> Corpus {
        let mut lines = Vec::new();
        for doc in 1..=5 {
            lines.push(line(&["the"], &format!("the line {doc}"), &format!("doc{doc}.txt")));
        }
        lines.push(line(&["cat", "sat"], "cat sat", "doc1.txt"));
        lines.push(line(&["cat"], "cat again", "doc2.txt"));
        Corpus::from(lines)
    }

    #[test]
    fn test_criterion_filters_by_documents() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 2).unwrap();
        let words: Vec<&str> = engine.index().iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["the", "cat"]);
    }

    #[test]
    fn test_rank_one_yields_the() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 2).unwrap();
        let mut ranking = engine.rank(1);
        let first = ranking.next().unwrap().unwrap();
        assert_eq!(first.word, "the");
        assert_eq!(first.occurrence.counter(), 5);
        assert!(ranking.next().is_none());
    }

    #[test]
    fn test_rank_beyond_index_is_exhausted() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 2).unwrap();
        let mut ranking = engine.rank(3);
        assert_eq!(ranking.next().unwrap().unwrap().word, "the");
        assert_eq!(ranking.next().unwrap().unwrap().word, "cat");
        assert_eq!(
            ranking.next().unwrap().unwrap_err(),
            EngineError::Exhausted { requested: 3, available: 2 }
        );
        assert!(ranking.next().is_none());
    }

    #[test]
    fn test_export_propagates_exhausted() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 2).unwrap();
        assert_eq!(
            engine.export(3, "results").unwrap_err(),
            EngineError::Exhausted { requested: 3, available: 2 }
        );
    }

    #[test]
    fn test_export_rows_and_name() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 2).unwrap();
        let report = engine.export(2, "results").unwrap();

        assert_eq!(report.name, "results-topk=2-criterion=2");
        assert_eq!(report.title, "top 2 #hashtags for #2 input files");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].word, "cat");
        assert_eq!(report.rows[1].counter, 2);
        assert_eq!(report.rows[1].lines, vec!["cat sat", "cat again"]);
        assert_eq!(report.rows[1].documents, vec!["doc1.txt", "doc2.txt"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let corpus = Corpus::from(vec![
            line(&["b", "a"], "l1", "d1"),
            line(&["c", "a"], "l2", "d2"),
            line(&["c", "b"], "l3", "d3"),
        ]);
        let engine = CommonWordEngine::new(&corpus, 1).unwrap();
        let words: Vec<&str> = engine.rank(3).map(|r| r.unwrap().word).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_is_rederived_each_call() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 1).unwrap();
        let first: Vec<&str> = engine.rank(2).map(|r| r.unwrap().word).collect();
        let second: Vec<&str> = engine.rank(2).map(|r| r.unwrap().word).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_top_k_is_empty() {
        let engine = CommonWordEngine::new(&the_cat_sat(), 9).unwrap();
        assert!(engine.index().is_empty());
        assert_eq!(engine.rank(0).count(), 0);
        assert!(engine.export(0, "r").unwrap().rows.is_empty());
    }

    #[test]
    fn test_zero_criterion_is_rejected() {
        assert_eq!(
            CommonWordEngine::new(&the_cat_sat(), 0).unwrap_err(),
            EngineError::InvalidCriterion(0)
        );
    }

    #[test]
    fn test_observer_sees_both_stages() {
        let mut obs = StageTimingObserver::new();
        CommonWordEngine::with_observer(&the_cat_sat(), 2, &mut obs).unwrap();

        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec![STAGE_COUNT_WORDS, STAGE_FIND_COMMON]);
        assert_eq!(obs.reports()[0].1.entries(), Some(3));
        assert_eq!(obs.reports()[1].1.entries(), Some(2));
    }

    proptest! {
        #[test]
        fn prop_rank_is_non_increasing(
            records in prop::collection::vec(
                (prop::collection::vec(0usize..8, 1..6), 0usize..10, 0usize..4),
                1..40,
            )
        ) {
            let corpus: Corpus = records
                .into_iter()
                .map(|(words, text, doc)| LineRecord::new(
                    words.into_iter().map(|w| format!("w{w}")).collect(),
                    format!("line {text}"),
                    format!("d{doc}"),
                ))
                .collect();
            let engine = CommonWordEngine::with_observer(
                &corpus, 1, &mut crate::infra::observer::NoopObserver,
            ).unwrap();

            let ranked: Vec<RankedWord<'_>> = engine
                .rank(engine.index().len())
                .map(|r| r.unwrap())
                .collect();
            prop_assert_eq!(ranked.len(), engine.index().len());

            let position = |w: &str| engine.index().iter().position(|(x, _)| x == w).unwrap();
            for pair in ranked.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.occurrence.counter() >= b.occurrence.counter());
                if a.occurrence.counter() == b.occurrence.counter() {
                    prop_assert!(position(a.word) < position(b.word));
                }
            }
        }
    }
}
