//! Modified Luhn sentence scoring
//!
//! A sentence's score is a sum of non-negative terms:
//!
//! - `+0.2` if it opens its paragraph, and a further `+0.3` if it opens the
//!   section
//! - for every lemma occurrence in the sentence (duplicates counted):
//!   - `+0.2` if the lemma appears in the article title
//!   - `+0.1` if the lemma appears in the section heading
//!   - `+count(lemma) / total_lemmas` over the whole section
//!
//! Statistics are built from the complete section first
//! ([`LemmaStatistics`]) and then only read while scoring.

use crate::types::Sentence;
use rustc_hash::{FxHashMap, FxHashSet};

/// Bonus for the first sentence of a paragraph
pub const PARAGRAPH_START_BONUS: f64 = 0.2;
/// Additional bonus for the first sentence of the section
pub const SECTION_START_BONUS: f64 = 0.3;
/// Bonus per lemma occurrence that also appears in the article title
pub const TITLE_LEMMA_BONUS: f64 = 0.2;
/// Bonus per lemma occurrence that also appears in the section heading
pub const HEADING_LEMMA_BONUS: f64 = 0.1;

/// Lemma frequencies over an entire section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LemmaStatistics {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl LemmaStatistics {
    /// Accumulate counts over every sentence of a section
    pub fn from_sentences<'s>(sentences: impl IntoIterator<Item = &'s Sentence>) -> Self {
        let mut stats = Self::default();
        for sentence in sentences {
            for lemma in &sentence.lemmas {
                *stats.counts.entry(lemma.clone()).or_insert(0) += 1;
                stats.total += 1;
            }
        }
        stats
    }

    /// Occurrences of `lemma` in the section
    pub fn count(&self, lemma: &str) -> usize {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Total lemma occurrences in the section
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct lemmas
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// `count(lemma) / total`, or `0.0` when the section has no lemmas
    pub fn frequency(&self, lemma: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(lemma) as f64 / self.total as f64
    }
}

/// Score one sentence from its lemmas and position.
///
/// Pure function; `stats` must already cover the whole section.
pub fn score_sentence(
    lemmas: &[String],
    paragraph_position: usize,
    position_in_paragraph: usize,
    stats: &LemmaStatistics,
    heading_lemmas: &FxHashSet<String>,
    title_lemmas: &FxHashSet<String>,
) -> f64 {
    let mut score = 0.0;

    if position_in_paragraph == 0 {
        score += PARAGRAPH_START_BONUS;
        if paragraph_position == 0 {
            score += SECTION_START_BONUS;
        }
    }

    for lemma in lemmas {
        if title_lemmas.contains(lemma) {
            score += TITLE_LEMMA_BONUS;
        }
        if heading_lemmas.contains(lemma) {
            score += HEADING_LEMMA_BONUS;
        }
        score += stats.frequency(lemma);
    }

    score
}

/// Scores sentences of one section against fixed statistics and lemma sets
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer<'a> {
    stats: &'a LemmaStatistics,
    heading_lemmas: &'a FxHashSet<String>,
    title_lemmas: &'a FxHashSet<String>,
}

impl<'a> SentenceScorer<'a> {
    pub fn new(
        stats: &'a LemmaStatistics,
        heading_lemmas: &'a FxHashSet<String>,
        title_lemmas: &'a FxHashSet<String>,
    ) -> Self {
        Self {
            stats,
            heading_lemmas,
            title_lemmas,
        }
    }

    /// Score a sentence using its own lemmas and position
    pub fn score(&self, sentence: &Sentence) -> f64 {
        score_sentence(
            &sentence.lemmas,
            sentence.paragraph_idx,
            sentence.position_in_paragraph,
            self.stats,
            self.heading_lemmas,
            self.title_lemmas,
        )
    }
}
