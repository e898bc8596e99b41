//! Section summarizer
//!
//! Ties lemma extraction, section tokenization and scoring together. One
//! [`SectionSummarizer`] is built per article (it owns the title lemmas) and
//! then called once per section.
//!
//! ```rust
//! use section_summarizer::SectionSummarizer;
//!
//! let summarizer = SectionSummarizer::new("Cats");
//! let summary = summarizer.summarize(
//!     "Behavior",
//!     "Cats sleep a lot.\nCats are independent animals. They hunt at night.",
//! );
//! assert_eq!(summary, vec!["Cats sleep a lot."]);
//! ```

use super::lemmas::LemmaExtractor;
use super::scorer::{LemmaStatistics, SentenceScorer};
use super::section::SectionTokenizer;
use crate::errors::Result;
use crate::nlp::backend::{LinguisticBackend, RuleBasedBackend};
use crate::types::{ScoredSentence, Sentence, SummarizerConfig};
use rustc_hash::FxHashSet;

/// Scores and selects the most informative sentences of article sections
#[derive(Debug, Clone)]
pub struct SectionSummarizer<B = RuleBasedBackend> {
    backend: B,
    config: SummarizerConfig,
    title_lemmas: FxHashSet<String>,
}

impl SectionSummarizer<RuleBasedBackend> {
    /// Summarizer for an article titled `title`, with the default config and
    /// the built-in English backend
    pub fn new(title: &str) -> Self {
        let config = SummarizerConfig::default();
        let backend = RuleBasedBackend::new(&config.language);
        Self::build(title, backend, config)
    }

    /// Summarizer with a custom config and the built-in backend
    pub fn with_config(title: &str, config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let backend = RuleBasedBackend::new(&config.language);
        Ok(Self::build(title, backend, config))
    }
}

impl<B: LinguisticBackend> SectionSummarizer<B> {
    /// Summarizer using a caller-supplied linguistic backend
    pub fn with_backend(title: &str, backend: B, config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(title, backend, config))
    }

    fn build(title: &str, backend: B, config: SummarizerConfig) -> Self {
        let title_lemmas = LemmaExtractor::new(&backend).unique_lemmas(title);
        Self {
            backend,
            config,
            title_lemmas,
        }
    }

    /// Deduplicated lemmas of the article title
    pub fn title_lemmas(&self) -> &FxHashSet<String> {
        &self.title_lemmas
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Select the top sentences of a section, in original reading order.
    ///
    /// Returns `ceil(sentences / compression_ratio)` sentences, or none for a
    /// section without sentences.
    pub fn summarize(&self, heading: &str, text: &str) -> Vec<String> {
        let (mut sentences, scored) = self.score_section(heading, text);
        let n_top = self.config.n_top(sentences.len());

        let mut selected: Vec<usize> = select_top(scored, n_top);
        selected.sort_unstable();

        debug_event!(
            heading,
            sentences = sentences.len(),
            selected = selected.len(),
            "summarized section"
        );

        selected
            .into_iter()
            .map(|i| std::mem::take(&mut sentences[i].text))
            .collect()
    }

    /// Split, lemmatize and score every sentence of a section.
    ///
    /// Scores are indexed by section-wide sentence index. Lemma statistics
    /// are complete before the first sentence is scored.
    pub fn score_section(&self, heading: &str, text: &str) -> (Vec<Sentence>, Vec<ScoredSentence>) {
        let heading_lemmas = LemmaExtractor::new(&self.backend).unique_lemmas(heading);
        let sentences = SectionTokenizer::new(&self.backend).sentences(text);

        let stats = LemmaStatistics::from_sentences(&sentences);
        debug_event!(
            heading,
            sentences = sentences.len(),
            total_lemmas = stats.total(),
            distinct_lemmas = stats.distinct(),
            "built lemma statistics"
        );

        let scorer = SentenceScorer::new(&stats, &heading_lemmas, &self.title_lemmas);
        let scored = sentences
            .iter()
            .map(|s| ScoredSentence::new(s.index, scorer.score(s)))
            .collect();

        (sentences, scored)
    }
}

/// Indices of the `n` best sentences, best first
fn select_top(mut scored: Vec<ScoredSentence>, n: usize) -> Vec<usize> {
    scored.sort_by(|a, b| a.rank_cmp(b));
    scored.into_iter().take(n).map(|s| s.index).collect()
}
