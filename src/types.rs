//! Core types for section_summarizer
//!
//! This module defines the data structures shared by the linguistic layer,
//! the scorer, and the article-level plumbing: part-of-speech tags, sentences
//! with their positional metadata, scored sentences, and configuration.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Part-of-speech tags (universal tag set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

/// The four content-word classes a lemmatizer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosTag {
    /// Map this tag to a lemmatizer word class.
    ///
    /// Returns `None` for every tag outside noun/verb/adjective/adverb; such
    /// words are excluded from lemma sequences entirely.
    pub fn word_class(&self) -> Option<WordClass> {
        match self {
            PosTag::Noun | PosTag::ProperNoun => Some(WordClass::Noun),
            PosTag::Verb => Some(WordClass::Verb),
            PosTag::Adjective => Some(WordClass::Adjective),
            PosTag::Adverb => Some(WordClass::Adverb),
            _ => None,
        }
    }

    /// Parse from a Penn Treebank tag (`NN`, `VBZ`, `JJR`, `RB`, ...).
    ///
    /// Content classes are decided by the first letter, so every `N*`, `V*`,
    /// `J*` and `R*` tag lands in its class (`RP` included, as WordNet-style
    /// taggers do).
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NNP" | "NNPS" => return PosTag::ProperNoun,
            "PRP" | "PRP$" | "WP" | "WP$" | "EX" => return PosTag::Pronoun,
            "DT" | "PDT" | "WDT" => return PosTag::Determiner,
            "IN" => return PosTag::Preposition,
            "CC" => return PosTag::Conjunction,
            "CD" => return PosTag::Numeral,
            "TO" => return PosTag::Particle,
            "UH" => return PosTag::Interjection,
            "SYM" | "$" | "#" => return PosTag::Symbol,
            _ => {}
        }
        match tag.chars().next() {
            Some('N') => PosTag::Noun,
            Some('V') => PosTag::Verb,
            Some('J') => PosTag::Adjective,
            Some('R') => PosTag::Adverb,
            Some(c) if c.is_ascii_punctuation() => PosTag::Punctuation,
            _ => PosTag::Other,
        }
    }
}

// ============================================================================
// Sentence & Paragraph
// ============================================================================

/// A sentence of a section, with its positional metadata and lemmas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, verbatim from the sentence splitter
    pub text: String,
    /// Index of the paragraph this sentence belongs to (0-based)
    pub paragraph_idx: usize,
    /// Position within the paragraph (0-based)
    pub position_in_paragraph: usize,
    /// Position within the flattened section-wide sentence list (0-based)
    pub index: usize,
    /// Content lemmas, in order, duplicates preserved
    pub lemmas: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(
        text: impl Into<String>,
        paragraph_idx: usize,
        position_in_paragraph: usize,
        index: usize,
        lemmas: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            paragraph_idx,
            position_in_paragraph,
            index,
            lemmas,
        }
    }
}

/// One line of section text, split into sentences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Position within the section (0-based)
    pub index: usize,
    /// Sentences in reading order
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Number of sentences in the paragraph
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the paragraph has no sentences (blank line)
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Scored sentence
// ============================================================================

/// A sentence position paired with its score, used only for ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Section-wide sentence index
    pub index: usize,
    /// Luhn score
    pub score: f64,
}

impl ScoredSentence {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }

    /// Deterministic ranking order.
    ///
    /// 1. **Score** descending
    /// 2. **Section index** ascending (earlier sentence wins a tie)
    ///
    /// Uses `f64::total_cmp`, so the ordering is total even for NaN.
    pub fn rank_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Default number of sentences per one selected sentence
pub const DEFAULT_COMPRESSION_RATIO: f64 = 5.0;

/// Configuration for the section summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// One in this many sentences is kept (`n_top = ceil(count / ratio)`)
    pub compression_ratio: f64,
    /// Language code for the built-in backend's stopword list
    pub language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            compression_ratio: DEFAULT_COMPRESSION_RATIO,
            language: "en".to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.compression_ratio.is_finite() || self.compression_ratio <= 0.0 {
            return Err(SummarizerError::invalid_config(format!(
                "compression_ratio must be a positive number, got {}",
                self.compression_ratio
            )));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizerError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set compression ratio
    pub fn with_compression_ratio(mut self, ratio: f64) -> Self {
        self.compression_ratio = ratio;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Number of sentences kept out of `sentence_count`
    pub fn n_top(&self, sentence_count: usize) -> usize {
        if sentence_count == 0 {
            return 0;
        }
        let n = (sentence_count as f64 / self.compression_ratio).ceil() as usize;
        n.min(sentence_count)
    }
}

// ============================================================================
// Article-level records
// ============================================================================

/// A titled sub-part of an article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub text: String,
}

impl Section {
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }
}

/// The summary of one section, as returned to callers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub heading: String,
    pub summary: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_class_mapping() {
        assert_eq!(PosTag::Noun.word_class(), Some(WordClass::Noun));
        assert_eq!(PosTag::ProperNoun.word_class(), Some(WordClass::Noun));
        assert_eq!(PosTag::Verb.word_class(), Some(WordClass::Verb));
        assert_eq!(PosTag::Adjective.word_class(), Some(WordClass::Adjective));
        assert_eq!(PosTag::Adverb.word_class(), Some(WordClass::Adverb));
        assert_eq!(PosTag::Determiner.word_class(), None);
        assert_eq!(PosTag::Numeral.word_class(), None);
        assert_eq!(PosTag::Punctuation.word_class(), None);
    }

    #[test]
    fn test_from_penn() {
        assert_eq!(PosTag::from_penn("NN"), PosTag::Noun);
        assert_eq!(PosTag::from_penn("NNS"), PosTag::Noun);
        assert_eq!(PosTag::from_penn("NNP"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_penn("VBZ"), PosTag::Verb);
        assert_eq!(PosTag::from_penn("JJR"), PosTag::Adjective);
        assert_eq!(PosTag::from_penn("RB"), PosTag::Adverb);
        assert_eq!(PosTag::from_penn("DT"), PosTag::Determiner);
        assert_eq!(PosTag::from_penn("PRP"), PosTag::Pronoun);
        assert_eq!(PosTag::from_penn("."), PosTag::Punctuation);
        assert_eq!(PosTag::from_penn("FW"), PosTag::Other);
    }

    #[test]
    fn test_rank_cmp_score_descending() {
        let high = ScoredSentence::new(3, 1.5);
        let low = ScoredSentence::new(0, 0.5);
        assert_eq!(high.rank_cmp(&low), std::cmp::Ordering::Less);
        assert_eq!(low.rank_cmp(&high), std::cmp::Ordering::Greater);
    }

    #[test]
    fn test_rank_cmp_tie_earliest_index() {
        let a = ScoredSentence::new(1, 0.7);
        let b = ScoredSentence::new(4, 0.7);
        assert_eq!(a.rank_cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(b.rank_cmp(&a), std::cmp::Ordering::Greater);
    }

    #[test]
    fn test_config_validation() {
        assert!(SummarizerConfig::default().validate().is_ok());
        assert!(SummarizerConfig::default()
            .with_compression_ratio(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_compression_ratio(-2.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_compression_ratio(f64::NAN)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_language("  ")
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_compression_ratio(2.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_n_top() {
        let config = SummarizerConfig::default();
        assert_eq!(config.n_top(0), 0);
        assert_eq!(config.n_top(1), 1);
        assert_eq!(config.n_top(3), 1);
        assert_eq!(config.n_top(5), 1);
        assert_eq!(config.n_top(6), 2);
        assert_eq!(config.n_top(11), 3);

        let keep_all = SummarizerConfig::default().with_compression_ratio(0.5);
        assert_eq!(keep_all.n_top(4), 4);
    }

    #[test]
    fn test_config_serde_missing_fields_default() {
        let config: SummarizerConfig = serde_json::from_str(r#"{"compression_ratio": 3}"#).unwrap();
        assert_eq!(config.compression_ratio, 3.0);
        assert_eq!(config.language, "en");

        let config: SummarizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }
}
