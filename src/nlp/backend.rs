//! Linguistic backend abstraction
//!
//! The summarizer never tokenizes, tags or lemmatizes on its own; it asks a
//! [`LinguisticBackend`]. This keeps the scoring algorithm testable against a
//! deterministic fake and lets callers plug in a stronger tagger.

use super::lemmatizer::RuleLemmatizer;
use super::stopwords::StopwordFilter;
use super::tagger::HeuristicTagger;
use super::tokenizer::Tokenizer;
use crate::types::{PosTag, WordClass};

/// The set of linguistic primitives the summarizer depends on.
///
/// # Contract
///
/// - All methods are pure with respect to their inputs.
/// - `pos_tag` returns one entry per input word, in input order.
/// - `lemmatize` returns `None` when the word cannot be lemmatized; the
///   word is then dropped, never treated as an error.
///
/// Implementations must be `Send + Sync` so one backend can serve several
/// sections being summarized concurrently.
pub trait LinguisticBackend: Send + Sync {
    /// Split text into word tokens
    fn tokenize_words(&self, text: &str) -> Vec<String>;

    /// Split text into sentences
    fn tokenize_sentences(&self, text: &str) -> Vec<String>;

    /// Tag each word with its part of speech
    fn pos_tag(&self, words: &[String]) -> Vec<(String, PosTag)>;

    /// Dictionary form of `word` read as `class`
    fn lemmatize(&self, word: &str, class: WordClass) -> Option<String>;

    /// Whether `word` is a stopword. Callers pass the lowercase form.
    fn is_stopword(&self, word: &str) -> bool;
}

/// Built-in English backend: UAX #29 segmentation, NLTK stopword lists, a
/// heuristic tagger and a rule-based lemmatizer.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedBackend {
    tokenizer: Tokenizer,
    tagger: HeuristicTagger,
    lemmatizer: RuleLemmatizer,
    stopwords: StopwordFilter,
}

impl RuleBasedBackend {
    /// Create a backend using the stopword list for `language`
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
            ..Self::default()
        }
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }
}

impl LinguisticBackend for RuleBasedBackend {
    fn tokenize_words(&self, text: &str) -> Vec<String> {
        self.tokenizer.words(text)
    }

    fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        self.tokenizer.sentences(text)
    }

    fn pos_tag(&self, words: &[String]) -> Vec<(String, PosTag)> {
        self.tagger.tag(words)
    }

    fn lemmatize(&self, word: &str, class: WordClass) -> Option<String> {
        self.lemmatizer.lemmatize(word, class)
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic backend for algorithm tests.

    use super::*;
    use rustc_hash::FxHashMap;

    /// Whitespace words, one sentence per `.`, tags from a fixed table
    /// (untabled words are nouns), lemma = lowercase word.
    #[derive(Debug, Default)]
    pub struct FakeBackend {
        pub tags: FxHashMap<String, PosTag>,
        pub stopwords: Vec<String>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_tag(mut self, word: &str, tag: PosTag) -> Self {
            self.tags.insert(word.to_lowercase(), tag);
            self
        }

        pub fn with_stopwords(mut self, words: &[&str]) -> Self {
            self.stopwords = words.iter().map(|w| w.to_string()).collect();
            self
        }
    }

    impl LinguisticBackend for FakeBackend {
        fn tokenize_words(&self, text: &str) -> Vec<String> {
            text.split_whitespace()
                .map(|w| w.trim_matches('.').to_string())
                .filter(|w| !w.is_empty())
                .collect()
        }

        fn tokenize_sentences(&self, text: &str) -> Vec<String> {
            text.split_inclusive('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }

        fn pos_tag(&self, words: &[String]) -> Vec<(String, PosTag)> {
            words
                .iter()
                .map(|w| {
                    let tag = self
                        .tags
                        .get(&w.to_lowercase())
                        .copied()
                        .unwrap_or(PosTag::Noun);
                    (w.clone(), tag)
                })
                .collect()
        }

        fn lemmatize(&self, word: &str, _class: WordClass) -> Option<String> {
            Some(word.to_lowercase())
        }

        fn is_stopword(&self, word: &str) -> bool {
            self.stopwords.iter().any(|s| s == word)
        }
    }
}
