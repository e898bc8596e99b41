//! Lemma extraction
//!
//! Turns raw text into the ordered sequence of content lemmas the scorer
//! works on. Stopwords and every word outside the noun/verb/adjective/adverb
//! classes are dropped; duplicates are kept because frequency matters.

use crate::nlp::backend::LinguisticBackend;
use rustc_hash::FxHashSet;

/// Extracts content lemmas through a [`LinguisticBackend`]
#[derive(Debug, Clone, Copy)]
pub struct LemmaExtractor<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: LinguisticBackend + ?Sized> LemmaExtractor<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Content lemmas of `text` in input order, duplicates preserved
    pub fn lemmatize(&self, text: &str) -> Vec<String> {
        let words = self.backend.tokenize_words(text);
        if words.is_empty() {
            return Vec::new();
        }

        self.backend
            .pos_tag(&words)
            .into_iter()
            .filter(|(word, _)| !self.backend.is_stopword(&word.to_lowercase()))
            .filter_map(|(word, tag)| {
                let class = tag.word_class()?;
                self.backend
                    .lemmatize(&word, class)
                    .filter(|lemma| !lemma.is_empty())
            })
            .collect()
    }

    /// Deduplicated content lemmas of `text`
    pub fn unique_lemmas(&self, text: &str) -> FxHashSet<String> {
        self.lemmatize(text).into_iter().collect()
    }
}
