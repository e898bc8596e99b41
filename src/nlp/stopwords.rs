//! Stopwords
//!
//! Lists come from the NLTK corpus bundled with the `stop-words` crate. The
//! lemma extractor asks about lowercase words only, so every list is stored
//! lowercase and lookups compare as-is.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Lowercase stopword set for one language
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// NLTK stopwords for `language` (ISO code or English name).
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let language = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => LANGUAGE::English,
        };
        Self::collect(get(language))
    }

    /// Stopwords from a caller-supplied list
    pub fn from_list(words: &[&str]) -> Self {
        Self::collect(words.iter().copied())
    }

    fn collect<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Whether the lowercase word `lower` is a stopword
    pub fn is_stopword(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }
}
