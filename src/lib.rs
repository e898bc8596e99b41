//! # section_summarizer
//!
//! Extractive, per-section summaries of long-form articles.
//!
//! Each section is scored with a modified Luhn algorithm: sentences earn
//! points for opening their paragraph or section, for containing lemmas of
//! the article title or section heading, and for containing lemmas that are
//! frequent within the section. The top `1 / compression_ratio` of sentences
//! are returned in reading order.
//!
//! ## Features
//!
//! - **Pluggable linguistics**: tokenization, tagging and lemmatization sit
//!   behind [`LinguisticBackend`]; a rule-based English backend is built in
//! - **Deterministic**: ties between equal scores go to the earlier sentence
//! - **Article plumbing**: section splitting, trailing-section truncation and
//!   a JSON-shaped response boundary
//! - `tracing` feature: debug events for section statistics and fetches
//! - `fetch` feature: a blocking Wikipedia article source

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
/// When disabled, this is a no-op and the compiler eliminates it.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod article;
pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    Paragraph, PosTag, ScoredSentence, Section, SectionSummary, Sentence, SummarizerConfig,
    WordClass,
};

// Re-export main functionality
pub use article::response::{summaries_for, SummariesResponse};
pub use article::sections::{
    split_sections, summarize_article, summarize_sections, summarize_sections_parallel,
    IGNORED_SECTIONS,
};
pub use article::source::{Article, ArticleSource, StaticSource};
#[cfg(feature = "fetch")]
pub use article::source::WikipediaSource;
pub use nlp::backend::{LinguisticBackend, RuleBasedBackend};
pub use nlp::stopwords::StopwordFilter;
pub use summarizer::lemmas::LemmaExtractor;
pub use summarizer::luhn::SectionSummarizer;
pub use summarizer::scorer::{score_sentence, LemmaStatistics, SentenceScorer};
pub use summarizer::section::SectionTokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
