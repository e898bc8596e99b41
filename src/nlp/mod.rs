//! Natural Language Processing components
//!
//! This module provides the linguistic primitives the summarizer consumes:
//! tokenization, part-of-speech tagging, lemmatization and stopword
//! filtering, bundled behind the [`backend::LinguisticBackend`] trait.

pub mod backend;
pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
