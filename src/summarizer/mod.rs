//! Summarization components
//!
//! Provides extractive per-section summarization with a modified Luhn
//! scorer: lemma frequencies, title/heading overlap and sentence position
//! are summed into one score per sentence.

pub mod lemmas;
pub mod luhn;
pub mod scorer;
pub mod section;
