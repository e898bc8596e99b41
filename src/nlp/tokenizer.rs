//! Word and sentence segmentation
//!
//! Built on Unicode text segmentation (UAX #29). Sentence boundaries are
//! post-processed so that common English abbreviations and name initials
//! ("Mr. Smith", "John F. Kennedy") do not end a sentence.

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that are followed by a period without ending the sentence
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "jr.", "sr.", "vs.", "e.g.", "i.e.",
    "approx.", "gen.", "col.", "lt.", "sgt.", "capt.", "rev.", "hon.", "fig.", "mt.", "ft.",
    "c.", "ca.", "cf.", "u.s.", "u.k.",
];

/// Single letters that usually end a numbered name rather than start one
const ROMAN_NUMERALS: &str = "IVX";

/// Segments text into words and sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split text into word tokens.
    ///
    /// Punctuation marks come out as their own tokens; whitespace is dropped.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Split text into sentences.
    ///
    /// Each sentence is a trimmed, contiguous span of the input.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (start, chunk) in text.split_sentence_bound_indices() {
            let end = start + chunk.len();
            match spans.last_mut() {
                Some(last) if continues_sentence(&text[last.0..last.1], chunk) => last.1 = end,
                _ => spans.push((start, end)),
            }
        }

        spans
            .into_iter()
            .map(|(start, end)| text[start..end].trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Whether the boundary between `sentence` and `next` is a false stop after
/// an abbreviation or a name initial
fn continues_sentence(sentence: &str, next: &str) -> bool {
    let Some(last) = sentence.split_whitespace().last() else {
        return false;
    };
    let last = last.trim_start_matches(|c: char| c == '(' || c == '"' || c == '\'');

    // "F. Kennedy", but not "World War I. Then"
    let mut chars = last.chars();
    if let (Some(c), Some('.'), None) = (chars.next(), chars.next(), chars.next()) {
        if c.is_uppercase() {
            return !ROMAN_NUMERALS.contains(c)
                && next
                    .trim_start()
                    .chars()
                    .next()
                    .is_some_and(char::is_uppercase);
        }
    }

    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}
