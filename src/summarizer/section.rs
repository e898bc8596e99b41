//! Section tokenization
//!
//! Splits section text into paragraphs (one per line) and each paragraph
//! into sentences, recording where every sentence sits.

use super::lemmas::LemmaExtractor;
use crate::nlp::backend::LinguisticBackend;
use crate::types::{Paragraph, Sentence};

/// Splits a section into positioned, lemmatized sentences
#[derive(Debug, Clone, Copy)]
pub struct SectionTokenizer<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: LinguisticBackend + ?Sized> SectionTokenizer<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Split `text` into paragraphs of sentences.
    ///
    /// Every `\n`-separated line is a paragraph, blank ones included (they
    /// hold zero sentences). Sentence `index` values count up across the
    /// whole section in reading order.
    pub fn split_into_paragraphs(&self, text: &str) -> Vec<Paragraph> {
        let extractor = LemmaExtractor::new(self.backend);
        let mut next_index = 0;

        text.split('\n')
            .enumerate()
            .map(|(paragraph_idx, line)| {
                let sentences = self
                    .backend
                    .tokenize_sentences(line)
                    .into_iter()
                    .enumerate()
                    .map(|(position, sentence_text)| {
                        let lemmas = extractor.lemmatize(&sentence_text);
                        let sentence =
                            Sentence::new(sentence_text, paragraph_idx, position, next_index, lemmas);
                        next_index += 1;
                        sentence
                    })
                    .collect();

                Paragraph {
                    index: paragraph_idx,
                    sentences,
                }
            })
            .collect()
    }

    /// Flattened section-wide sentence list, in reading order
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.split_into_paragraphs(text)
            .into_iter()
            .flat_map(|p| p.sentences)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::backend::testing::FakeBackend;

    #[test]
    fn test_paragraph_and_sentence_positions() {
        let backend = FakeBackend::new();
        let tokenizer = SectionTokenizer::new(&backend);

        let paragraphs = tokenizer.split_into_paragraphs("A one. A two.\nB one.\n\nD one. D two.");
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[0].len(), 2);
        assert_eq!(paragraphs[1].len(), 1);
        assert!(paragraphs[2].is_empty());
        assert_eq!(paragraphs[3].len(), 2);

        let d_two = &paragraphs[3].sentences[1];
        assert_eq!(d_two.text, "D two.");
        assert_eq!(d_two.paragraph_idx, 3);
        assert_eq!(d_two.position_in_paragraph, 1);
        assert_eq!(d_two.index, 4);
    }

    #[test]
    fn test_flat_indices_are_sequential() {
        let backend = FakeBackend::new();
        let tokenizer = SectionTokenizer::new(&backend);

        let sentences = tokenizer.sentences("x. y.\n\nz.");
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(sentences[2].paragraph_idx, 2);
        assert_eq!(sentences[2].position_in_paragraph, 0);
    }

    #[test]
    fn test_sentences_carry_lemmas() {
        let backend = FakeBackend::new().with_stopwords(&["the"]);
        let tokenizer = SectionTokenizer::new(&backend);

        let sentences = tokenizer.sentences("The cat sat.");
        assert_eq!(sentences[0].lemmas, vec!["cat", "sat"]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_paragraph() {
        let backend = FakeBackend::new();
        let tokenizer = SectionTokenizer::new(&backend);

        let paragraphs = tokenizer.split_into_paragraphs("");
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].is_empty());
        assert!(tokenizer.sentences("").is_empty());
    }
}
