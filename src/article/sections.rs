//! Article sections
//!
//! Splits plain-text article extracts into `{heading, text}` sections and
//! summarizes them in order, stopping at the first trailing boilerplate
//! section ("See also", "References", ...).

use crate::errors::Result;
use crate::nlp::backend::LinguisticBackend;
use crate::summarizer::luhn::SectionSummarizer;
use crate::types::{Section, SectionSummary, SummarizerConfig};
use rayon::prelude::*;

/// Headings that end the summarized part of an article
pub const IGNORED_SECTIONS: &[&str] = &["See also", "References", "Further reading", "External links"];

/// Marker character that starts a heading line
const HEADING_MARKER: char = '=';

/// Split raw article text into sections.
///
/// Lines starting with `=` are headings (`== History ==` becomes
/// `History`); every other line belongs to the current section. Text before
/// the first heading forms a section with an empty heading. Section bodies
/// are joined with `\n` and trimmed. Empty input yields no sections.
pub fn split_sections(raw_text: &str) -> Vec<Section> {
    if raw_text.is_empty() {
        return Vec::new();
    }

    let mut sections = Vec::new();
    let mut heading = String::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in raw_text.split('\n') {
        if line.starts_with(HEADING_MARKER) {
            sections.push(Section::new(
                std::mem::take(&mut heading),
                lines.join("\n").trim(),
            ));
            heading = line.trim_matches(HEADING_MARKER).trim().to_string();
            lines.clear();
        } else {
            lines.push(line);
        }
    }
    sections.push(Section::new(heading, lines.join("\n").trim()));

    sections
}

/// Whether summarization stops at this heading
pub fn is_ignored_heading(heading: &str) -> bool {
    IGNORED_SECTIONS.contains(&heading)
}

/// The sections before the first ignored heading
pub fn retained_sections(sections: &[Section]) -> &[Section] {
    let end = sections
        .iter()
        .position(|s| is_ignored_heading(&s.heading))
        .unwrap_or(sections.len());

    if end < sections.len() {
        debug_event!(
            heading = sections[end].heading.as_str(),
            dropped = sections.len() - end,
            "stopping at ignored section"
        );
    }

    &sections[..end]
}

/// Summarize every section of an article in order, up to the first ignored
/// heading.
pub fn summarize_sections<B: LinguisticBackend>(
    summarizer: &SectionSummarizer<B>,
    sections: &[Section],
) -> Vec<SectionSummary> {
    retained_sections(sections)
        .iter()
        .map(|section| SectionSummary {
            heading: section.heading.clone(),
            summary: summarizer.summarize(&section.heading, &section.text),
        })
        .collect()
}

/// Same as [`summarize_sections`], summarizing sections on the rayon pool.
///
/// Output order matches input order.
pub fn summarize_sections_parallel<B: LinguisticBackend>(
    summarizer: &SectionSummarizer<B>,
    sections: &[Section],
) -> Vec<SectionSummary> {
    retained_sections(sections)
        .par_iter()
        .map(|section| SectionSummary {
            heading: section.heading.clone(),
            summary: summarizer.summarize(&section.heading, &section.text),
        })
        .collect()
}

/// Split `raw_text` and summarize it with the built-in backend
pub fn summarize_article(
    title: &str,
    raw_text: &str,
    config: SummarizerConfig,
) -> Result<Vec<SectionSummary>> {
    let summarizer = SectionSummarizer::with_config(title, config)?;
    Ok(summarize_sections(&summarizer, &split_sections(raw_text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::backend::testing::FakeBackend;

    fn fake_summarizer() -> SectionSummarizer<FakeBackend> {
        SectionSummarizer::with_backend("Title", FakeBackend::new(), SummarizerConfig::default())
            .unwrap()
    }

    #[test]
    fn test_split_sections() {
        let raw = "Lead text.\nMore lead.\n\n== History ==\nOld times.\n=== Early life ===\nBorn here.\n";
        let sections = split_sections(raw);

        assert_eq!(
            sections,
            vec![
                Section::new("", "Lead text.\nMore lead."),
                Section::new("History", "Old times."),
                Section::new("Early life", "Born here."),
            ]
        );
    }

    #[test]
    fn test_split_sections_empty_input() {
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn test_split_sections_heading_only() {
        let sections = split_sections("== Only ==");
        assert_eq!(sections, vec![Section::new("", ""), Section::new("Only", "")]);
    }

    #[test]
    fn test_ignored_section_truncates() {
        let sections = vec![
            Section::new("Intro", "intro text."),
            Section::new("See also", "links."),
            Section::new("Trivia", "trivia text."),
        ];
        let summaries = summarize_sections(&fake_summarizer(), &sections);

        let headings: Vec<&str> = summaries.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Intro"]);
        assert_eq!(summaries[0].summary, vec!["intro text."]);
    }

    #[test]
    fn test_ignored_heading_match_is_exact() {
        assert!(is_ignored_heading("References"));
        assert!(!is_ignored_heading("references"));
        assert!(!is_ignored_heading("See also (disambiguation)"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sections: Vec<Section> = (0..20)
            .map(|i| Section::new(format!("Part {i}"), format!("alpha {i}. beta {i}. gamma.\ndelta.")))
            .chain(std::iter::once(Section::new("External links", "x.")))
            .collect();
        let summarizer = fake_summarizer();

        let sequential = summarize_sections(&summarizer, &sections);
        let parallel = summarize_sections_parallel(&summarizer, &sections);

        assert_eq!(sequential.len(), 20);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_summarize_article() {
        let raw = "Cats sleep a lot.\n== References ==\nSome book.";
        let summaries = summarize_article("Cats", raw, SummarizerConfig::default()).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].heading, "");
        assert_eq!(summaries[0].summary, vec!["Cats sleep a lot."]);
    }

    #[test]
    fn test_summarize_article_empty_text() {
        let summaries = summarize_article("Cats", "", SummarizerConfig::default()).unwrap();
        assert!(summaries.is_empty());
    }
}
