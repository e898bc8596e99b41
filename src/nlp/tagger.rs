//! Heuristic part-of-speech tagger
//!
//! A closed-class lexicon handles function words, suffix rules guess the
//! open classes, and a small amount of left context fixes up the most common
//! mistakes (verbs after subject pronouns and modals, capitalized words in
//! mid-sentence). Unknown words default to nouns.

use crate::types::PosTag;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static LEXICON: LazyLock<FxHashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    let groups: &[(PosTag, &[&str])] = &[
        (
            PosTag::Determiner,
            &[
                "the", "a", "an", "this", "that", "these", "those", "each", "every", "some",
                "any", "no", "all", "both", "either", "neither", "another", "such",
            ],
        ),
        (
            PosTag::Pronoun,
            &[
                "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he",
                "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself",
                "we", "us", "our", "ours", "ourselves", "they", "them", "their", "theirs",
                "themselves", "who", "whom", "whose", "which", "what",
            ],
        ),
        (
            PosTag::Preposition,
            &[
                "of", "in", "on", "at", "by", "for", "with", "about", "against", "between",
                "into", "through", "during", "before", "after", "above", "below", "from", "up",
                "down", "over", "under", "across", "along", "among", "around", "behind",
                "beside", "beyond", "near", "off", "onto", "out", "past", "since", "toward",
                "towards", "upon", "within", "without", "via", "despite", "throughout", "until",
            ],
        ),
        (PosTag::Particle, &["to", "not", "n't"]),
        (
            PosTag::Conjunction,
            &[
                "and", "or", "but", "nor", "so", "yet", "because", "although", "though",
                "while", "whereas", "if", "unless", "whether", "than", "as",
            ],
        ),
        (
            PosTag::Verb,
            &[
                "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
                "having", "do", "does", "did", "will", "would", "shall", "should", "can",
                "could", "may", "might", "must",
            ],
        ),
        (
            PosTag::Adverb,
            &[
                "never", "also", "very", "often", "always", "sometimes", "usually", "however",
                "still", "just", "already", "soon", "here", "there", "now", "then", "too",
                "quite", "rather", "almost", "well", "even", "ever", "only", "again", "once",
                "later", "perhaps",
            ],
        ),
        (
            PosTag::Numeral,
            &[
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
                "eleven", "twelve", "hundred", "thousand", "million", "billion",
            ],
        ),
        (PosTag::Interjection, &["oh", "ah", "hello", "wow"]),
    ];
    for (tag, words) in groups {
        for word in words.iter() {
            map.insert(*word, *tag);
        }
    }
    map
});

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it", "who"];

const MODALS: &[&str] = &[
    "to", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "did",
    "does", "do",
];

/// Words ending in a suffix that would otherwise mistag them
const SUFFIX_EXCEPTIONS: &[&str] = &[
    "family", "supply", "reply", "apply", "ally", "rally", "belly", "jelly", "italy", "july",
    "thing", "king", "ring", "spring", "string", "morning", "evening", "ceiling", "wing",
    "speed", "breed", "greed", "student", "president", "agent", "parent", "event", "talent",
    "client", "continent", "accident", "percent", "component", "opponent", "resident",
    "incident", "music", "topic", "logic", "clinic", "traffic", "republic", "panic", "olive",
    "native", "relative", "detective", "objective", "motive", "representative", "went", "sent",
    "spent", "meant", "bent", "rent", "cent", "tent", "lent", "give", "live", "drive", "arrive",
    "receive", "believe", "achieve", "survive", "table", "cable", "fable", "fish", "dish",
    "wish", "finish", "publish", "establish", "bring", "sing", "nothing", "something",
    "anything", "everything",
];

/// Tags words using a lexicon, suffix heuristics and left context
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag each word, preserving input order
    pub fn tag(&self, words: &[String]) -> Vec<(String, PosTag)> {
        let mut tagged: Vec<(String, PosTag)> = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            let lower = word.to_lowercase();
            let sentence_initial = i == 0
                || tagged
                    .last()
                    .is_some_and(|(w, t)| *t == PosTag::Punctuation && is_terminal(w));

            let tag = match LEXICON.get(lower.as_str()) {
                Some(&tag) => tag,
                None => {
                    let prev = i.checked_sub(1).map(|p| words[p].to_lowercase());
                    let prev_tag = tagged.last().map(|(_, t)| *t);
                    guess_open_class(word, &lower, sentence_initial, prev.as_deref(), prev_tag)
                }
            };
            tagged.push((word.clone(), tag));
        }

        tagged
    }
}

fn guess_open_class(
    word: &str,
    lower: &str,
    sentence_initial: bool,
    prev: Option<&str>,
    prev_tag: Option<PosTag>,
) -> PosTag {
    if !word.chars().any(char::is_alphanumeric) {
        return if word.chars().all(|c| c.is_ascii_punctuation() && !"$%+=<>#&@".contains(c)) {
            PosTag::Punctuation
        } else {
            PosTag::Symbol
        };
    }

    if word
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    {
        return PosTag::Numeral;
    }

    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !sentence_initial {
        return PosTag::ProperNoun;
    }

    if let Some(tag) = suffix_tag(lower) {
        // Gerunds after determiners and adjectives act as nouns
        if tag == PosTag::Verb
            && lower.ends_with("ing")
            && matches!(prev_tag, Some(PosTag::Determiner | PosTag::Adjective))
        {
            return PosTag::Noun;
        }
        return tag;
    }

    if let Some(prev) = prev {
        if SUBJECT_PRONOUNS.contains(&prev) || MODALS.contains(&prev) {
            return PosTag::Verb;
        }
    }

    PosTag::Noun
}

fn suffix_tag(lower: &str) -> Option<PosTag> {
    if lower.chars().count() <= 3 || SUFFIX_EXCEPTIONS.contains(&lower) {
        return None;
    }

    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ional", "ural", "ent", "ic",
    ];
    const NOUN_SUFFIXES: &[&str] = &["ment", "tion", "sion", "ness", "ity", "ism", "ship", "hood"];

    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(PosTag::Noun);
    }
    if lower.ends_with("ly") {
        return Some(PosTag::Adverb);
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some(PosTag::Adjective);
    }
    if lower.ends_with("ize") || lower.ends_with("ify") {
        return Some(PosTag::Verb);
    }
    if lower.chars().count() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        return Some(PosTag::Verb);
    }
    None
}

fn is_terminal(word: &str) -> bool {
    matches!(word, "." | "!" | "?")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(text: &[&str]) -> Vec<PosTag> {
        let words: Vec<String> = text.iter().map(|w| w.to_string()).collect();
        HeuristicTagger::new()
            .tag(&words)
            .into_iter()
            .map(|(_, t)| t)
            .collect()
    }

    #[test]
    fn test_closed_class_words() {
        assert_eq!(
            tag(&["the", "of", "and", "they", "is"]),
            vec![
                PosTag::Determiner,
                PosTag::Preposition,
                PosTag::Conjunction,
                PosTag::Pronoun,
                PosTag::Verb
            ]
        );
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(
            tag(&["quickly", "famous", "independent", "organization", "organize"]),
            vec![
                PosTag::Adverb,
                PosTag::Adjective,
                PosTag::Adjective,
                PosTag::Noun,
                PosTag::Verb
            ]
        );
    }

    #[test]
    fn test_verb_after_pronoun() {
        assert_eq!(
            tag(&["They", "hunt", "at", "night", "."]),
            vec![
                PosTag::Pronoun,
                PosTag::Verb,
                PosTag::Preposition,
                PosTag::Noun,
                PosTag::Punctuation
            ]
        );
    }

    #[test]
    fn test_proper_noun_mid_sentence() {
        assert_eq!(
            tag(&["Cats", "visited", "Paris"]),
            vec![PosTag::Noun, PosTag::Verb, PosTag::ProperNoun]
        );
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(
            tag(&["1,200", "%", ","]),
            vec![PosTag::Numeral, PosTag::Symbol, PosTag::Punctuation]
        );
    }

    #[test]
    fn test_gerund_after_determiner_is_noun() {
        assert_eq!(
            tag(&["the", "building"]),
            vec![PosTag::Determiner, PosTag::Noun]
        );
        assert_eq!(
            tag(&["a", "swimming"]),
            vec![PosTag::Determiner, PosTag::Noun]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tag(&[]).is_empty());
    }
}
