//! Rule-based English lemmatizer
//!
//! Irregular forms are looked up per word class; regular forms are reduced by
//! suffix stripping with a couple of spelling repairs (consonant undoubling,
//! silent-e restoration). Output is always lowercase.

use crate::types::WordClass;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static IRREGULAR_NOUNS: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("halves", "half"),
        ("shoes", "shoe"),
        ("toes", "toe"),
        ("data", "datum"),
        ("indices", "index"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_VERBS: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("am", "be"),
        ("has", "have"),
        ("had", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("made", "make"),
        ("making", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("taking", "take"),
        ("saw", "see"),
        ("seen", "see"),
        ("ran", "run"),
        ("came", "come"),
        ("coming", "come"),
        ("got", "get"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("said", "say"),
        ("began", "begin"),
        ("begun", "begin"),
        ("wrote", "write"),
        ("written", "write"),
        ("became", "become"),
        ("held", "hold"),
        ("led", "lead"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("built", "build"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("caught", "catch"),
        ("taught", "teach"),
        ("fought", "fight"),
        ("left", "leave"),
        ("lost", "lose"),
        ("met", "meet"),
        ("paid", "pay"),
        ("sent", "send"),
        ("spent", "spend"),
        ("stood", "stand"),
        ("told", "tell"),
        ("won", "win"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("flew", "fly"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("drew", "draw"),
        ("drawn", "draw"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("slept", "sleep"),
        ("kept", "keep"),
        ("felt", "feel"),
        ("meant", "mean"),
        ("heard", "hear"),
        ("sold", "sell"),
        ("died", "die"),
        ("dying", "die"),
        ("lying", "lie"),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_ADJECTIVES: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [
            ("better", "good"),
            ("best", "good"),
            ("worse", "bad"),
            ("worst", "bad"),
            ("further", "far"),
            ("furthest", "far"),
            ("farther", "far"),
            ("farthest", "far"),
        ]
        .into_iter()
        .collect()
    });

/// Nouns that end in `s` in their base form
const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "physics", "mathematics", "economics", "politics", "lens",
    "means", "headquarters", "aircraft", "sheep", "fish", "deer",
];

/// Stem endings that take back a silent `e` after `-ed`/`-ing` removal
const SILENT_E_ENDINGS: &[&str] = &["v", "iz", "bl", "c", "dg", "rg", "as", "os", "is"];

/// Stems that take back a silent `e` although their ending says otherwise
const SILENT_E_STEMS: &[&str] = &[
    "creat", "procreat", "recreat", "unit", "reunit", "invit", "excit", "ignit", "incit",
    "cit", "recit", "refus", "accus", "amus", "excus", "confus", "diffus", "fus", "infus",
    "abus", "misus",
];

/// Final consonants that are doubled in the base word, never by inflection
const BASE_DOUBLES: &str = "lsfz";

/// Reduces inflected English words to their dictionary form
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Lemmatize `word` as a member of `class`.
    ///
    /// Returns `None` for tokens with no letters or digits.
    pub fn lemmatize(&self, word: &str, class: WordClass) -> Option<String> {
        let lower = word.to_lowercase();
        if !lower.chars().any(char::is_alphanumeric) {
            return None;
        }

        let lemma = match class {
            WordClass::Noun => lemmatize_noun(&lower),
            WordClass::Verb => lemmatize_verb(&lower),
            WordClass::Adjective => lemmatize_adjective(&lower),
            WordClass::Adverb => lower,
        };
        Some(lemma)
    }
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_NOUNS.get(word) {
        return lemma.to_string();
    }
    if word.len() <= 3 || INVARIANT_NOUNS.contains(&word) {
        return word.to_string();
    }
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if ["sses", "shes", "ches", "xes", "zes", "oes"]
        .iter()
        .any(|s| word.ends_with(s))
    {
        return word[..word.len() - 2].to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

fn lemmatize_verb(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_VERBS.get(word) {
        return lemma.to_string();
    }
    if word.len() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        return format!("{stem}y");
    }
    if ["sses", "shes", "ches", "xes", "zes"]
        .iter()
        .any(|s| word.ends_with(s))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("eed") {
        return word[..word.len() - 1].to_string();
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= 3 {
            return repair_stem(stem);
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= 2 {
            return repair_stem(stem);
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn lemmatize_adjective(word: &str) -> String {
    if let Some(lemma) = IRREGULAR_ADJECTIVES.get(word) {
        return lemma.to_string();
    }
    if word.len() <= 4 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("iest").or_else(|| word.strip_suffix("ier")) {
        return format!("{stem}y");
    }
    for suffix in ["est", "er"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if has_doubled_consonant(stem) {
                return undouble(stem).unwrap_or(stem).to_string();
            }
        }
    }
    word.to_string()
}

fn repair_stem(stem: &str) -> String {
    if let Some(base) = undouble(stem) {
        return base.to_string();
    }
    if takes_silent_e(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// `stem` minus a consonant doubled by inflection (`stopp`, `bigg`).
///
/// Only consonant + single vowel + double consonant qualifies, so base-word
/// doubles such as `add`, `stuff` and `tall` return `None`.
fn undouble(stem: &str) -> Option<&str> {
    let tail: Vec<char> = stem.chars().rev().take(4).collect();
    let &[last, doubled, vowel, onset] = tail.as_slice() else {
        return None;
    };

    let inflected = last == doubled
        && is_consonant(last)
        && !BASE_DOUBLES.contains(last)
        && is_vowel(vowel)
        && is_consonant(onset);
    inflected.then(|| &stem[..stem.len() - last.len_utf8()])
}

fn takes_silent_e(stem: &str) -> bool {
    if SILENT_E_STEMS.contains(&stem) {
        return true;
    }

    let before = |suffix: &str| stem.strip_suffix(suffix).and_then(|s| s.chars().last());
    if stem.ends_with("at") {
        // treat, float
        return !matches!(before("at"), Some('a' | 'e' | 'o'));
    }
    if stem.ends_with("ur") {
        // pour, tour
        return !before("ur").is_some_and(is_vowel);
    }
    if stem.ends_with("us") {
        // cause, use; focus
        return before("us").map_or(true, is_vowel);
    }
    SILENT_E_ENDINGS.iter().any(|e| stem.ends_with(e))
}

fn has_doubled_consonant(stem: &str) -> bool {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => a == b && is_consonant(a),
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}
