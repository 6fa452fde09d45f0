// WHY: Abbreviations whose trailing period must not end a sentence
// A boundary candidate directly after one of these is a false split

use std::collections::HashSet;

/// Title abbreviations that precede proper nouns, e.g. "Dr. Smith", "St. Paul"
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "St.", "Mt.", "Rev.", "Capt.", "Col.",
    "Gen.", "Lt.", "Sgt.", "Gov.", "Hon.",
];

/// Lookup for words that suppress a sentence boundary
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    /// Create new abbreviation checker with the default title set
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Check if a word is a title abbreviation (causes false positives with proper nouns)
    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    /// Check if a word is a single-letter initial such as "J." in "J. Milton"
    ///
    /// The pronoun "I." ends sentences far more often than it abbreviates a name.
    pub fn is_initial(&self, word: &str) -> bool {
        let mut chars = word.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some('.'), None) if letter.is_uppercase() && letter != 'I'
        )
    }

    /// Check if text ends with a word whose period is not a sentence end
    /// WHY: Examines the last word with surrounding quotes stripped
    pub fn ends_with_non_terminal_abbreviation(&self, text: &str) -> bool {
        if let Some(last_word) = text.split_whitespace().last() {
            let clean_word = last_word.trim_start_matches(|c: char| {
                matches!(c, '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[')
            });
            self.is_title_abbreviation(clean_word) || self.is_initial(clean_word)
        } else {
            false
        }
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}
