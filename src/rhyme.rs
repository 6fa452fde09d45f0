// WHY: A rhyme key is the concatenated trailing phonemes of a sentence's last word;
// equal keys mark candidate rhymes

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::pronunciation::PronunciationSource;

/// Number of trailing phonemes compared when no strength is given
pub const DEFAULT_RHYME_STRENGTH: usize = 3;

/// Punctuation removed from a last word before lookup
const STRIPPED_PUNCTUATION: &[char] = &['!', '.', '?'];

/// Returns a sentence's last word with `!`, `.` and `?` removed, lowercased.
///
/// The last word is the final whitespace-delimited token, so the result never contains
/// whitespace. A trailing token made only of punctuation yields an empty string.
pub fn last_word(sentence: &str) -> String {
    let token = sentence.split_whitespace().next_back().unwrap_or("");
    token.replace(STRIPPED_PUNCTUATION, "").to_lowercase()
}

/// How many trailing phonemes make up a rhyme key. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RhymeStrength(NonZeroUsize);

impl RhymeStrength {
    pub fn new(phonemes: usize) -> Result<Self> {
        NonZeroUsize::new(phonemes)
            .map(Self)
            .ok_or_else(|| anyhow!("Rhyme strength must be at least 1"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for RhymeStrength {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_RHYME_STRENGTH - 1))
    }
}

impl FromStr for RhymeStrength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let phonemes: usize = s
            .trim()
            .parse()
            .with_context(|| format!("Rhyme strength {s:?} is not a non-negative integer"))?;
        Self::new(phonemes)
    }
}

impl fmt::Display for RhymeStrength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The rhyme sound of a sentence, or `Unknown` when its last word has no pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RhymeKey {
    Sound(String),
    Unknown,
}

impl RhymeKey {
    pub fn as_sound(&self) -> Option<&str> {
        match self {
            RhymeKey::Sound(sound) => Some(sound),
            RhymeKey::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RhymeKey::Unknown)
    }
}

impl fmt::Display for RhymeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RhymeKey::Sound(sound) => write!(f, "{sound}"),
            RhymeKey::Unknown => write!(f, "<unknown>"),
        }
    }
}

/// Maps sentences to rhyme keys using a pronunciation source.
pub struct RhymeKeyExtractor<'d, P: ?Sized> {
    dictionary: &'d P,
    strength: RhymeStrength,
}

impl<'d, P: PronunciationSource + ?Sized> RhymeKeyExtractor<'d, P> {
    pub fn new(dictionary: &'d P, strength: RhymeStrength) -> Self {
        Self { dictionary, strength }
    }

    pub fn strength(&self) -> RhymeStrength {
        self.strength
    }

    /// Rhyme key of an already-normalized word.
    ///
    /// Only the first pronunciation variant is consulted.
    pub fn key_for_word(&self, word: &str) -> RhymeKey {
        match self.dictionary.first_pronunciation(word) {
            Some(pronunciation) => RhymeKey::Sound(pronunciation.trailing(self.strength.get()).concat()),
            None => RhymeKey::Unknown,
        }
    }

    /// Rhyme key of a sentence's last word.
    pub fn key_for_sentence(&self, sentence: &str) -> RhymeKey {
        self.key_for_word(&last_word(sentence))
    }
}
