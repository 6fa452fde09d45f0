//! Word pronunciations.
//!
//! The rhyme pipeline only needs one capability from a pronunciation dictionary: given a
//! lowercase word, list its pronunciations in dictionary order. That capability is the
//! [`PronunciationSource`] trait. [`CmuDict`] implements it over a file in CMU Pronouncing
//! Dictionary format, and a plain `HashMap` implements it for fixed test data.
//!
//! Phonemes are ARPABET symbols as written in the dictionary, e.g. `AE1`, `N`, `AH0`.
//! Vowels carry a stress digit; consonants do not.
//!
//! Related references:
//!
//! * <https://github.com/cmusphinx/cmudict>
//! * <https://en.wikipedia.org/wiki/ARPABET>
use std::collections::HashMap;
use std::fmt;

pub mod cmudict;

pub use cmudict::{CmuDict, DictionaryError};

/// One pronunciation variant of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pronunciation {
    /// The variant number, e.g. 2 for the term `aluminium(2)`. Default 1.
    pub variant: u32,
    /// The individual phonemes in spoken order, e.g. `["M", "AE1", "T"]`.
    pub phonemes: Vec<String>,
}

impl Pronunciation {
    /// Creates a first-variant pronunciation from phoneme symbols.
    pub fn new<I, S>(phonemes: I) -> Pronunciation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pronunciation {
            variant: 1,
            phonemes: phonemes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the last `n` phonemes, or all of them if there are fewer than `n`.
    pub fn trailing(&self, n: usize) -> &[String] {
        let start = self.phonemes.len().saturating_sub(n);
        &self.phonemes[start..]
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phonemes.join(" "))
    }
}

/// Looks up the pronunciations of a word.
pub trait PronunciationSource {
    /// All pronunciation variants of `word` in dictionary order; empty if the word is unknown.
    ///
    /// `word` is expected to be lowercase with sentence punctuation already removed.
    fn pronunciations(&self, word: &str) -> &[Pronunciation];

    /// The first listed pronunciation, which is the only one rhyme detection consults.
    fn first_pronunciation(&self, word: &str) -> Option<&Pronunciation> {
        self.pronunciations(word).first()
    }
}

impl PronunciationSource for HashMap<String, Vec<Pronunciation>> {
    fn pronunciations(&self, word: &str) -> &[Pronunciation] {
        self.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<T: PronunciationSource + ?Sized> PronunciationSource for &T {
    fn pronunciations(&self, word: &str) -> &[Pronunciation] {
        (**self).pronunciations(word)
    }
}
