//! A phonetic dictionary in CMU Pronouncing Dictionary format.
//!
//! Entries have a term and a pronunciation, with the option of several different
//! pronunciations for a word:
//!
//! ```text
//! aluminium AH0 L UW1 M IH0 N AH0 M
//! aluminium(2) AE2 L Y UW1 M IH0 N AH0 M
//! ```
//!
//! Everything after `#` is a comment, and lines starting with `;;;` are comments in the
//! older distribution of the file.
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use regex_automata::meta::Regex;
use thiserror::Error;
use tracing::{debug, info};

use super::{Pronunciation, PronunciationSource};

/// Errors raised while loading a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: malformed term {term:?}")]
    MalformedTerm { line: usize, term: String },

    #[error("Line {line}: term {term:?} has no phonemes")]
    MissingPhonemes { line: usize, term: String },

    #[error("Line {line}: invalid phoneme {phoneme:?}")]
    InvalidPhoneme { line: usize, phoneme: String },

    #[error("Failed to compile dictionary line grammar: {0}")]
    Grammar(#[from] regex_automata::meta::BuildError),
}

/// Parses single dictionary lines.
struct LineParser {
    // Term with optional (N) suffix, e.g. "aalborg(2)". Group 1 is the term, group 2 the integer.
    // Terms may themselves contain parentheses, e.g. "(paren" and ")close-paren" in 0.7b.
    term_re: Regex,
    // Phonemes like "AA1", "N" and "AH0". A trailing digit marks a vowel sound.
    phoneme_re: Regex,
}

impl LineParser {
    fn new() -> Result<LineParser, DictionaryError> {
        Ok(LineParser {
            term_re: Regex::new(r"^([^\s#]+?)(?:\(([0-9]+)\))?$")?,
            phoneme_re: Regex::new(r"^[A-Z]+[0-9]?$")?,
        })
    }

    /// Parses one line into `(term, pronunciation)`. Blank and comment lines yield `None`.
    ///
    /// Example inputs:
    /// ```text
    /// 'twas T W AH1 Z
    /// a(2) EY1
    /// a.m. EY2 EH1 M
    /// achill AE1 K IH0 L # place, irish
    /// ```
    fn parse(&self, line: &str, line_num: usize) -> Result<Option<(String, Pronunciation)>, DictionaryError> {
        if line.trim_start().starts_with(";;;") {
            return Ok(None);
        }
        // Strip comments if present ('#' through the end of line).
        let content = match line.find('#') {
            Some(comment_start) => &line[..comment_start],
            None => line,
        };

        let mut tokens = content.split_whitespace();
        let Some(raw_term) = tokens.next() else {
            return Ok(None);
        };

        let mut caps = self.term_re.create_captures();
        self.term_re.captures(raw_term, &mut caps);
        let term_span = caps.get_group(1).ok_or_else(|| DictionaryError::MalformedTerm {
            line: line_num,
            term: raw_term.to_string(),
        })?;
        let variant = match caps.get_group(2) {
            Some(span) => raw_term[span.range()]
                .parse::<u32>()
                .map_err(|_| DictionaryError::MalformedTerm {
                    line: line_num,
                    term: raw_term.to_string(),
                })?,
            None => 1,
        };
        let term = raw_term[term_span.range()].to_lowercase();

        let mut phonemes = Vec::new();
        for ph in tokens {
            if !self.phoneme_re.is_match(ph) {
                return Err(DictionaryError::InvalidPhoneme {
                    line: line_num,
                    phoneme: ph.to_string(),
                });
            }
            phonemes.push(ph.to_string());
        }
        if phonemes.is_empty() {
            return Err(DictionaryError::MissingPhonemes { line: line_num, term });
        }

        Ok(Some((term, Pronunciation { variant, phonemes })))
    }
}

/// An in-memory pronunciation dictionary.
///
/// Build one explicitly (from a file or from lines) and pass it by reference to whatever needs
/// lookups. Each word's variants are kept sorted by variant number, ties in insertion order.
#[derive(Debug, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl CmuDict {
    /// Creates a new empty dictionary.
    pub fn new() -> CmuDict {
        CmuDict::default()
    }

    /// Creates a new dictionary populated from the given file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CmuDict, DictionaryError> {
        let path = path.as_ref();
        info!("Loading pronunciation dictionary from {}", path.display());

        let io_error = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path).map_err(io_error)?;
        // Older releases carry a few Latin-1 bytes, so lines are decoded lossily
        let lines = BufReader::new(file)
            .split(b'\n')
            .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
            .collect::<Result<Vec<String>, _>>()
            .map_err(io_error)?;

        let dict = CmuDict::from_lines(&lines)?;
        info!(
            words = dict.len(),
            pronunciations = dict.pronunciation_count(),
            "Loaded pronunciation dictionary"
        );
        Ok(dict)
    }

    /// Creates a new dictionary from lines in the dictionary file format.
    pub fn from_lines<I, S>(lines: I) -> Result<CmuDict, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parser = LineParser::new()?;
        let mut dict = CmuDict::new();
        for (i, line) in lines.into_iter().enumerate() {
            if let Some((term, pronunciation)) = parser.parse(line.as_ref(), i + 1)? {
                dict.insert(term, pronunciation);
            }
        }
        debug!("Parsed {} dictionary words", dict.len());
        Ok(dict)
    }

    /// Inserts a single pronunciation, keeping the word's variants ordered.
    pub fn insert(&mut self, word: impl Into<String>, pronunciation: Pronunciation) {
        let variants = self.entries.entry(word.into()).or_default();
        let pos = variants.partition_point(|p| p.variant <= pronunciation.variant);
        variants.insert(pos, pronunciation);
    }

    /// Returns the number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of pronunciations across all words.
    pub fn pronunciation_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl PronunciationSource for CmuDict {
    fn pronunciations(&self, word: &str) -> &[Pronunciation] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}
