// WHY: Sentence segmentation is consumed through the Segmenter trait so the rhyme
// pipeline can run over fixed fake sentences as easily as over the shipped detector

use anyhow::Result;

pub mod abbreviations;
pub mod boundary_detector;
pub mod normalization;

// Re-export core types
pub use abbreviations::AbbreviationChecker;
pub use boundary_detector::BoundaryScanner;
pub use normalization::{strip_line_breaks, strip_line_breaks_into};

/// Position in a text file using 1-based line and column numbers.
///
/// The end position is inclusive: it names the column of the sentence's last character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Span {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct SentenceBoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// Closing quotes and brackets that stay attached to the sentence they end
    pub closing_punctuation: Vec<char>,
    /// Characters considered opening quotes
    pub opening_quotes: Vec<char>,
    /// Characters considered opening parentheticals
    pub opening_parentheticals: Vec<char>,
    /// Whether a blank line ends a sentence even without terminal punctuation
    pub paragraph_breaks: bool,
}

impl Default for SentenceBoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!'],
            closing_punctuation: vec!['"', '\'', '\u{201D}', '\u{2019}', ')', ']', '}'],
            opening_quotes: vec!['"', '\'', '\u{201C}', '\u{2018}'],
            opening_parentheticals: vec!['(', '[', '{'],
            paragraph_breaks: false,
        }
    }
}

/// A sentence borrowed from the source text
#[derive(Debug, Clone)]
pub struct DetectedSentenceBorrowed<'a> {
    pub index: usize,
    pub raw_content: &'a str,
    pub span: Span,
}

impl<'a> DetectedSentenceBorrowed<'a> {
    /// Get raw content exactly as it appears in the source
    pub fn raw(&self) -> &'a str {
        self.raw_content
    }

    /// Content with embedded line breaks deleted, as printed in couplet output
    pub fn display_text(&self) -> String {
        strip_line_breaks(self.raw_content)
    }
}

impl AsRef<str> for DetectedSentenceBorrowed<'_> {
    fn as_ref(&self) -> &str {
        self.raw_content
    }
}

/// Splits a text into an ordered sequence of sentences.
///
/// Implementations must return sentences in source order with `index` counting up from 0.
pub trait Segmenter {
    fn segment<'a>(&self, text: &'a str) -> Result<Vec<DetectedSentenceBorrowed<'a>>>;
}

/// Rule-based sentence detector
pub struct SentenceDetector {
    scanner: BoundaryScanner,
}

impl SentenceDetector {
    /// Create new sentence detector with custom rules
    pub fn new(rules: SentenceBoundaryRules) -> Result<Self> {
        Ok(Self {
            scanner: BoundaryScanner::new(rules)?,
        })
    }

    /// Create sentence detector with default rules
    pub fn with_default_rules() -> Result<Self> {
        Self::new(SentenceBoundaryRules::default())
    }

    /// Detect sentences, borrowing each one from `text`
    pub fn detect_sentences_borrowed<'a>(&self, text: &'a str) -> Result<Vec<DetectedSentenceBorrowed<'a>>> {
        self.scanner.detect_sentences_borrowed(text)
    }

    /// Rules this detector was compiled from
    pub fn rules(&self) -> &SentenceBoundaryRules {
        self.scanner.rules()
    }
}

impl Segmenter for SentenceDetector {
    fn segment<'a>(&self, text: &'a str) -> Result<Vec<DetectedSentenceBorrowed<'a>>> {
        self.detect_sentences_borrowed(text)
    }
}
