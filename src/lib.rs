pub mod couplet;
pub mod output;
pub mod pipeline;
pub mod pronunciation;
pub mod reader;
pub mod rhyme;
pub mod sentence_detector;

// Re-export main types for convenient access
pub use sentence_detector::{DetectedSentenceBorrowed, Segmenter, SentenceBoundaryRules, SentenceDetector, Span};

pub use pronunciation::{CmuDict, DictionaryError, Pronunciation, PronunciationSource};

pub use rhyme::{last_word, RhymeKey, RhymeKeyExtractor, RhymeStrength, DEFAULT_RHYME_STRENGTH};

pub use couplet::{group_by_rhyme_key, match_couplets, Couplet};

pub use pipeline::{CoupletFinder, CoupletReport, FinderConfig, RunStats};
