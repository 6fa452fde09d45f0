// WHY: One entry point that runs segmentation, rhyme keying and matching over a text,
// with the segmenter and dictionary built once by the caller and borrowed here

use std::collections::HashSet;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::couplet::{match_couplets, Couplet};
use crate::pronunciation::PronunciationSource;
use crate::rhyme::{RhymeKey, RhymeKeyExtractor, RhymeStrength};
use crate::sentence_detector::{DetectedSentenceBorrowed, Segmenter};

/// Configuration for couplet finding
#[derive(Debug, Clone, Copy, Default)]
pub struct FinderConfig {
    /// Number of trailing phonemes compared
    pub strength: RhymeStrength,
}

/// Per-run counters and timings
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Number of characters in the analyzed text
    pub chars_processed: u64,
    /// Number of sentences produced by the segmenter
    pub sentences_detected: u64,
    /// Sentences whose last word has a pronunciation
    pub sentences_with_known_key: u64,
    /// Distinct known rhyme keys
    pub distinct_rhyme_keys: u64,
    /// Number of couplets reported
    pub couplets_found: u64,
    /// Sentence detection time in milliseconds
    pub segmentation_time_ms: u64,
    /// Rhyme keying plus matching time in milliseconds
    pub matching_time_ms: u64,
}

/// Everything derived from one text
#[derive(Debug)]
pub struct CoupletReport<'t> {
    pub sentences: Vec<DetectedSentenceBorrowed<'t>>,
    /// Index-aligned with `sentences`
    pub keys: Vec<RhymeKey>,
    pub couplets: Vec<Couplet>,
    pub stats: RunStats,
}

/// Finds couplets using a borrowed segmenter and pronunciation source
pub struct CoupletFinder<'a, S: ?Sized, P: ?Sized> {
    segmenter: &'a S,
    dictionary: &'a P,
    config: FinderConfig,
}

impl<'a, S, P> CoupletFinder<'a, S, P>
where
    S: Segmenter + ?Sized,
    P: PronunciationSource + ?Sized,
{
    pub fn new(segmenter: &'a S, dictionary: &'a P, config: FinderConfig) -> Self {
        Self {
            segmenter,
            dictionary,
            config,
        }
    }

    pub fn config(&self) -> FinderConfig {
        self.config
    }

    /// Rhyme keys for sentences, index-aligned
    pub fn rhyme_keys<T: AsRef<str>>(&self, sentences: &[T]) -> Vec<RhymeKey> {
        let extractor = RhymeKeyExtractor::new(self.dictionary, self.config.strength);
        sentences
            .iter()
            .map(|sentence| extractor.key_for_sentence(sentence.as_ref()))
            .collect()
    }

    /// Run the full pipeline over `text`
    pub fn find<'t>(&self, text: &'t str) -> Result<CoupletReport<'t>> {
        info!(
            strength = self.config.strength.get(),
            "Looking for couplets in {} bytes of text",
            text.len()
        );

        let segmentation_start = Instant::now();
        let sentences = self.segmenter.segment(text)?;
        let segmentation_time = segmentation_start.elapsed();
        debug!("Segmented {} sentences in {:?}", sentences.len(), segmentation_time);

        let matching_start = Instant::now();
        let keys = self.rhyme_keys(&sentences);
        let couplets = match_couplets(&sentences, &keys)?;
        let matching_time = matching_start.elapsed();

        let known: Vec<&str> = keys.iter().filter_map(RhymeKey::as_sound).collect();
        let distinct: HashSet<&str> = known.iter().copied().collect();

        let stats = RunStats {
            chars_processed: text.chars().count() as u64,
            sentences_detected: sentences.len() as u64,
            sentences_with_known_key: known.len() as u64,
            distinct_rhyme_keys: distinct.len() as u64,
            couplets_found: couplets.len() as u64,
            segmentation_time_ms: segmentation_time.as_millis() as u64,
            matching_time_ms: matching_time.as_millis() as u64,
        };

        info!(
            sentences = stats.sentences_detected,
            known_keys = stats.sentences_with_known_key,
            couplets = stats.couplets_found,
            "Couplet search complete"
        );

        Ok(CoupletReport {
            sentences,
            keys,
            couplets,
            stats,
        })
    }
}
