// WHY: Couplets are every ordered pair of sentences sharing a known rhyme key,
// minus self-pairs and pairs ending in the same word

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

use crate::rhyme::{last_word, RhymeKey};
use crate::sentence_detector::strip_line_breaks;

/// An ordered pair of sentences whose last words rhyme but differ.
///
/// Sentence text has embedded line breaks removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Couplet {
    pub first_index: usize,
    pub first: String,
    pub second_index: usize,
    pub second: String,
    pub rhyme_key: String,
}

/// Group sentence indices by known rhyme key, each group in ascending index order
pub fn group_by_rhyme_key(keys: &[RhymeKey]) -> HashMap<&str, Vec<usize>> {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, key) in keys.iter().enumerate() {
        if let Some(sound) = key.as_sound() {
            groups.entry(sound).or_default().push(index);
        }
    }
    groups
}

/// Find all couplets among `sentences`, given their index-aligned rhyme keys.
///
/// Output is ordered by first index, then by second index. Both `(a, b)` and `(b, a)` are
/// reported. Sentences with an unknown key never appear.
pub fn match_couplets<S: AsRef<str>>(sentences: &[S], keys: &[RhymeKey]) -> Result<Vec<Couplet>> {
    if sentences.len() != keys.len() {
        bail!(
            "Got {} sentences but {} rhyme keys; they must be index-aligned",
            sentences.len(),
            keys.len()
        );
    }

    let groups = group_by_rhyme_key(keys);
    debug!("Grouped sentences into {} rhyme keys", groups.len());

    // Only sentences with a known key are ever compared or printed
    let prepared: Vec<Option<(String, String)>> = sentences
        .iter()
        .zip(keys)
        .map(|(sentence, key)| {
            key.as_sound().map(|_| {
                let text = sentence.as_ref();
                (last_word(text), strip_line_breaks(text))
            })
        })
        .collect();

    let mut couplets = Vec::new();
    for (i, key) in keys.iter().enumerate() {
        let (Some(sound), Some((word, text))) = (key.as_sound(), &prepared[i]) else {
            continue;
        };
        let Some(group) = groups.get(sound) else {
            continue;
        };

        for &j in group {
            if j == i {
                continue;
            }
            let Some((other_word, other_text)) = &prepared[j] else {
                continue;
            };
            if word == other_word {
                continue;
            }
            couplets.push(Couplet {
                first_index: i,
                first: text.clone(),
                second_index: j,
                second: other_text.clone(),
                rhyme_key: sound.to_string(),
            });
        }
    }

    debug!("Matched {} couplets", couplets.len());
    Ok(couplets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sound(s: &str) -> RhymeKey {
        RhymeKey::Sound(s.to_string())
    }

    fn pairs(couplets: &[Couplet]) -> Vec<(usize, usize)> {
        couplets.iter().map(|c| (c.first_index, c.second_index)).collect()
    }

    #[test]
    fn test_basic_pairing_is_symmetric() {
        let sentences = ["The cat sat on the mat.", "I saw a bat.", "Nothing rhymes with this."];
        let keys = [sound("T"), sound("T"), sound("S")];

        let couplets = match_couplets(&sentences, &keys).unwrap();
        assert_eq!(pairs(&couplets), vec![(0, 1), (1, 0)]);
        assert_eq!(couplets[0].first, "The cat sat on the mat.");
        assert_eq!(couplets[0].second, "I saw a bat.");
        assert_eq!(couplets[0].rhyme_key, "T");
    }

    #[test]
    fn test_unknown_keys_never_pair() {
        let sentences = ["One jabberwock.", "Two jabberwocks.", "A cat."];
        let keys = [RhymeKey::Unknown, RhymeKey::Unknown, sound("T")];
        assert!(match_couplets(&sentences, &keys).unwrap().is_empty());
    }

    #[test]
    fn test_same_last_word_is_not_a_couplet() {
        let sentences = ["Sit on the mat.", "Stand on the MAT!", "Look at the bat."];
        let keys = [sound("T"), sound("T"), sound("T")];

        let couplets = match_couplets(&sentences, &keys).unwrap();
        assert_eq!(pairs(&couplets), vec![(0, 2), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_output_order() {
        let sentences = ["a cat.", "a dog.", "a bat.", "a log.", "a hat."];
        let keys = [sound("T"), sound("G"), sound("T"), sound("G"), sound("T")];

        let couplets = match_couplets(&sentences, &keys).unwrap();
        assert_eq!(
            pairs(&couplets),
            vec![(0, 2), (0, 4), (1, 3), (2, 0), (2, 4), (3, 1), (4, 0), (4, 2)]
        );
    }

    #[test]
    fn test_line_breaks_removed_from_output() {
        let sentences = ["Brought death into\nthe world.", "Sing, heavenly\r\nMuse, unfurled."];
        let keys = [sound("LD"), sound("LD")];

        let couplets = match_couplets(&sentences, &keys).unwrap();
        assert_eq!(couplets[0].first, "Brought death intothe world.");
        assert_eq!(couplets[0].second, "Sing, heavenlyMuse, unfurled.");
    }

    #[test]
    fn test_last_word_on_its_own_line() {
        // A line break separates words, so sentence 0 ends in "mat" like sentence 1
        let sentences = ["Sing of the\nmat.", "Sit on the mat.", "Look at the\r\nhat."];
        let keys = [sound("T"), sound("T"), sound("T")];

        let couplets = match_couplets(&sentences, &keys).unwrap();
        assert_eq!(pairs(&couplets), vec![(0, 2), (1, 2), (2, 0), (2, 1)]);
        assert_eq!(couplets[0].first, "Sing of themat.");
        assert_eq!(couplets[0].second, "Look at thehat.");
    }

    #[test]
    fn test_mismatched_lengths_are_an_error() {
        let sentences = ["a cat.", "a bat."];
        let keys = [sound("T")];
        assert!(match_couplets(&sentences, &keys).is_err());
    }

    #[test]
    fn test_empty_input() {
        let sentences: [&str; 0] = [];
        assert!(match_couplets(&sentences, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_grouping() {
        let keys = [sound("T"), RhymeKey::Unknown, sound("T"), sound("S")];
        let groups = group_by_rhyme_key(&keys);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["T"], vec![0, 2]);
        assert_eq!(groups["S"], vec![3]);
    }
}
