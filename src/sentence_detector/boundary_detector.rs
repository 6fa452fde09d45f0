// WHY: Single compiled regex scan over the text, with abbreviation post-filtering
// and incremental line/column tracking so the whole pass stays O(n)

use anyhow::{bail, Result};
use regex_automata::{meta::Regex, Input};
use tracing::{debug, info};

use super::{AbbreviationChecker, DetectedSentenceBorrowed, SentenceBoundaryRules, Span};

/// Incremental position tracking over the source bytes
/// WHY: Sentence positions only move forward, so each byte is visited once
#[derive(Debug)]
struct PositionTracker<'a> {
    text_bytes: &'a [u8],
    current_byte_pos: usize,
    current_line: usize,
    current_col: usize,
}

impl<'a> PositionTracker<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text_bytes: text.as_bytes(),
            current_byte_pos: 0,
            current_line: 1,
            current_col: 1,
        }
    }

    /// Advance to target byte position and return its 1-based (line, col)
    fn advance_to_byte(&mut self, target_byte_pos: usize) -> Result<(usize, usize)> {
        if target_byte_pos < self.current_byte_pos {
            bail!(
                "Cannot seek backwards: current {} > target {}",
                self.current_byte_pos,
                target_byte_pos
            );
        }
        if target_byte_pos > self.text_bytes.len() {
            bail!(
                "Target byte position {} exceeds text length {}",
                target_byte_pos,
                self.text_bytes.len()
            );
        }

        while self.current_byte_pos < target_byte_pos {
            let byte = self.text_bytes[self.current_byte_pos];

            // ASCII (0xxxxxxx) or start of multi-byte (11xxxxxx); continuation bytes don't count
            if (byte & 0x80) == 0 || (byte & 0xC0) == 0xC0 {
                if byte == b'\n' {
                    self.current_line += 1;
                    self.current_col = 1;
                } else {
                    self.current_col += 1;
                }
            }

            self.current_byte_pos += 1;
        }

        Ok((self.current_line, self.current_col))
    }
}

/// Compiled boundary pattern plus the rules it was built from
pub struct BoundaryScanner {
    regex: Regex,
    rules: SentenceBoundaryRules,
    abbreviation_checker: AbbreviationChecker,
}

impl BoundaryScanner {
    /// Compile the boundary pattern for the given rules
    pub fn new(rules: SentenceBoundaryRules) -> Result<Self> {
        let pattern = build_boundary_pattern(&rules)?;
        debug!("Compiling sentence boundary pattern: {}", pattern);

        let regex = Regex::new(&pattern)?;
        info!(
            paragraph_breaks = rules.paragraph_breaks,
            "Compiled sentence boundary pattern"
        );

        Ok(Self {
            regex,
            rules,
            abbreviation_checker: AbbreviationChecker::new(),
        })
    }

    pub fn rules(&self) -> &SentenceBoundaryRules {
        &self.rules
    }

    /// Detect sentences, borrowing each one from `text`
    pub fn detect_sentences_borrowed<'a>(&self, text: &'a str) -> Result<Vec<DetectedSentenceBorrowed<'a>>> {
        debug!("Starting sentence detection on {} bytes", text.len());

        let mut sentences = Vec::new();
        let mut tracker = PositionTracker::new(text);
        let mut sentence_start = skip_whitespace(text, 0);
        let mut search_pos = sentence_start;

        while search_pos < text.len() {
            let input = Input::new(text).range(search_pos..);
            let Some(found) = self.regex.search(&input) else {
                break;
            };
            let matched = &text[found.start()..found.end()];

            if self.is_terminal_match(matched) {
                let (sep_start, sep_end) = separator_bounds(matched);
                let sentence_end = found.start() + sep_start;
                let next_start = found.start() + sep_end;

                let candidate = &text[sentence_start..sentence_end];
                if self.abbreviation_checker.ends_with_non_terminal_abbreviation(candidate) {
                    debug!("Boundary after abbreviation ignored at byte {}", found.start());
                } else {
                    push_sentence(text, sentence_start, sentence_end, &mut tracker, &mut sentences)?;
                    sentence_start = next_start;
                }
                search_pos = next_start;
            } else {
                // Blank-line boundary: only compiled in when paragraph_breaks is set
                push_sentence(text, sentence_start, found.start(), &mut tracker, &mut sentences)?;
                sentence_start = found.end();
                search_pos = found.end();
            }
        }

        if sentence_start < text.len() {
            push_sentence(text, sentence_start, text.len(), &mut tracker, &mut sentences)?;
        }

        info!("Detected {} sentences", sentences.len());
        Ok(sentences)
    }

    fn is_terminal_match(&self, matched: &str) -> bool {
        matched
            .chars()
            .next()
            .is_some_and(|ch| self.rules.end_punctuation.contains(&ch))
    }
}

/// Build the boundary regex from the configured character sets
fn build_boundary_pattern(rules: &SentenceBoundaryRules) -> Result<String> {
    if rules.end_punctuation.is_empty() {
        bail!("Sentence boundary rules need at least one end punctuation character");
    }

    let end_punct = format!("[{}]+", char_class(&rules.end_punctuation));
    let closing = optional_run(&rules.closing_punctuation);
    let openers: Vec<char> = rules
        .opening_quotes
        .iter()
        .chain(rules.opening_parentheticals.iter())
        .copied()
        .collect();
    let opening = optional_run(&openers);
    let sentence_start = r"[\p{Lu}0-9]";

    let terminal_boundary = format!(r"{end_punct}{closing}\s+{opening}{sentence_start}");
    if rules.paragraph_breaks {
        let blank_line = r"\r?\n[ \t]*\r?\n\s*";
        Ok(format!("(?:{terminal_boundary})|(?:{blank_line})"))
    } else {
        Ok(terminal_boundary)
    }
}

/// Escape each char as `\x{..}` so any punctuation is safe inside a class
fn char_class(chars: &[char]) -> String {
    chars.iter().map(|&ch| format!("\\x{{{:X}}}", ch as u32)).collect()
}

fn optional_run(chars: &[char]) -> String {
    if chars.is_empty() {
        String::new()
    } else {
        format!("[{}]*", char_class(chars))
    }
}

/// Offsets within a terminal match where the whitespace separator starts and ends
fn separator_bounds(matched: &str) -> (usize, usize) {
    let mut sep_start = None;
    for (i, ch) in matched.char_indices() {
        match (sep_start, ch.is_whitespace()) {
            (None, true) => sep_start = Some(i),
            (Some(start), false) => return (start, i),
            _ => {}
        }
    }
    let start = sep_start.unwrap_or(matched.len());
    (start, matched.len())
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + (rest.len() - rest.trim_start().len())
}

/// Trim the byte range and record it as the next sentence, skipping empty ranges
fn push_sentence<'a>(
    text: &'a str,
    start: usize,
    end: usize,
    tracker: &mut PositionTracker<'a>,
    sentences: &mut Vec<DetectedSentenceBorrowed<'a>>,
) -> Result<()> {
    let region = &text[start..end];
    let content = region.trim();
    let Some(last_char) = content.chars().next_back() else {
        return Ok(());
    };

    let content_start = start + (region.len() - region.trim_start().len());
    let last_char_start = content_start + content.len() - last_char.len_utf8();

    let (start_line, start_col) = tracker.advance_to_byte(content_start)?;
    let (end_line, end_col) = tracker.advance_to_byte(last_char_start)?;

    sentences.push(DetectedSentenceBorrowed {
        index: sentences.len(),
        raw_content: content,
        span: Span {
            start_line,
            start_col,
            end_line,
            end_col,
        },
    });
    Ok(())
}
