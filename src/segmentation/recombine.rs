//! Greedy longest-match recombination.
use log::debug;

use crate::dictionary::Dictionary;

/// Default maximum number of morphemes in a word.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 20;

/// A matched word: the morphemes `start..end` joined together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Regroups morphemes into dictionary words.
///
/// Left to right, at each position the longest run of at most `max_word_length` morphemes
/// whose concatenation is a dictionary key is emitted, and the cursor jumps after it.
/// Longest match always wins: there is no frequency nor POS based tie-breaking, and no backtracking.
///
/// A morpheme that does not start any dictionary word is dropped:
/// it is *not* emitted as a single-character word.
/// This loses some text (unknown names, some inflections), and is kept as is
/// to stay reproducible with already collected data.
#[derive(Debug, Clone, Copy)]
pub struct WordRecombiner<'a> {
    dictionary: &'a Dictionary,
    max_word_length: usize,
}

impl<'a> WordRecombiner<'a> {
    /// `max_word_length` is clamped to at least 1.
    pub fn new(dictionary: &'a Dictionary, max_word_length: usize) -> Self {
        Self {
            dictionary,
            max_word_length: max_word_length.max(1),
        }
    }

    pub fn with_default_length(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, DEFAULT_MAX_WORD_LENGTH)
    }

    /// Get matched words, in text order.
    pub fn recombine<S: AsRef<str>>(&self, morphemes: &[S]) -> Vec<String> {
        self.spans(morphemes)
            .into_iter()
            .map(|span| span.text)
            .collect()
    }

    /// Get matched words along with the morpheme range they cover.
    pub fn spans<S: AsRef<str>>(&self, morphemes: &[S]) -> Vec<Span> {
        let mut spans = Vec::new();
        // candidate buffer and end offset (in bytes) of each morpheme in it
        let mut buf = String::new();
        let mut ends = Vec::with_capacity(self.max_word_length.min(morphemes.len()));

        let mut start = 0;
        while start < morphemes.len() {
            let stop = morphemes.len().min(start.saturating_add(self.max_word_length));

            buf.clear();
            ends.clear();
            for m in &morphemes[start..stop] {
                buf.push_str(m.as_ref());
                ends.push(buf.len());
            }

            // longest candidate first
            let found = ends
                .iter()
                .enumerate()
                .rev()
                .find(|(_, end)| self.dictionary.contains(&buf[..**end]));

            match found {
                Some((idx, end)) => {
                    let end_morpheme = start + idx + 1;
                    spans.push(Span {
                        text: buf[..*end].to_string(),
                        start,
                        end: end_morpheme,
                    });
                    start = end_morpheme;
                }
                None => start += 1,
            }
        }

        debug!(
            "recombined {} morphemes into {} words",
            morphemes.len(),
            spans.len()
        );
        spans
    }
}
