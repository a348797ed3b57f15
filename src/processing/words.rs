//! Word assembly.
//!
//! For each text unit of a chunk:
//! 1. morphemes are extracted (a failing unit is skipped),
//! 1. non-Japanese characters are removed,
//! 1. morphemes are regrouped into dictionary words,
//! 1. words are tagged and romanized, and words with an excluded head POS are dropped.
use chrono::NaiveDateTime;
use log::{debug, warn};

use super::{ChunkProcessor, TextUnit, Word};
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::filtering::{clean_morphemes, ExcludedPos, Filter};
use crate::pos;
use crate::romanize::KanaRomanizer;
use crate::segmentation::WordRecombiner;
use crate::tokenizer::{Morpheme, MorphemeExtractor, TokenizerFactory};

pub struct WordAssembler<'a, F: TokenizerFactory> {
    factory: &'a F,
    dictionary: &'a Dictionary,
    extractor: MorphemeExtractor,
    recombiner: WordRecombiner<'a>,
    romanizer: KanaRomanizer,
    excluded: ExcludedPos,
}

impl<'a, F: TokenizerFactory> WordAssembler<'a, F> {
    pub fn new(
        factory: &'a F,
        dictionary: &'a Dictionary,
        extractor: MorphemeExtractor,
        recombiner: WordRecombiner<'a>,
        excluded: ExcludedPos,
    ) -> Self {
        Self {
            factory,
            dictionary,
            extractor,
            recombiner,
            romanizer: KanaRomanizer,
            excluded,
        }
    }

    pub fn from_config(factory: &'a F, dictionary: &'a Dictionary, config: &Config) -> Self {
        Self::new(
            factory,
            dictionary,
            MorphemeExtractor::new(config.form_mode),
            WordRecombiner::new(dictionary, config.max_word_length),
            ExcludedPos::new(&config.excluded_pos),
        )
    }

    /// Assemble the words of `units` by chunks on `processor`'s pool.
    /// Words are in unit order.
    pub fn assemble(
        &self,
        processor: &ChunkProcessor,
        units: &[TextUnit],
        timestamp: NaiveDateTime,
    ) -> Result<Vec<Word>, Error> {
        processor.process_flat(units, |idx, chunk| {
            debug!("chunk {}: {} units", idx, chunk.len());
            self.assemble_chunk(chunk, timestamp)
        })
    }

    /// Assemble the words of a chunk, using a tokenizer of its own.
    pub fn assemble_chunk(
        &self,
        units: &[TextUnit],
        timestamp: NaiveDateTime,
    ) -> Result<Vec<Word>, Error> {
        let mut tokenizer = self.factory.tokenizer();
        let mut words = Vec::new();

        for unit in units {
            let morphemes = match self.extractor.extract_unit(&mut tokenizer, &unit.text) {
                Ok(m) => m,
                Err(e) => {
                    warn!("{}: skipping text unit: {}", unit.source_id, e);
                    continue;
                }
            };
            words.extend(self.words(&unit.source_id, morphemes, timestamp)?);
        }

        Ok(words)
    }

    /// Build words from the morphemes of a single unit.
    fn words(
        &self,
        source_id: &str,
        morphemes: Vec<Morpheme>,
        timestamp: NaiveDateTime,
    ) -> Result<Vec<Word>, Error> {
        let morphemes = clean_morphemes(morphemes);
        let spans = self.recombiner.spans(&morphemes);

        let raw: Vec<&str> = spans
            .iter()
            .map(|span| morphemes[span.start].pos.as_str())
            .collect();
        // one label per tag: only trips if the translation stops being one-to-one
        let english = pos::translate_or_fallback(&raw);
        if english.len() != spans.len() {
            return Err(Error::Desync {
                expected: spans.len(),
                got: english.len(),
            });
        }

        let words = spans
            .into_iter()
            .zip(raw)
            .zip(english)
            .filter(|((_, pos_raw), _)| self.excluded.detect(*pos_raw))
            .map(|((span, pos_raw), pos_english)| {
                let sense = self.dictionary.first_sense(&span.text);
                let reading = sense.map(|s| s.reading.as_str()).unwrap_or_default();
                let pos_code = sense.map(|s| s.pos_code.as_str()).unwrap_or_default();

                Word {
                    romanized: self.romanizer.romanize_word(&span.text, reading),
                    text: span.text,
                    pos_raw: pos_raw.to_string(),
                    pos_normalized: pos::normalize(pos_code).to_string(),
                    pos_english: pos_english.to_string(),
                    source_id: source_id.to_string(),
                    timestamp,
                }
            })
            .collect();

        Ok(words)
    }
}
