//! vibrato-backed tokenizer.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use vibrato::tokenizer::worker::Worker;
use vibrato::{Dictionary, Tokenizer};

use super::{FeatureLayout, Token, Tokenize, TokenizerFactory};
use crate::error::Error;

/// Shared tokenizer. Holds the system dictionary, and creates one [VibratoWorker] per worker task.
pub struct VibratoTokenizer {
    inner: Tokenizer,
    layout: FeatureLayout,
}

impl VibratoTokenizer {
    pub fn new(dict: Dictionary, layout: FeatureLayout) -> Self {
        Self {
            inner: Tokenizer::new(dict),
            layout,
        }
    }

    /// Load a compiled system dictionary, zstd-compressed if the file ends in `.zst`.
    pub fn from_path(path: &Path, layout: FeatureLayout) -> Result<Self, Error> {
        info!("loading tokenizer dictionary {:?}", path);
        let reader = BufReader::new(File::open(path)?);
        let dict = if path.extension().map_or(false, |ext| ext == "zst") {
            Dictionary::read(zstd::stream::read::Decoder::new(reader)?)?
        } else {
            Dictionary::read(reader)?
        };
        Ok(Self::new(dict, layout))
    }
}

impl TokenizerFactory for VibratoTokenizer {
    type Tokenizer<'a> = VibratoWorker<'a>;

    fn tokenizer(&self) -> VibratoWorker<'_> {
        VibratoWorker {
            worker: self.inner.new_worker(),
            layout: &self.layout,
        }
    }
}

pub struct VibratoWorker<'a> {
    worker: Worker<'a>,
    layout: &'a FeatureLayout,
}

impl Tokenize for VibratoWorker<'_> {
    fn tokenize(&mut self, text: &str) -> Result<Vec<Token>, Error> {
        if text.contains('\0') {
            return Err(Error::Tokenization(
                "text contains a NUL character".to_string(),
            ));
        }

        self.worker.reset_sentence(text);
        self.worker.tokenize();

        let tokens = (0..self.worker.num_tokens())
            .map(|i| {
                let token = self.worker.token(i);
                self.layout.token(token.surface(), token.feature())
            })
            .collect();

        Ok(tokens)
    }
}
