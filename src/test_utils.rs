//! Test helpers: a character-level tokenizer and dictionary builders.
use std::collections::HashMap;

use crate::dictionary::{Dictionary, Sense};
use crate::error::Error;
use crate::tokenizer::{Token, Tokenize, TokenizerFactory};

/// Splits text into one token per character.
///
/// Tags come from `pos` (`名詞` if absent), and text containing `!` fails.
#[derive(Debug, Default)]
pub struct CharTokenizer {
    pub pos: HashMap<char, &'static str>,
}

pub struct CharWorker<'a>(&'a CharTokenizer);

impl Tokenize for CharWorker<'_> {
    fn tokenize(&mut self, text: &str) -> Result<Vec<Token>, Error> {
        if text.contains('!') {
            return Err(Error::Tokenization(format!("refusing {text:?}")));
        }
        Ok(text
            .chars()
            .map(|c| {
                let s = c.to_string();
                let pos = self.0.pos.get(&c).copied().unwrap_or("名詞");
                Token::new(&s, &s, &[pos])
            })
            .collect())
    }
}

impl TokenizerFactory for CharTokenizer {
    type Tokenizer<'a> = CharWorker<'a>;

    fn tokenizer(&self) -> CharWorker<'_> {
        CharWorker(self)
    }
}

/// Dictionary holding `words`, each with a default sense.
pub fn dictionary(words: &[&str]) -> Dictionary {
    words
        .iter()
        .map(|w| (w.to_string(), Sense::default()))
        .collect()
}

/// Dictionary holding `(word, reading, pos code)` entries.
pub fn dictionary_with(entries: &[(&str, &str, &str)]) -> Dictionary {
    entries
        .iter()
        .map(|(word, reading, pos_code)| {
            let sense = Sense {
                reading: reading.to_string(),
                pos_code: pos_code.to_string(),
                ..Default::default()
            };
            (word.to_string(), sense)
        })
        .collect()
}
