//! Tokenizer tag to English label translation.
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;

use crate::error::Error;

/// Label of tags that could not be classified.
pub const UNCLASSIFIED: &str = "Unclassified";

lazy_static! {
    static ref TAG_LABELS: HashMap<&'static str, &'static str> = [
        ("代名詞", "Pronoun"),
        ("副詞", "Adverb"),
        ("助動詞", "Auxiliary Verb"),
        ("助詞", "Particle"),
        ("動詞", "Verb"),
        ("名詞", "Noun"),
        ("形容詞", "Adjective"),
        ("形状詞", "Adjectival Noun"),
        ("感動詞", "Interjection"),
        ("接尾辞", "Suffix"),
        ("接続詞", "Conjunction"),
        ("接頭辞", "Prefix"),
        // IPADIC spelling
        ("接頭詞", "Prefix"),
        ("フィラー", "Filler"),
        ("空白", "Whitespace"),
        ("補助記号", "Supplementary Symbol"),
        ("連体詞", "Adnominal"),
        ("記号", "Symbol"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Translate a single tag.
pub fn translate_one(tag: &str) -> Result<&'static str, Error> {
    TAG_LABELS
        .get(tag)
        .copied()
        .ok_or_else(|| Error::UnknownTag(tag.to_string()))
}

/// Translate tags, in order. Fails on the first unknown tag.
pub fn translate<S: AsRef<str>>(tags: &[S]) -> Result<Vec<&'static str>, Error> {
    tags.iter().map(|tag| translate_one(tag.as_ref())).collect()
}

/// Translate tags, substituting [UNCLASSIFIED] to unknown ones.
pub fn translate_or_fallback<S: AsRef<str>>(tags: &[S]) -> Vec<&'static str> {
    tags.iter()
        .map(|tag| {
            translate_one(tag.as_ref()).unwrap_or_else(|e| {
                warn!("{}, using {:?}", e, UNCLASSIFIED);
                UNCLASSIFIED
            })
        })
        .collect()
}
