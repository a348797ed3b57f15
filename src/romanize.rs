//! Romanization of kana readings.
use wana_kana::ConvertJapanese;

pub trait Romanize {
    fn romanize(&self, text: &str) -> String;
}

/// Hepburn-style romanization of hiragana and katakana.
///
/// Characters that are not kana (kanji, latin) are kept as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct KanaRomanizer;

impl Romanize for KanaRomanizer {
    fn romanize(&self, text: &str) -> String {
        text.to_romaji()
    }
}

impl KanaRomanizer {
    /// Romanize `reading`, or `text` when the reading is empty.
    pub fn romanize_word(&self, text: &str, reading: &str) -> String {
        if reading.is_empty() {
            self.romanize(text)
        } else {
            self.romanize(reading)
        }
    }
}
