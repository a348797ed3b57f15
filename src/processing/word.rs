use chrono::NaiveDateTime;

/// A piece of text along with the source it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub source_id: String,
    pub text: String,
}

impl TextUnit {
    pub fn new(source_id: &str, text: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            text: text.to_string(),
        }
    }
}

/// A dictionary word found in a source, with its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub romanized: String,
    /// tokenizer tag of the first morpheme of the word
    pub pos_raw: String,
    /// canonical label derived from the dictionary
    pub pos_normalized: String,
    /// English label of `pos_raw`
    pub pos_english: String,
    pub source_id: String,
    pub timestamp: NaiveDateTime,
}
