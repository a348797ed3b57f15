/*! Morphological analysis.

The tokenizer itself is an external capability, accessed through two traits:
- [Tokenize] turns a piece of text into [Token]s. Implementors may hold state (lattices, buffers), hence `&mut self`.
- [TokenizerFactory] is shared read-only between workers, and hands out one [Tokenize] instance per worker task.

[MorphemeExtractor] drives a tokenizer over text units and keeps a single form per token.
!*/
mod backend;
mod extract;

use serde::Deserialize;

use crate::error::Error;

pub use backend::{VibratoTokenizer, VibratoWorker};
pub use extract::MorphemeExtractor;

/// Which form of a token is kept as the morpheme string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// form as it appears in the text
    Surface,
    /// lemma, independent of inflection
    Dictionary,
}

impl std::str::FromStr for FormMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "surface" => Ok(FormMode::Surface),
            "dictionary" => Ok(FormMode::Dictionary),
            other => Err(Error::Custom(format!(
                "unknown form mode {other:?} (expected surface or dictionary)"
            ))),
        }
    }
}

/// A token as produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub dictionary_form: String,
    /// POS tags, most general first (e.g. `["名詞", "固有名詞", "地域"]`).
    pub pos: Vec<String>,
}

impl Token {
    pub fn new(surface: &str, dictionary_form: &str, pos: &[&str]) -> Self {
        Self {
            surface: surface.to_string(),
            dictionary_form: dictionary_form.to_string(),
            pos: pos.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Most general POS tag, empty if the tokenizer gave none.
    pub fn head_pos(&self) -> &str {
        self.pos.first().map(String::as_str).unwrap_or_default()
    }
}

/// A single lexical unit with its POS tag (tokenizer taxonomy).
///
/// The form and its tag always travel together, so that filtering
/// or regrouping morphemes never misaligns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub form: String,
    pub pos: String,
}

impl Morpheme {
    pub fn new(form: &str, pos: &str) -> Self {
        Self {
            form: form.to_string(),
            pos: pos.to_string(),
        }
    }

    pub(crate) fn from_token(token: Token, mode: FormMode) -> Self {
        let pos = token.pos.into_iter().next().unwrap_or_default();
        let form = match mode {
            FormMode::Surface => token.surface,
            FormMode::Dictionary => token.dictionary_form,
        };
        Self { form, pos }
    }
}

impl AsRef<str> for Morpheme {
    fn as_ref(&self) -> &str {
        &self.form
    }
}

pub trait Tokenize {
    /// Tokenize `text`. Empty text yields no tokens and is not an error.
    fn tokenize(&mut self, text: &str) -> Result<Vec<Token>, Error>;
}

/// Source of per-worker tokenizer instances.
pub trait TokenizerFactory: Sync {
    type Tokenizer<'a>: Tokenize
    where
        Self: 'a;

    fn tokenizer(&self) -> Self::Tokenizer<'_>;
}

/// Layout of the comma-separated feature string of MeCab-style dictionaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureLayout {
    /// number of leading fields holding POS tags
    pub pos_fields: usize,
    /// field holding the dictionary form
    pub lemma_index: usize,
}

impl Default for FeatureLayout {
    /// IPADIC layout: `品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音`
    fn default() -> Self {
        Self {
            pos_fields: 4,
            lemma_index: 6,
        }
    }
}

impl FeatureLayout {
    /// Build a [Token] from a surface and its feature string.
    ///
    /// Placeholder fields (`*`) are not kept as tags, and a missing
    /// or placeholder lemma falls back to the surface.
    pub fn token(&self, surface: &str, feature: &str) -> Token {
        let fields: Vec<&str> = feature.split(',').collect();
        let pos = fields
            .iter()
            .take(self.pos_fields)
            .filter(|f| !f.is_empty() && **f != "*")
            .map(|f| f.to_string())
            .collect();
        let dictionary_form = match fields.get(self.lemma_index) {
            Some(lemma) if !lemma.is_empty() && *lemma != "*" => lemma.to_string(),
            _ => surface.to_string(),
        };

        Token {
            surface: surface.to_string(),
            dictionary_form,
            pos,
        }
    }
}
