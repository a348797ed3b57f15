//! Morpheme extraction.
use log::{debug, warn};

use super::{FormMode, Morpheme, Tokenize};
use crate::error::Error;

/// Runs a tokenizer over text units, keeping the form selected by [FormMode].
#[derive(Debug, Clone, Copy)]
pub struct MorphemeExtractor {
    mode: FormMode,
}

impl MorphemeExtractor {
    pub fn new(mode: FormMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Tokenize a single text unit.
    ///
    /// The unit is split on newlines first, blank lines yielding nothing.
    pub fn extract_unit<T: Tokenize>(
        &self,
        tokenizer: &mut T,
        text: &str,
    ) -> Result<Vec<Morpheme>, Error> {
        let mut morphemes = Vec::new();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let tokens = tokenizer.tokenize(line)?;
            morphemes.extend(
                tokens
                    .into_iter()
                    .map(|token| Morpheme::from_token(token, self.mode)),
            );
        }
        Ok(morphemes)
    }

    /// Tokenize every text and concatenate the morphemes, in input order.
    ///
    /// A unit the tokenizer fails on is skipped with a warning:
    /// the remaining units still yield their morphemes.
    pub fn extract<T: Tokenize, S: AsRef<str>>(
        &self,
        tokenizer: &mut T,
        texts: &[S],
    ) -> Vec<Morpheme> {
        let mut morphemes = Vec::new();
        for (idx, text) in texts.iter().enumerate() {
            match self.extract_unit(tokenizer, text.as_ref()) {
                Ok(m) => morphemes.extend(m),
                Err(e) => warn!("skipping text unit {}: {}", idx, e),
            }
        }

        if morphemes.is_empty() {
            warn!("no morphemes extracted from {} text units", texts.len());
        } else {
            debug!("extracted {} morphemes", morphemes.len());
        }
        morphemes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CharTokenizer;
    use crate::tokenizer::TokenizerFactory;

    fn forms(morphemes: &[Morpheme]) -> Vec<&str> {
        morphemes.iter().map(|m| m.form.as_str()).collect()
    }

    #[test]
    fn extract_keeps_order() {
        let factory = CharTokenizer::default();
        let mut t = factory.tokenizer();
        let ex = MorphemeExtractor::new(FormMode::Surface);
        let m = ex.extract(&mut t, &["あい", "う\nえ"]);
        assert_eq!(forms(&m), vec!["あ", "い", "う", "え"]);
    }

    #[test]
    fn extract_empty_units() {
        let factory = CharTokenizer::default();
        let mut t = factory.tokenizer();
        let ex = MorphemeExtractor::new(FormMode::Surface);
        assert!(ex.extract(&mut t, &["", "\n\n"]).is_empty());
        assert!(ex.extract::<_, &str>(&mut t, &[]).is_empty());
    }

    #[test]
    fn extract_skips_failing_unit() {
        let factory = CharTokenizer::default();
        let mut t = factory.tokenizer();
        let ex = MorphemeExtractor::new(FormMode::Surface);
        let m = ex.extract(&mut t, &["あ", "だめ!", "い"]);
        assert_eq!(forms(&m), vec!["あ", "い"]);
    }

    #[test]
    fn extract_unit_propagates() {
        let factory = CharTokenizer::default();
        let mut t = factory.tokenizer();
        let ex = MorphemeExtractor::new(FormMode::Surface);
        assert!(matches!(
            ex.extract_unit(&mut t, "だめ!"),
            Err(Error::Tokenization(_))
        ));
    }

    #[test]
    fn extract_carries_pos() {
        let mut factory = CharTokenizer::default();
        factory.pos.insert('は', "助詞");
        let mut t = factory.tokenizer();
        let ex = MorphemeExtractor::new(FormMode::Dictionary);
        let m = ex.extract(&mut t, &["私は"]);
        assert_eq!(m, vec![Morpheme::new("私", "名詞"), Morpheme::new("は", "助詞")]);
    }
}
