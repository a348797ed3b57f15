//! Part of speech filtering.
use std::collections::HashSet;

use super::Filter;

/// Rejects tokenizer POS tags listed as excluded (symbols, whitespace...).
#[derive(Debug, Clone)]
pub struct ExcludedPos {
    excluded: HashSet<String>,
}

impl ExcludedPos {
    pub fn new<S: AsRef<str>>(excluded: &[S]) -> Self {
        Self {
            excluded: excluded.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

impl Default for ExcludedPos {
    /// Excludes 空白 (whitespace), 補助記号 (supplementary symbol), 連体詞 (adnominal) and 記号 (symbol).
    fn default() -> Self {
        Self::new(&["空白", "補助記号", "連体詞", "記号"])
    }
}

impl Filter<&str> for ExcludedPos {
    fn detect(&self, pos: &str) -> bool {
        !self.excluded.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exclusions() {
        let f = ExcludedPos::default();
        assert!(f.detect("名詞"));
        assert!(f.detect("動詞"));
        assert!(!f.detect("補助記号"));
        assert!(!f.detect("連体詞"));
        assert!(!f.detect("記号"));
        assert!(!f.detect("空白"));
    }

    #[test]
    fn custom_exclusions() {
        let f = ExcludedPos::new(&["助詞"]);
        assert!(!f.detect("助詞"));
        assert!(f.detect("記号"));
    }
}
