//! Script-level filtering.
//!
//! Strips characters that are not hiragana, katakana or CJK ideographs
//! (digits, latin letters, punctuation, brackets) from morphemes before dictionary lookup.
use unicode_script::{Script, UnicodeScript};

use super::Filter;
use crate::tokenizer::Morpheme;

/// Unicode blocks kept whatever the script of their characters is.
///
/// Kana blocks hold marks of `Common` or `Inherited` script
/// (`ー`, `・`, combining voiced marks, halfwidth `ｰ` `ﾞ` `ﾟ`) that are part of words.
const JAPANESE_BLOCKS: &[(char, char)] = &[
    ('\u{2E80}', '\u{2EFF}'),   // CJK Radicals Supplement
    ('\u{3040}', '\u{309F}'),   // Hiragana
    ('\u{30A0}', '\u{30FF}'),   // Katakana
    ('\u{31C0}', '\u{31EF}'),   // CJK Strokes
    ('\u{31F0}', '\u{31FF}'),   // Katakana Phonetic Extensions
    ('\u{3400}', '\u{4DBF}'),   // CJK Unified Ideographs Extension A
    ('\u{4E00}', '\u{9FFF}'),   // CJK Unified Ideographs
    ('\u{F900}', '\u{FAFF}'),   // CJK Compatibility Ideographs
    ('\u{FF65}', '\u{FF9F}'),   // halfwidth katakana
    ('\u{20000}', '\u{2FA1F}'), // CJK extensions B to F, compatibility supplement
];

/// Character filter on Japanese scripts and blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptFilter;

impl Filter<char> for ScriptFilter {
    fn detect(&self, c: char) -> bool {
        matches!(c.script(), Script::Han | Script::Hiragana | Script::Katakana)
            || JAPANESE_BLOCKS
                .iter()
                .any(|(start, end)| (*start..=*end).contains(&c))
    }
}

impl ScriptFilter {
    /// Remove non-Japanese characters from `s`.
    pub fn clean_str(&self, s: &str) -> String {
        s.chars().filter(|c| self.detect(*c)).collect()
    }
}

/// Clean a list of strings, dropping the ones that are empty after cleaning.
/// Order of the remaining strings is kept.
pub fn clean<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    let filter = ScriptFilter;
    strings
        .iter()
        .map(|s| filter.clean_str(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Same as [clean], on morphemes: the POS tag of each surviving morpheme is kept alongside its cleaned form.
pub fn clean_morphemes(morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
    let filter = ScriptFilter;
    morphemes
        .into_iter()
        .filter_map(|m| {
            let form = filter.clean_str(&m.form);
            if form.is_empty() {
                None
            } else {
                Some(Morpheme { form, pos: m.pos })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_text() {
        assert_eq!(clean(&["こんにちは", "世界"]), vec!["こんにちは", "世界"]);
    }

    #[test]
    fn digits_and_latin() {
        assert_eq!(clean(&["こんにちは123", "世2界"]), vec!["こんにちは", "世界"]);
        assert_eq!(clean(&["helloこんにちは", "world世界"]), vec!["こんにちは", "世界"]);
        // fullwidth digits and letters are not Japanese scripts either
        assert_eq!(clean(&["２０２４年", "ＮＨＫニュース"]), vec!["年", "ニュース"]);
    }

    #[test]
    fn punctuation_and_brackets() {
        assert_eq!(clean(&["こんにちは!", "世界。"]), vec!["こんにちは", "世界"]);
        assert_eq!(clean(&["こ(ん)に(ち)は", "世[界]"]), vec!["こんにちは", "世界"]);
        assert_eq!(clean(&["「東京」、"]), vec!["東京"]);
    }

    #[test]
    fn empty_results_are_dropped() {
        assert!(clean(&[""]).is_empty());
        assert!(clean(&["hello", "123", "!@#"]).is_empty());
        assert!(clean::<&str>(&[]).is_empty());
    }

    #[test]
    fn mixed_scripts() {
        assert_eq!(
            clean(&["カタカナと漢字とひらがな", "テスト123", "コーヒー", "人々"]),
            vec!["カタカナと漢字とひらがな", "テスト", "コーヒー", "人々"]
        );
    }

    #[test]
    fn halfwidth_katakana_marks() {
        assert_eq!(clean(&["ｶﾞｿﾘﾝ", "ｺｰﾋｰ"]), vec!["ｶﾞｿﾘﾝ", "ｺｰﾋｰ"]);
        assert_eq!(clean(&["ﾊﾟﾝ123"]), vec!["ﾊﾟﾝ"]);
    }

    #[test]
    fn decomposed_voiced_marks() {
        // か + combining voiced mark
        assert_eq!(clean(&["か\u{3099}っこう"]), vec!["か\u{3099}っこう"]);
        assert_eq!(clean(&["は\u{309A}ん!"]), vec!["は\u{309A}ん"]);
        // spacing marks
        assert_eq!(clean(&["\u{309B}\u{309C}"]), vec!["\u{309B}\u{309C}"]);
    }

    #[test]
    fn katakana_block_punctuation() {
        assert_eq!(clean(&["ドナルド・トランプ"]), vec!["ドナルド・トランプ"]);
        assert_eq!(clean(&["\u{30A0}"]), vec!["\u{30A0}"]);
    }

    #[test]
    fn idempotent() {
        let inputs = vec![
            "helloこんにちは",
            "",
            "１２３",
            "コーヒー。",
            "「東京」、",
            "abc",
            "世2界",
            "ｶﾞｿﾘﾝ!",
            "か\u{3099}",
        ];
        let once = clean(&inputs);
        let twice = clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn morphemes_keep_pos() {
        let morphemes = vec![
            Morpheme::new("東京", "名詞"),
            Morpheme::new("、", "補助記号"),
            Morpheme::new("2024", "名詞"),
            Morpheme::new("年!", "名詞"),
        ];
        assert_eq!(
            clean_morphemes(morphemes),
            vec![Morpheme::new("東京", "名詞"), Morpheme::new("年", "名詞")]
        );
    }
}
