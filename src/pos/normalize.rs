//! Dictionary POS code normalization.
//!
//! Dictionary codes look like `n`, `v5r vt`, `adj-i` or `2 exp`:
//! an optional rank, then a code whose prefix tells the POS.
use super::UNCLASSIFIED;

/// Label of words without POS information.
pub const NO_POS_DATA: &str = "No POS data";

/// Ordered prefix rules. First match wins, so longer prefixes sharing
/// a start with shorter ones come first.
const PREFIX_RULES: &[(&str, &str)] = &[
    ("n", "Noun"),
    ("v", "Verb"),
    ("prt", "Particle"),
    ("adv", "Adverb"),
    ("adj", "Adjective"),
    ("exp", "Expression"),
    ("conj", "Conjunction"),
    ("aux-adj", "Auxiliary Adjective"),
    ("aux-v", "Auxiliary Verb"),
    ("aux", "Auxiliary Verb"),
    ("int", "Interjection"),
    ("pn", "Pronoun"),
    ("cop", "Copula"),
    ("pref", "Prefix"),
    ("suf", "Suffix"),
    ("ctr", "Counter"),
    ("unc", UNCLASSIFIED),
];

/// Labels [normalize] can return.
const CANONICAL: &[&str] = &[
    "Noun",
    "Verb",
    "Particle",
    "Adverb",
    "Adjective",
    "Expression",
    "Conjunction",
    "Auxiliary Adjective",
    "Auxiliary Verb",
    "Interjection",
    "Pronoun",
    "Copula",
    "Prefix",
    "Suffix",
    "Counter",
    UNCLASSIFIED,
    NO_POS_DATA,
];

pub fn is_canonical(label: &str) -> bool {
    CANONICAL.contains(&label)
}

/// Remove a leading rank (`"1 adj-i"` -> `"adj-i"`).
fn strip_rank(code: &str) -> &str {
    let rest = code.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() != code.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        code
    }
}

/// Map a raw dictionary POS code to a canonical label.
///
/// Already canonical labels are returned as is, so that running this
/// over stored values any number of times gives the same result.
pub fn normalize(code: &str) -> &'static str {
    let code = code.trim();
    if code.is_empty() {
        return NO_POS_DATA;
    }

    if let Some(label) = CANONICAL.iter().find(|label| **label == code) {
        return *label;
    }

    let code = strip_rank(code);
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, label)| *label)
        .unwrap_or(UNCLASSIFIED)
}
