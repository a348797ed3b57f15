/*! Word dictionary.

Maps a word to its senses. The dictionary is built once, before any segmentation
happens, then only read: it is shared between workers without locking.

Source data are JMdict term banks (`term_bank_*.json`), each being an array of entries:
```text
[word, reading, pos code, additional info, frequency, [meanings], sequence number, tags]
```
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// One meaning group of a word.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sense {
    pub reading: String,
    /// raw part of speech code, e.g. `"n"`, `"v5r vt"`, `"1 adj-i"`
    pub pos_code: String,
    pub additional_info: String,
    pub frequency: i64,
    pub meanings: Vec<String>,
    pub sequence: i64,
    pub tags: String,
}

/// Term bank row, as laid out in the JSON files.
#[derive(Debug, Deserialize)]
struct TermEntry(
    String,
    String,
    String,
    String,
    Value,
    Vec<Value>,
    i64,
    String,
);

impl TermEntry {
    fn into_sense(self) -> (String, Sense) {
        let TermEntry(word, reading, pos_code, additional_info, frequency, meanings, sequence, tags) =
            self;
        let sense = Sense {
            reading,
            pos_code,
            additional_info,
            frequency: frequency.as_i64().unwrap_or_default(),
            meanings: meanings.iter().map(flatten_text).collect(),
            sequence,
            tags,
        };
        (word, sense)
    }
}

/// Get the text of a meaning, that can either be a plain string
/// or structured content (nested arrays/objects with `content` fields).
fn flatten_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(values) => values.iter().map(flatten_text).collect(),
        Value::Object(map) => map.get("content").map(flatten_text).unwrap_or_default(),
        _ => String::new(),
    }
}

#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Sense>>,
}

impl Dictionary {
    /// Load every term bank found in `dir`.
    ///
    /// Files are parsed concurrently, then merged in path order so that
    /// the sense order of a word does not depend on scheduling.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        info!("loading dictionary from {:?}", dir);
        let pattern = dir.join("term_bank_*.json");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Dictionary(format!("invalid dictionary path {:?}", dir)))?;

        let mut paths: Vec<PathBuf> = glob::glob(pattern)?.collect::<Result<_, _>>()?;
        paths.sort();

        if paths.is_empty() {
            return Err(Error::Dictionary(format!("no term bank found in {:?}", dir)));
        }

        let banks: Vec<Vec<TermEntry>> = paths
            .par_iter()
            .map(|path| Self::read_bank(path))
            .collect::<Result<_, _>>()?;

        let dict: Self = banks
            .into_iter()
            .flatten()
            .map(TermEntry::into_sense)
            .collect();

        info!("dictionary loaded: {} words", dict.len());
        Ok(dict)
    }

    fn read_bank(path: &Path) -> Result<Vec<TermEntry>, Error> {
        debug!("reading term bank {:?}", path);
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<TermEntry> = serde_json::from_reader(reader).map_err(|e| {
            warn!("malformed term bank {:?}: {}", path, e);
            e
        })?;
        Ok(entries)
    }

    /// Insert a sense, appending to the senses of `word` if it already exists.
    pub fn insert(&mut self, word: String, sense: Sense) {
        self.entries.entry(word).or_default().push(sense);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Get the senses of a word. Never returns an empty slice.
    pub fn get(&self, word: &str) -> Option<&[Sense]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Get the first (main) sense of a word.
    pub fn first_sense(&self, word: &str) -> Option<&Sense> {
        self.get(word).and_then(|senses| senses.first())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Sense)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, Sense)>>(iter: I) -> Self {
        let mut dict = Dictionary::default();
        for (word, sense) in iter {
            dict.insert(word, sense);
        }
        dict
    }
}
