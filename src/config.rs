//! Run configuration.
//!
//! Every tunable of a run lives in [Config], which is built once (from defaults,
//! an optional JSON file and command line overrides) and handed to components
//! at construction.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::tokenizer::{FeatureLayout, FormMode};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database holding the `Sources` and `Words` tables.
    pub db_path: PathBuf,
    /// Folder containing JMdict `term_bank_*.json` files.
    pub dictionary_dir: PathBuf,
    /// vibrato system dictionary (`.dic` or `.dic.zst`).
    pub tokenizer_dict: PathBuf,
    pub feature_layout: FeatureLayout,
    pub site: SiteConfig,
    pub max_concurrent_requests: usize,
    pub workers: usize,
    pub chunks: usize,
    pub max_word_length: usize,
    pub form_mode: FormMode,
    /// Tokenizer POS tags whose words are never persisted.
    pub excluded_pos: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("japan_news.db"),
            dictionary_dir: PathBuf::from("jmdict_eng"),
            tokenizer_dict: PathBuf::from("system.dic.zst"),
            feature_layout: FeatureLayout::default(),
            site: SiteConfig::default(),
            max_concurrent_requests: 5,
            workers: 5,
            chunks: 100,
            max_word_length: 20,
            form_mode: FormMode::Surface,
            excluded_pos: ["空白", "補助記号", "連体詞", "記号"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Read a JSON configuration. Missing keys resort to [Config::default] values.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// News site parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    /// Page listing the articles, relative to `base_url`.
    pub index_path: String,
    pub link_selector: String,
    pub article_selector: String,
    /// Only links whose path starts with this are kept. Empty keeps every same-host link.
    pub article_path_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www3.nhk.or.jp".to_string(),
            index_path: "/news/".to_string(),
            link_selector: "a[href]".to_string(),
            article_selector: "section.content--detail-main".to_string(),
            article_path_prefix: "/news/html/".to_string(),
        }
    }
}
