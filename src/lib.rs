/*! # Kotoba

Japanese vocabulary collection from news articles.

Articles listed on a news site are fetched once (a ledger keeps track of processed ones),
their text is split into morphemes, regrouped into dictionary words,
tagged with part of speech information and romanized, then stored in an SQLite database.

This project can be used both as a tool or as a lib, where the site ([sources::ArticleSource])
and the tokenizer ([tokenizer::TokenizerFactory]) can be swapped.
!*/
pub mod config;
pub mod dictionary;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod pos;
pub mod processing;
pub mod romanize;
pub mod segmentation;
pub mod sources;
pub mod store;
pub mod tokenizer;

#[cfg(test)]
mod test_utils;
