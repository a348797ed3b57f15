//! News ingestion pipeline
//!
//! # Processing
//! 1. Article links are discovered on the site, and the ones already in the ledger are discarded.
//! 1. New articles are fetched, with a bounded number of concurrent requests.
//! 1. Article text is split into chunks, and words are assembled concurrently (see [crate::processing]).
//! 1. Once every chunk succeeded, sources and words are committed together.
//!
//! A failing chunk aborts the run before anything is written, so that the
//! articles of the run are processed again on the next one.
use chrono::Local;
use itertools::Itertools;
use log::{debug, info};

use super::Pipeline;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::processing::{ChunkProcessor, WordAssembler};
use crate::sources::{self, ArticleSource};
use crate::store::SqliteStore;
use crate::tokenizer::TokenizerFactory;

/// Outcome of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// links found on the site
    pub discovered: usize,
    /// links absent from the ledger
    pub new_sources: usize,
    /// sources added to the ledger
    pub recorded_sources: usize,
    pub words: usize,
}

pub struct NewsPipeline<'a, A, F>
where
    A: ArticleSource,
    F: TokenizerFactory,
{
    site: &'a A,
    factory: &'a F,
    dictionary: &'a Dictionary,
    store: &'a SqliteStore,
    config: &'a Config,
}

impl<'a, A, F> NewsPipeline<'a, A, F>
where
    A: ArticleSource,
    F: TokenizerFactory,
{
    pub fn new(
        site: &'a A,
        factory: &'a F,
        dictionary: &'a Dictionary,
        store: &'a SqliteStore,
        config: &'a Config,
    ) -> Self {
        Self {
            site,
            factory,
            dictionary,
            store,
            config,
        }
    }

    /// Get discovered sources that are not in the ledger.
    fn gate(&self) -> Result<(usize, Vec<String>), Error> {
        let candidates = self.site.discover()?;
        let known = self.store.known_ids()?;
        let new = sources::filter_new(&candidates, &known);
        info!(
            "{} sources discovered, {} new",
            candidates.len(),
            new.len()
        );
        Ok((candidates.len(), new))
    }
}

impl<'a, A, F> Pipeline<RunReport> for NewsPipeline<'a, A, F>
where
    A: ArticleSource,
    F: TokenizerFactory,
{
    fn run(&self) -> Result<RunReport, Error> {
        let (discovered, new) = self.gate()?;
        if new.is_empty() {
            info!("nothing to do");
            return Ok(RunReport {
                discovered,
                ..Default::default()
            });
        }

        // a source listed twice is fetched once
        let to_fetch: Vec<&str> = new.iter().map(String::as_str).unique().collect();
        let units =
            sources::fetch_all(self.site, &to_fetch, self.config.max_concurrent_requests)?;

        // sources that could not be fetched stay out of the ledger
        let fetched: Vec<&str> = units
            .iter()
            .map(|unit| unit.source_id.as_str())
            .unique()
            .collect();
        debug!("{}/{} new sources fetched", fetched.len(), new.len());

        let assembler = WordAssembler::from_config(self.factory, self.dictionary, self.config);
        let processor = ChunkProcessor::new(self.config.workers, self.config.chunks);
        let words = assembler.assemble(&processor, &units, Local::now().naive_local())?;

        let (recorded_sources, words) = self.store.commit(&fetched, &words)?;

        Ok(RunReport {
            discovered,
            new_sources: new.len(),
            recorded_sources,
            words,
        })
    }
}
