//! Bounded concurrent fetching.
use log::{info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::ArticleSource;
use crate::error::Error;
use crate::processing::TextUnit;

/// Fetch the text of every source, with at most `max_concurrent` requests in flight.
///
/// A source that cannot be fetched is skipped with a warning.
/// Units are returned in `ids` order.
pub fn fetch_all<A: ArticleSource, S: AsRef<str> + Sync>(
    site: &A,
    ids: &[S],
    max_concurrent: usize,
) -> Result<Vec<TextUnit>, Error> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(max_concurrent.max(1))
        .build()?;

    let fetched: Vec<Vec<TextUnit>> = pool.install(|| {
        ids.par_iter()
            .map(|id| {
                let id = id.as_ref();
                match site.fetch(id) {
                    Ok(texts) => texts
                        .into_iter()
                        .map(|text| TextUnit {
                            source_id: id.to_string(),
                            text,
                        })
                        .collect(),
                    Err(e) => {
                        warn!("could not fetch {}: {}", id, e);
                        Vec::new()
                    }
                }
            })
            .collect()
    });

    let units: Vec<TextUnit> = fetched.into_iter().flatten().collect();
    info!("fetched {} text units from {} sources", units.len(), ids.len());
    Ok(units)
}
