/*! Article sources.

A source is identified by its article URL. Sources are
- discovered from an index page ([ArticleSource::discover]),
- filtered against already processed ones ([filter_new]),
- fetched with a bounded number of concurrent requests ([fetch_all]).
!*/
mod dedup;
mod fetch;
mod http;
mod links;

pub use dedup::filter_new;
pub use fetch::fetch_all;
pub use http::HttpSite;
pub use links::clean_links;

use crate::error::Error;

/// A site publishing articles.
pub trait ArticleSource: Sync {
    /// Get the identifiers of the currently listed articles, in page order.
    fn discover(&self) -> Result<Vec<String>, Error>;

    /// Get the text blocks of an article.
    fn fetch(&self, id: &str) -> Result<Vec<String>, Error>;
}
