//! News site over HTTP.
use itertools::Itertools;
use log::{debug, info};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use url::Url;

use super::{clean_links, ArticleSource};
use crate::config::SiteConfig;
use crate::error::Error;

fn selector(s: &str) -> Result<Selector, Error> {
    Selector::parse(s).map_err(|e| Error::Selector(format!("{s}: {e:?}")))
}

pub struct HttpSite {
    client: Client,
    base: Url,
    index: Url,
    link_selector: Selector,
    article_selector: Selector,
    article_path_prefix: String,
}

impl HttpSite {
    pub fn new(config: &SiteConfig) -> Result<Self, Error> {
        let base = Url::parse(&config.base_url)?;
        let index = base.join(&config.index_path)?;
        Ok(Self {
            client: Client::new(),
            base,
            index,
            link_selector: selector(&config.link_selector)?,
            article_selector: selector(&config.article_selector)?,
            article_path_prefix: config.article_path_prefix.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<String, Error> {
        debug!("GET {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(body)
    }

    /// Get article links of an index page.
    pub fn parse_links(&self, html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        let hrefs = doc
            .select(&self.link_selector)
            .filter_map(|a| a.value().attr("href"));
        clean_links(&self.base, hrefs, &self.article_path_prefix)
    }

    /// Get the text of each article section of a page.
    ///
    /// Text nodes of a section are trimmed and joined by newlines. Empty sections are skipped.
    pub fn parse_article(&self, html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        doc.select(&self.article_selector)
            .map(|section| {
                section
                    .text()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .join("\n")
            })
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl ArticleSource for HttpSite {
    fn discover(&self) -> Result<Vec<String>, Error> {
        let links = self.parse_links(&self.get(self.index.as_str())?);
        info!("{} article links found on {}", links.len(), self.index);
        Ok(links)
    }

    fn fetch(&self, id: &str) -> Result<Vec<String>, Error> {
        Ok(self.parse_article(&self.get(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r##"<html><body>
        <nav><a href="#content">skip</a><a href="/weather/">天気</a></nav>
        <ul>
            <li><a href="/news/html/20240401/k1.html">記事1</a></li>
            <li><a href="https://www3.nhk.or.jp/news/html/20240401/k2.html">記事2</a></li>
            <li><a href="/news/html/20240401/k1.html">記事1</a></li>
            <li><a>no link</a></li>
        </ul>
    </body></html>"##;

    const ARTICLE: &str = r#"<html><body>
        <section class="content--detail-main">
            <h1>見出し</h1>
            <p>これはテストです。</p>
        </section>
        <section class="content--detail-main"> </section>
        <section class="other"><p>関係ない</p></section>
    </body></html>"#;

    #[test]
    fn links() {
        let site = HttpSite::new(&SiteConfig::default()).unwrap();
        assert_eq!(
            site.parse_links(INDEX),
            vec![
                "https://www3.nhk.or.jp/news/html/20240401/k1.html",
                "https://www3.nhk.or.jp/news/html/20240401/k2.html",
            ]
        );
    }

    #[test]
    fn article() {
        let site = HttpSite::new(&SiteConfig::default()).unwrap();
        assert_eq!(
            site.parse_article(ARTICLE),
            vec!["見出し\nこれはテストです。".to_string()]
        );
    }

    #[test]
    fn bad_selector() {
        let config = SiteConfig {
            article_selector: "section[".to_string(),
            ..Default::default()
        };
        assert!(matches!(HttpSite::new(&config), Err(Error::Selector(_))));
    }

    #[test]
    fn bad_base_url() {
        let config = SiteConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(HttpSite::new(&config), Err(Error::Url(_))));
    }
}
