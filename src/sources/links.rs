//! Link cleanup.
use itertools::Itertools;
use log::debug;
use url::Url;

/// Turn raw `href` values into absolute article URLs.
///
/// Fragment-only links are dropped, relative and protocol-relative ones are resolved against `base`,
/// and only links on `base`'s host whose path starts with `path_prefix` are kept.
/// The result holds no duplicates and keeps first-seen order.
pub fn clean_links<'a, I>(base: &Url, hrefs: I, path_prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    hrefs
        .into_iter()
        .map(str::trim)
        .filter(|href| !href.is_empty() && !href.starts_with('#'))
        .filter_map(|href| match base.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!("ignoring link {:?}: {}", href, e);
                None
            }
        })
        .filter(|url| url.host_str() == base.host_str())
        .filter(|url| url.path().starts_with(path_prefix))
        .map(|mut url| {
            url.set_fragment(None);
            url.to_string()
        })
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www3.nhk.or.jp/news/").unwrap()
    }

    #[test]
    fn resolve_and_filter() {
        let hrefs = [
            "#main",
            "/news/html/20240401/k1.html",
            "//www3.nhk.or.jp/news/html/20240401/k2.html",
            "https://www3.nhk.or.jp/news/html/20240401/k3.html#top",
            "https://example.com/news/html/20240401/k4.html",
            "/weather/",
            "",
        ];
        assert_eq!(
            clean_links(&base(), hrefs, "/news/html/"),
            vec![
                "https://www3.nhk.or.jp/news/html/20240401/k1.html",
                "https://www3.nhk.or.jp/news/html/20240401/k2.html",
                "https://www3.nhk.or.jp/news/html/20240401/k3.html",
            ]
        );
    }

    #[test]
    fn relative_path() {
        let links = clean_links(&base(), ["html/20240401/k1.html"], "/news/html/");
        assert_eq!(links, vec!["https://www3.nhk.or.jp/news/html/20240401/k1.html"]);
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let hrefs = ["/b", "/a", "/b", "/a#x", "/c"];
        assert_eq!(
            clean_links(&base(), hrefs, ""),
            vec![
                "https://www3.nhk.or.jp/b",
                "https://www3.nhk.or.jp/a",
                "https://www3.nhk.or.jp/c",
            ]
        );
    }
}
