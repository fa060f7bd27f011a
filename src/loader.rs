//! Corpus loading
//!
//! Builds a [`Corpus`] from a directory of HTML pages. Every `.html` file in the
//! directory (not its subdirectories) is a page named by its file name; its
//! links are the `href` targets of its anchor tags that name another page of
//! the same directory.

use crate::error::{LinkRankError, LinkRankResult};
use linkrank_algorithms::Corpus;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Anchor tags with a double-quoted `href`
const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

const PAGE_EXTENSION: &str = ".html";

/// Compiled once per process
static LINK_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Pulls anchor targets out of page markup
pub struct LinkExtractor {
    pattern: &'static Regex,
}

impl LinkExtractor {
    pub fn new() -> LinkRankResult<Self> {
        let pattern = LINK_REGEX
            .get_or_init(|| Regex::new(LINK_PATTERN))
            .as_ref()
            .map_err(|e| LinkRankError::Regex(e.clone()))?;
        Ok(Self { pattern })
    }

    /// Distinct `href` targets, in no particular relation to the corpus yet
    pub fn extract(&self, contents: &str) -> BTreeSet<String> {
        self.pattern
            .captures_iter(contents)
            .filter_map(|cap| cap.get(1))
            .map(|target| target.as_str().to_string())
            .collect()
    }
}

/// Distinct `href` targets of every anchor tag in `contents`
pub fn extract_links(contents: &str) -> LinkRankResult<BTreeSet<String>> {
    Ok(LinkExtractor::new()?.extract(contents))
}

/// Load every `.html` page of `directory` into a corpus.
///
/// Self links and links to files outside the corpus are dropped.
pub fn crawl(directory: impl AsRef<Path>) -> LinkRankResult<Corpus> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(LinkRankError::NotADirectory(directory.to_path_buf()));
    }

    let extractor = LinkExtractor::new()?;
    let mut pages: Vec<(String, BTreeSet<String>)> = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) if name.ends_with(PAGE_EXTENSION) => name,
            _ => continue,
        };

        // Pages are not required to be valid UTF-8
        let bytes = fs::read(entry.path())?;
        let links = extractor.extract(&String::from_utf8_lossy(&bytes));
        debug!(page = %name, links = links.len(), "loaded page");
        pages.push((name, links));
    }

    if pages.is_empty() {
        return Err(LinkRankError::EmptyCorpus(directory.to_path_buf()));
    }

    let corpus = Corpus::from_links(pages);
    info!(
        directory = %directory.display(),
        pages = corpus.page_count(),
        links = corpus.link_count(),
        "corpus loaded"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let html = r#"
            <p>See <a href="2.html">two</a> and <a class="x" href="3.html">three</a>.</p>
            <a href="2.html">again</a>
            <a name="anchor">no href</a>
        "#;
        let links = extract_links(html).unwrap();
        let expected: BTreeSet<String> = ["2.html", "3.html"].iter().map(|s| s.to_string()).collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn test_link_pattern_compiled_once() {
        let first = LinkExtractor::new().unwrap();
        let second = LinkExtractor::new().unwrap();
        assert!(std::ptr::eq(first.pattern, second.pattern));
    }

    #[test]
    fn test_extract_links_requires_double_quotes() {
        let links = extract_links("<a href='single.html'>x</a>").unwrap();
        assert!(links.is_empty());
    }
}
