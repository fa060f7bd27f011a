//! Shared utilities for the ranking algorithms
//!
//! Provides a read-only, dense view of the hyperlink corpus for algorithm execution.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Dense page index (0..N), assigned in page-identifier order
pub type PageId = usize;

/// A closed hyperlink graph, interned into a Compressed Sparse Row (CSR) layout.
///
/// Page identifiers are mapped once to dense indices ordered by identifier, so
/// the estimators work on plain arrays and results come out sorted. The
/// structure is immutable after construction.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Mapping from dense index (0..N) back to the page identifier
    index_to_page: Vec<String>,
    /// Mapping from page identifier to dense index
    page_to_index: FxHashMap<String, PageId>,

    /// Offsets into `out_targets`. Size = page_count + 1
    out_offsets: Vec<usize>,
    /// Contiguous, sorted link targets of every page
    out_targets: Vec<PageId>,

    /// Offsets into `in_sources`. Size = page_count + 1
    in_offsets: Vec<usize>,
    /// Contiguous, sorted link sources of every page
    in_sources: Vec<PageId>,
}

impl Corpus {
    /// Build a corpus from `(page, links)` pairs.
    ///
    /// Every page named as a key becomes part of the corpus. Links collapse to a
    /// set, and links to the page itself or to pages that are not keys are
    /// discarded. A page listed twice has its link sets merged.
    pub fn from_links<I, P, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: Vec<(String, Vec<String>)> = pages
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        // 1. Intern page identifiers in sorted order
        let mut index_to_page: Vec<String> = Vec::with_capacity(raw.len());
        for (page, _) in &raw {
            if index_to_page.last() != Some(page) {
                index_to_page.push(page.clone());
            }
        }
        let page_to_index: FxHashMap<String, PageId> = index_to_page
            .iter()
            .enumerate()
            .map(|(idx, page)| (page.clone(), idx))
            .collect();

        let page_count = index_to_page.len();

        // 2. Resolve links into index sets
        let mut outgoing: Vec<BTreeSet<PageId>> = vec![BTreeSet::new(); page_count];
        for (page, links) in raw {
            let source = page_to_index[&page];
            for link in links {
                match page_to_index.get(&link) {
                    Some(&target) if target != source => {
                        outgoing[source].insert(target);
                    }
                    _ => {}
                }
            }
        }

        let mut incoming: Vec<Vec<PageId>> = vec![Vec::new(); page_count];
        for (source, targets) in outgoing.iter().enumerate() {
            for &target in targets {
                incoming[target].push(source);
            }
        }

        // 3. Flatten into CSR
        let mut out_offsets = Vec::with_capacity(page_count + 1);
        let mut out_targets = Vec::new();
        out_offsets.push(0);
        for targets in outgoing {
            out_targets.extend(targets);
            out_offsets.push(out_targets.len());
        }

        let mut in_offsets = Vec::with_capacity(page_count + 1);
        let mut in_sources = Vec::new();
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        Corpus {
            index_to_page,
            page_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Number of pages (N)
    pub fn page_count(&self) -> usize {
        self.index_to_page.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_page.is_empty()
    }

    /// Total number of links in the corpus
    pub fn link_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Identifier of a page by index
    pub fn page_name(&self, page: PageId) -> Option<&str> {
        self.index_to_page.get(page).map(String::as_str)
    }

    /// Index of a page by identifier
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.page_to_index.get(name).copied()
    }

    /// All page identifiers, in index (sorted) order
    pub fn page_names(&self) -> &[String] {
        &self.index_to_page
    }

    /// Get the out-degree of a page (by index)
    pub fn out_degree(&self, page: PageId) -> usize {
        self.out_offsets[page + 1] - self.out_offsets[page]
    }

    /// Get the in-degree of a page (by index)
    pub fn in_degree(&self, page: PageId) -> usize {
        self.in_offsets[page + 1] - self.in_offsets[page]
    }

    /// Pages linked to by `page`
    pub fn successors(&self, page: PageId) -> &[PageId] {
        &self.out_targets[self.out_offsets[page]..self.out_offsets[page + 1]]
    }

    /// Pages linking to `page`
    pub fn predecessors(&self, page: PageId) -> &[PageId] {
        &self.in_sources[self.in_offsets[page]..self.in_offsets[page + 1]]
    }

    /// Whether `source` links to `target`
    pub fn links_to(&self, source: PageId, target: PageId) -> bool {
        self.successors(source).binary_search(&target).is_ok()
    }

    /// A page with no outgoing links inside the corpus
    pub fn is_dangling(&self, page: PageId) -> bool {
        self.out_degree(page) == 0
    }

    /// Iterate over `(identifier, link identifiers)` in page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        (0..self.page_count()).map(move |page| {
            let links = self
                .successors(page)
                .iter()
                .map(|&target| self.index_to_page[target].as_str())
                .collect();
            (self.index_to_page[page].as_str(), links)
        })
    }
}
