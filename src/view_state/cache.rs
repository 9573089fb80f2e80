//! Per-query memo of filtered, ranked views over the loaded lines.

use crate::matcher::{Matcher, Matches, SubstringMatcher};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

/// One line kept by the filter, referenced by its original index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    /// Index of the line in the original input.
    pub index: usize,
    /// Spans of the query within that line. Empty for the empty query.
    pub matches: Matches,
}

/// Lines matching one query, ordered by descending match weight.
///
/// Ties keep input order. For the empty query this is every line in input
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    entries: Vec<FilteredEntry>,
}

impl FilteredView {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `position` in ranked order.
    pub fn get(&self, position: usize) -> Option<&FilteredEntry> {
        self.entries.get(position)
    }

    /// All entries in ranked order.
    pub fn entries(&self) -> &[FilteredEntry] {
        &self.entries
    }

    /// Original line indexes in ranked order.
    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.index)
    }
}

/// Memoizes [`FilteredView`]s keyed by the exact query string.
///
/// Owns the immutable line set, so every cached view stays valid for the
/// lifetime of the cache. With a capacity, least recently used queries are
/// evicted and recomputed on demand; without one nothing is ever evicted.
pub struct FilterCache<M = SubstringMatcher> {
    lines: Vec<String>,
    matcher: M,
    views: LruCache<String, Arc<FilteredView>>,
    scans: usize,
}

impl FilterCache<SubstringMatcher> {
    /// Unbounded cache over `lines` using [`SubstringMatcher`].
    pub fn new(lines: Vec<String>) -> Self {
        Self::with_matcher(lines, SubstringMatcher, 0)
    }
}

impl<M: Matcher> FilterCache<M> {
    /// Cache over `lines` using `matcher`.
    ///
    /// `capacity` bounds the number of distinct queries kept; `0` is unbounded.
    pub fn with_matcher(lines: Vec<String>, matcher: M, capacity: usize) -> Self {
        let views = match NonZeroUsize::new(capacity) {
            Some(cap) => LruCache::new(cap),
            None => LruCache::unbounded(),
        };

        Self {
            lines,
            matcher,
            views,
            scans: 0,
        }
    }

    /// The filtered view for `query`, computed on first request.
    pub fn filtered_view(&mut self, query: &str) -> Arc<FilteredView> {
        if let Some(view) = self.views.get(query) {
            return Arc::clone(view);
        }

        let view = Arc::new(self.compute(query));
        self.scans += 1;
        self.views.put(query.to_owned(), Arc::clone(&view));
        debug!(
            query,
            matched = view.len(),
            cached = self.views.len(),
            "Filter cache miss"
        );
        view
    }

    /// Text of the line at original `index`.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All loaded lines in input order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of full scans performed so far (one per cache miss).
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    /// Number of distinct queries currently cached.
    pub fn cached_queries(&self) -> usize {
        self.views.len()
    }

    fn compute(&self, query: &str) -> FilteredView {
        if query.is_empty() {
            let entries = (0..self.lines.len())
                .map(|index| FilteredEntry {
                    index,
                    matches: Matches::none(),
                })
                .collect();
            return FilteredView { entries };
        }

        let mut entries: Vec<FilteredEntry> = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let matches = self.matcher.match_line(line, query);
                (!matches.is_empty()).then_some(FilteredEntry { index, matches })
            })
            .collect();

        // sort_by is stable: equal weights keep input order
        entries.sort_by(|a, b| b.matches.weight().cmp(&a.matches.weight()));

        FilteredView { entries }
    }
}

impl<M> std::fmt::Debug for FilterCache<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterCache")
            .field("lines", &self.lines.len())
            .field("cached_queries", &self.views.len())
            .field("scans", &self.scans)
            .finish()
    }
}
