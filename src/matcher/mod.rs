//! Literal, case-insensitive substring matching.
//!
//! A query is split on whitespace into tokens. Every occurrence of every token
//! is reported as its own [`Match`] span over the rune (codepoint) positions of
//! the line. Tokens combine with OR: a line matches when any token occurs.

use std::ops::Range;

// ===== Match =====

/// Half-open span `[first, last)` over the rune positions of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    first: usize,
    last: usize,
}

impl Match {
    /// Create a span covering runes `first..last`.
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "match span must not be reversed");
        Self { first, last }
    }

    /// First rune covered by the span.
    pub fn first(&self) -> usize {
        self.first
    }

    /// One past the last rune covered by the span.
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of runes covered.
    pub fn len(&self) -> usize {
        self.last - self.first
    }

    /// True for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// True if `position` lies inside the span.
    pub fn contains(&self, position: usize) -> bool {
        (self.first..self.last).contains(&position)
    }

    /// The span as a rune range.
    pub fn range(&self) -> Range<usize> {
        self.first..self.last
    }
}

// ===== Matches =====

/// All spans produced for one (line, query) pair, in discovery order.
///
/// Spans from different tokens may overlap; they are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches(Vec<Match>);

impl Matches {
    /// No spans.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// True if any span covers the rune at `position`.
    pub fn is_match(&self, position: usize) -> bool {
        self.0.iter().any(|m| m.contains(position))
    }

    /// Sum of span lengths. Overlapping runes are counted once per span.
    pub fn weight(&self) -> usize {
        self.0.iter().map(Match::len).sum()
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no span was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate spans in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.0.iter()
    }

    fn push(&mut self, m: Match) {
        self.0.push(m);
    }
}

impl From<Vec<Match>> for Matches {
    fn from(spans: Vec<Match>) -> Self {
        Self(spans)
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ===== Matcher =====

/// Strategy that finds match spans of a query inside a line.
///
/// An empty query yields [`Matches::none`]; callers treat it as "everything
/// matches" rather than relying on the spans.
pub trait Matcher {
    /// Compute the spans of `query` within `line`.
    fn match_line(&self, line: &str, query: &str) -> Matches;
}

/// Literal substring matcher, case-insensitive, OR across whitespace tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn match_line(&self, line: &str, query: &str) -> Matches {
        let mut matches = Matches::none();
        if query.is_empty() {
            return matches;
        }

        let haystack = lower_runes(line);
        for token in query.split_whitespace() {
            let needle = lower_runes(token);
            find_occurrences(&haystack, &needle, &mut matches);
        }

        matches
    }
}

/// Lower-case codepoint by codepoint, one output rune per input rune.
///
/// Keeping the lengths equal is what lets span positions index the original
/// line when rendering.
fn lower_runes(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Record every (possibly overlapping) occurrence of `needle`, left to right.
fn find_occurrences(haystack: &[char], needle: &[char], matches: &mut Matches) {
    if needle.is_empty() || needle.len() > haystack.len() {
        return;
    }

    for (start, window) in haystack.windows(needle.len()).enumerate() {
        if window == needle {
            matches.push(Match::new(start, start + needle.len()));
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
