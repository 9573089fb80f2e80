//! Interactive picker session.
//!
//! One session per run: owns the query, the selection and the filter cache,
//! and turns each [`InputEvent`] into a [`Transition`]. Transitions are total:
//! every event is defined for every reachable state.

use super::selection::Selection;
use crate::matcher::{Matcher, SubstringMatcher};
use crate::model::InputEvent;
use crate::view_state::{FilterCache, FilteredEntry, FilteredView};
use std::sync::Arc;
use tracing::debug;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked this line.
    Confirmed(String),
    /// The user aborted.
    Cancelled,
}

/// Result of feeding one event to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State may have changed; draw a new frame.
    Redraw,
    /// Nothing changed.
    Ignored,
    /// The session reached a terminal state.
    Finished(Outcome),
}

/// State of one interactive run.
#[derive(Debug)]
pub struct Session<M = SubstringMatcher> {
    cache: FilterCache<M>,
    query: String,
    view: Arc<FilteredView>,
    selection: Selection,
    visible_rows: usize,
}

impl Session<SubstringMatcher> {
    /// Session over `lines` with an unbounded cache.
    pub fn new(lines: Vec<String>, visible_rows: usize) -> Self {
        Self::with_cache(FilterCache::new(lines), visible_rows)
    }
}

impl<M: Matcher> Session<M> {
    /// Session driven by an existing cache.
    pub fn with_cache(mut cache: FilterCache<M>, visible_rows: usize) -> Self {
        let view = cache.filtered_view("");
        Self {
            cache,
            query: String::new(),
            view,
            selection: Selection::default(),
            visible_rows,
        }
    }

    /// Replace the query text, as if typed. Resets the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.query_changed();
    }

    /// Apply one event.
    pub fn handle_event(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::Char(ch) => {
                self.query.push(ch);
                self.query_changed();
                Transition::Redraw
            }
            InputEvent::Backspace => {
                if self.query.pop().is_none() {
                    return Transition::Ignored;
                }
                self.query_changed();
                Transition::Redraw
            }
            InputEvent::Up => {
                if self.selection.move_up(self.visible_rows) {
                    Transition::Redraw
                } else {
                    Transition::Ignored
                }
            }
            InputEvent::Down => {
                if self.selection.move_down(self.view.len(), self.visible_rows) {
                    Transition::Redraw
                } else {
                    Transition::Ignored
                }
            }
            InputEvent::Enter => match self.selected_line() {
                Some(line) => Transition::Finished(Outcome::Confirmed(line.to_owned())),
                None => Transition::Ignored,
            },
            InputEvent::Escape | InputEvent::CtrlC => Transition::Finished(Outcome::Cancelled),
            // Caller re-reads the surface size and calls resize()
            InputEvent::Resize => Transition::Redraw,
            InputEvent::Other => Transition::Ignored,
        }
    }

    /// New number of rows available for entries. Re-clamps the scroll offset.
    pub fn resize(&mut self, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.selection.clamp(self.view.len(), visible_rows);
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Filtered view for the current query.
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Rows available for entries.
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Number of loaded lines.
    pub fn total_lines(&self) -> usize {
        self.cache.lines().len()
    }

    /// Text of the line at original `index`.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.cache.line(index)
    }

    /// Entries that fit in the window, paired with their view position.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &FilteredEntry)> + '_ {
        self.view
            .entries()
            .iter()
            .enumerate()
            .skip(self.selection.scroll_offset())
            .take(self.visible_rows.max(1))
    }

    /// Text of the selected line, if the view is non-empty.
    pub fn selected_line(&self) -> Option<&str> {
        self.view
            .get(self.selection.selected())
            .and_then(|entry| self.cache.line(entry.index))
    }

    /// The underlying cache.
    pub fn cache(&self) -> &FilterCache<M> {
        &self.cache
    }

    fn query_changed(&mut self) {
        self.view = self.cache.filtered_view(&self.query);
        self.selection.reset();
        debug!(query = %self.query, filtered = self.view.len(), "Query changed");
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
