//! Selected row and scroll offset within the filtered view.

/// Selection state over a filtered view.
///
/// Invariants, restored by [`Selection::clamp`] after every change:
/// - `selected < len` when the view is non-empty, `selected == 0` otherwise
/// - `scroll_offset <= selected < scroll_offset + visible_rows`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: usize,
    scroll_offset: usize,
}

impl Selection {
    /// Index of the selected entry in the filtered view.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible entry.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Back to the first entry, scrolled to the top.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move up one entry. Returns false at the top.
    pub fn move_up(&mut self, visible_rows: usize) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        self.scroll_into_view(visible_rows);
        true
    }

    /// Move down one entry. Returns false at the last entry.
    pub fn move_down(&mut self, len: usize, visible_rows: usize) -> bool {
        if self.selected + 1 >= len {
            return false;
        }
        self.selected += 1;
        self.scroll_into_view(visible_rows);
        true
    }

    /// Re-establish both invariants for a view of `len` entries.
    pub fn clamp(&mut self, len: usize, visible_rows: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.scroll_into_view(visible_rows);
    }

    fn scroll_into_view(&mut self, visible_rows: usize) {
        let rows = visible_rows.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + rows {
            self.scroll_offset = self.selected + 1 - rows;
        }
    }
}
