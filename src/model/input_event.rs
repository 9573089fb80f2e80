//! Input events consumed by the picker session.

/// One input event delivered by a [`RenderSurface`](crate::view::RenderSurface).
///
/// Independent of the terminal library; the surface maps raw key events onto
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A printable character to append to the query.
    Char(char),
    /// Delete the last character of the query.
    Backspace,
    /// Confirm the selected line.
    Enter,
    /// Cancel without a selection.
    Escape,
    /// Move the selection up one line.
    Up,
    /// Move the selection down one line.
    Down,
    /// Cancel without a selection.
    CtrlC,
    /// The terminal changed size.
    Resize,
    /// Anything else (mouse, focus, unbound keys).
    Other,
}
