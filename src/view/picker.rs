//! One frame of the picker: query bar, status summary, entry window.

use super::styles::PickerStyles;
use super::surface::RenderSurface;
use crate::matcher::{Matcher, Matches};
use crate::state::Session;
use ratatui::style::Style;
use std::io;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows above the first entry.
pub const HEADER_ROWS: u16 = 1;

/// Rows available for entries on a terminal `height` rows tall. Never zero.
pub fn visible_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(HEADER_ROWS)).max(1)
}

/// Status summary drawn at the right of the header.
pub fn status_text<M: Matcher>(session: &Session<M>) -> String {
    let filtered = session.view().len();
    format!(
        "Total: {}  Filtered: {}  Scroll: {}/{}",
        session.total_lines(),
        filtered,
        session.selection().scroll_offset() + 1,
        filtered
    )
}

/// Draw the whole frame and present it.
///
/// # Errors
///
/// Returns the surface error if the size query or flush fails.
pub fn draw<S, M>(
    surface: &mut S,
    session: &Session<M>,
    prompt: &str,
    styles: &PickerStyles,
) -> io::Result<()>
where
    S: RenderSurface,
    M: Matcher,
{
    let (width, height) = surface.size()?;
    surface.clear();

    let bar = format!("{prompt}{}", session.query());
    put_str(surface, 0, 0, width, &bar, styles.base);

    let status = status_text(session);
    let status_x = usize::from(width).saturating_sub(status.width() + 1);
    put_str(surface, clamp_u16(status_x), 0, width, &status, styles.status);

    let selected = session.selection().selected();
    let rows = session.visible_entries().zip(HEADER_ROWS..height);
    for ((position, entry), y) in rows {
        let is_selected = position == selected;
        if is_selected {
            fill_row(surface, y, width, styles.selected);
        }
        let line = session.line(entry.index).unwrap_or_default();
        put_entry(surface, y, width, line, &entry.matches, is_selected, styles);
    }

    surface.present()
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Glyph and column width for a rune, or `None` to skip it.
fn display_glyph(ch: char) -> Option<(char, u16)> {
    match ch {
        '\t' => Some((' ', 1)),
        c if c.is_control() => Some(('?', 1)),
        c => match c.width() {
            Some(0) => None,
            Some(w) => Some((c, clamp_u16(w))),
            None => Some(('?', 1)),
        },
    }
}

/// Place one glyph at column `x`, blanking the cells a wide glyph covers.
///
/// Returns the next free column, or `None` if the glyph does not fit.
fn put_glyph<S: RenderSurface>(
    surface: &mut S,
    x: u16,
    y: u16,
    width: u16,
    glyph: char,
    glyph_width: u16,
    style: Style,
) -> Option<u16> {
    let next = x.checked_add(glyph_width)?;
    if next > width {
        return None;
    }
    surface.set_cell(x, y, glyph, style);
    for covered in x + 1..next {
        surface.set_cell(covered, y, ' ', style);
    }
    Some(next)
}

fn put_str<S: RenderSurface>(surface: &mut S, x: u16, y: u16, width: u16, text: &str, style: Style) {
    let mut col = x;
    for (glyph, glyph_width) in text.chars().filter_map(display_glyph) {
        match put_glyph(surface, col, y, width, glyph, glyph_width, style) {
            Some(next) => col = next,
            None => break,
        }
    }
}

fn put_entry<S: RenderSurface>(
    surface: &mut S,
    y: u16,
    width: u16,
    line: &str,
    matches: &Matches,
    selected: bool,
    styles: &PickerStyles,
) {
    let mut col = 0;
    for (position, ch) in line.chars().enumerate() {
        let Some((glyph, glyph_width)) = display_glyph(ch) else {
            continue;
        };
        let style = styles.rune_style(selected, matches.is_match(position));
        match put_glyph(surface, col, y, width, glyph, glyph_width, style) {
            Some(next) => col = next,
            None => break,
        }
    }
}

fn fill_row<S: RenderSurface>(surface: &mut S, y: u16, width: u16, style: Style) {
    for x in 0..width {
        surface.set_cell(x, y, ' ', style);
    }
}
