//! Drawing and input capability consumed by the picker loop.

use crate::model::InputEvent;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Terminal;
use std::io;

/// What the session needs from a terminal.
///
/// Cell writes go to an off-screen frame; nothing is visible until
/// [`present`](RenderSurface::present).
pub trait RenderSurface {
    /// Current `(columns, rows)`.
    ///
    /// # Errors
    ///
    /// Returns the device error if the size cannot be queried.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Blank the off-screen frame, resizing it to the current size.
    fn clear(&mut self);

    /// Write one cell. Out-of-bounds positions are silently ignored.
    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style);

    /// Flush the off-screen frame to the device.
    ///
    /// # Errors
    ///
    /// Returns the device error if writing fails.
    fn present(&mut self) -> io::Result<()>;

    /// Block until the next input event.
    ///
    /// # Errors
    ///
    /// Returns the device error if reading fails.
    fn poll_event(&mut self) -> io::Result<InputEvent>;
}

/// Blocking source of input events.
pub trait EventSource {
    /// Block until the next event.
    ///
    /// # Errors
    ///
    /// Returns the device error if reading fails.
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Reads key and resize events from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        Ok(match event::read()? {
            Event::Key(key) => map_key_event(key),
            Event::Resize(..) => InputEvent::Resize,
            _ => InputEvent::Other,
        })
    }
}

/// Map a crossterm key event to a picker event.
///
/// Presses count for every key. Repeats count only for Up and Down, so a held
/// arrow keeps moving the cursor. Releases map to [`InputEvent::Other`].
pub fn map_key_event(key: KeyEvent) -> InputEvent {
    match key.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Repeat => {
            return match key.code {
                KeyCode::Up => InputEvent::Up,
                KeyCode::Down => InputEvent::Down,
                _ => InputEvent::Other,
            };
        }
        KeyEventKind::Release => return InputEvent::Other,
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => InputEvent::CtrlC,
        KeyCode::Char(ch) if !ctrl && !alt && !ch.is_control() => InputEvent::Char(ch),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Esc => InputEvent::Escape,
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        _ => InputEvent::Other,
    }
}

/// [`RenderSurface`] over a ratatui [`Terminal`].
///
/// Generic over backend to support testing with `TestBackend`, and over the
/// event source to support scripted input.
pub struct TerminalSurface<B, E>
where
    B: Backend,
{
    terminal: Terminal<B>,
    frame: Buffer,
    events: E,
}

impl<B, E> TerminalSurface<B, E>
where
    B: Backend,
    E: EventSource,
{
    /// Wrap an initialised terminal.
    pub fn new(terminal: Terminal<B>, events: E) -> Self {
        Self {
            terminal,
            frame: Buffer::empty(Rect::default()),
            events,
        }
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the wrapped terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B, E> RenderSurface for TerminalSurface<B, E>
where
    B: Backend,
    E: EventSource,
{
    fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn clear(&mut self) {
        // Keep the previous area if the size query fails
        if let Ok((width, height)) = self.size() {
            let area = Rect::new(0, 0, width, height);
            if self.frame.area != area {
                self.frame.resize(area);
            }
        }
        self.frame.reset();
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(cell) = self.frame.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let frame = &self.frame;
        self.terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let (Some(src), Some(dst)) = (frame.cell((x, y)), buf.cell_mut((x, y))) {
                        *dst = src.clone();
                    }
                }
            }
        })?;
        Ok(())
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        self.events.next_event()
    }
}
