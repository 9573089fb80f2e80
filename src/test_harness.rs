//! Test harness for driving the picker against `TestBackend`.
//!
//! Provides scripted input and buffer capture so sessions can be run end to
//! end without a real terminal.

use crate::model::InputEvent;
use crate::view::{EventSource, RenderSurface, TerminalSurface};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::io;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

fn script_exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
}

/// Events replayed in order; running out is reported as an I/O error.
#[derive(Debug, Default)]
pub(crate) struct ScriptedEvents(VecDeque<InputEvent>);

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        self.0.pop_front().ok_or_else(script_exhausted)
    }
}

/// One scripted step: an event, or a terminal resize that yields
/// [`InputEvent::Resize`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum ScriptStep {
    Event(InputEvent),
    Resize(u16, u16),
}

/// [`TerminalSurface`] over `TestBackend` driven by a script.
pub(crate) struct HarnessSurface {
    inner: TerminalSurface<TestBackend, ScriptedEvents>,
    script: VecDeque<ScriptStep>,
}

impl HarnessSurface {
    pub(crate) fn terminal(&self) -> &Terminal<TestBackend> {
        self.inner.terminal()
    }
}

impl RenderSurface for HarnessSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        self.inner.size()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.inner.set_cell(x, y, ch, style);
    }

    fn present(&mut self) -> io::Result<()> {
        self.inner.present()
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        match self.script.pop_front() {
            Some(ScriptStep::Event(event)) => Ok(event),
            Some(ScriptStep::Resize(width, height)) => {
                self.inner
                    .terminal_mut()
                    .backend_mut()
                    .resize(width, height);
                Ok(InputEvent::Resize)
            }
            None => Err(script_exhausted()),
        }
    }
}

/// Surface of the given size with no scripted input.
pub(crate) fn test_surface(width: u16, height: u16) -> HarnessSurface {
    test_surface_with_script(width, height, Vec::new())
}

/// Surface that replays `events`.
pub(crate) fn test_surface_with_events(
    width: u16,
    height: u16,
    events: Vec<InputEvent>,
) -> HarnessSurface {
    let steps = events.into_iter().map(ScriptStep::Event).collect();
    test_surface_with_script(width, height, steps)
}

/// Surface that replays `steps`.
pub(crate) fn test_surface_with_script(
    width: u16,
    height: u16,
    steps: Vec<ScriptStep>,
) -> HarnessSurface {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    HarnessSurface {
        inner: TerminalSurface::new(terminal, ScriptedEvents::default()),
        script: steps.into(),
    }
}
