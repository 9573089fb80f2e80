//! TUI rendering and terminal management (impure shell)

pub mod picker;
mod styles;
pub mod surface;

pub use picker::{draw, status_text, visible_rows};
pub use styles::{ColorConfig, PickerStyles};
pub use surface::{map_key_event, CrosstermEvents, EventSource, RenderSurface, TerminalSurface};

use crate::matcher::Matcher;
use crate::state::{Outcome, Session, Transition};
use crate::view_state::FilterCache;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stderr};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Settings the picker needs beyond the lines themselves.
#[derive(Debug, Clone)]
pub struct PickerOptions {
    /// Label drawn before the query.
    pub prompt: String,
    /// Row and match styles.
    pub styles: PickerStyles,
    /// Query typed before the first frame.
    pub initial_query: Option<String>,
    /// Filter cache bound; `0` is unbounded.
    pub cache_capacity: usize,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            prompt: crate::config::DEFAULT_PROMPT.to_string(),
            styles: PickerStyles::default(),
            initial_query: None,
            cache_capacity: 0,
        }
    }
}

/// Drive `session` until it reaches a terminal state.
///
/// One event in, at most one frame out. Ignored events skip the redraw.
///
/// # Errors
///
/// Returns `TuiError::Io` if the surface fails to read input or draw.
pub fn run_session<S, M>(
    surface: &mut S,
    session: &mut Session<M>,
    prompt: &str,
    styles: &PickerStyles,
) -> Result<Outcome, TuiError>
where
    S: RenderSurface,
    M: Matcher,
{
    let (_, height) = surface.size()?;
    session.resize(visible_rows(height));
    draw(surface, session, prompt, styles)?;

    loop {
        let event = surface.poll_event()?;
        if event == crate::model::InputEvent::Resize {
            let (width, height) = surface.size()?;
            debug!(width, height, "Handling resize");
            session.resize(visible_rows(height));
        }

        match session.handle_event(event) {
            Transition::Redraw => draw(surface, session, prompt, styles)?,
            Transition::Ignored => {}
            Transition::Finished(outcome) => {
                info!(
                    confirmed = matches!(outcome, Outcome::Confirmed(_)),
                    query = session.query(),
                    "Session finished"
                );
                return Ok(outcome);
            }
        }
    }
}

/// Build the session for `lines` on `surface` and run it.
///
/// # Errors
///
/// Returns `TuiError::Io` if the surface fails.
pub fn run_on_surface<S: RenderSurface>(
    surface: &mut S,
    lines: Vec<String>,
    options: &PickerOptions,
) -> Result<Outcome, TuiError> {
    let (_, height) = surface.size()?;
    let cache = FilterCache::with_matcher(
        lines,
        crate::matcher::SubstringMatcher,
        options.cache_capacity,
    );
    let mut session = Session::with_cache(cache, visible_rows(height));
    if let Some(query) = &options.initial_query {
        session.set_query(query.as_str());
    }

    run_session(surface, &mut session, &options.prompt, &options.styles)
}

/// Initialize the terminal, run the picker over `lines`, restore the terminal.
///
/// The frame is drawn on stderr so stdout stays free for the selected line.
/// The terminal is restored before returning, on success and on error.
///
/// Note: Logging must be initialized by caller before calling this function.
///
/// # Errors
///
/// Returns `TuiError::Io` if the terminal cannot be initialized (before any
/// session state exists) or fails during the run.
pub fn run_with_lines(lines: Vec<String>, options: &PickerOptions) -> Result<Outcome, TuiError> {
    let terminal = init_terminal()?;
    let mut surface = TerminalSurface::new(terminal, CrosstermEvents);

    let result = run_on_surface(&mut surface, lines, options);

    // Always restore terminal state
    let restored = restore_terminal();

    settle_run(result, restored)
}

/// Combine the session result with the outcome of restoring the terminal.
///
/// The session result wins: a confirmed line survives a failed restore, and
/// a session error is not masked by a restore error.
fn settle_run(
    result: Result<Outcome, TuiError>,
    restored: Result<(), TuiError>,
) -> Result<Outcome, TuiError> {
    if let Err(err) = restored {
        warn!(error = %err, "Failed to restore terminal");
    }

    result
}

/// Enter raw mode and the alternate screen on stderr.
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>, TuiError> {
    enable_raw_mode()?;
    let setup = io::stderr()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stderr())));

    setup.map_err(|err| {
        let _ = restore_terminal();
        TuiError::Io(err)
    })
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stderr().execute(LeaveAlternateScreen)?;
    Ok(())
}
