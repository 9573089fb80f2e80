//! Error types for pucy.
//!
//! Errors are structured with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from startup and the run loop
//!   - [`InputError`] - Reading lines from a file or stdin
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read or parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal initialisation or drawing
//!
//! # Recovery Strategy
//!
//! Every variant is fatal and surfaces before or outside the interactive
//! session. Transitions inside the session are total and never produce an
//! error: out-of-range selections are prevented by clamping, not reported.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use pucy::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     let _lines = read_lines()?;
///     Ok(())
/// }
/// # fn read_lines() -> Result<Vec<String>, InputError> { Ok(vec![]) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the input lines.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal could not be initialised or drawn to.
    ///
    /// Raised before any session state exists when the terminal device is
    /// unavailable, or if the device fails mid-run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),
}

/// Errors encountered when reading input lines from a file or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: Display the path and exit
/// - **NoInput**: Show both invocation modes (file argument or pipe)
/// - **Io**: Display the OS error and exit
#[derive(Debug, Error)]
pub enum InputError {
    /// The file given on the command line does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use pucy::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file argument and stdin is an interactive terminal.
    ///
    /// ```
    /// use pucy::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("pipe lines to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe lines to stdin")]
    NoInput,

    /// Generic I/O failure while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
