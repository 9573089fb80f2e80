//! Input sources for the lines to pick from.
//!
//! Input is read to completion before the picker starts; lines never change
//! during a session.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;
use tracing::info;

pub mod lines;

pub use lines::read_lines;

/// Where the lines come from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file named on the command line.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Read every line from the source.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file vanished since
    /// detection, or `InputError::Io` for read failures.
    pub fn read_all(&self) -> Result<Vec<String>, InputError> {
        let lines = match self {
            InputSource::File(path) => {
                let file = File::open(path).map_err(|err| match err.kind() {
                    std::io::ErrorKind::NotFound => InputError::FileNotFound { path: path.clone() },
                    _ => InputError::Io(err),
                })?;
                read_lines(BufReader::new(file))?
            }
            InputSource::Stdin => read_lines(std::io::stdin().lock())?,
        };

        info!(source = ?self, lines = lines.len(), "Input loaded");
        Ok(lines)
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: use it (must exist)
/// 2. If stdin is piped: use stdin
/// 3. Else: return `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist, or
/// `InputError::NoInput` if there is no file and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(InputSource::File(path)),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}
