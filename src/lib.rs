//! pucy - interactive line picker
//!
//! Reads lines from a file or stdin, narrows them as a query is typed, and
//! returns the line the user confirms.
//!
//! The pure core (`matcher`, `view_state`, `state`) holds the filtering and
//! selection rules; the impure shell (`view`, `source`, `config`, `logging`)
//! talks to the terminal, the filesystem and the environment.

pub mod config;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;
