//! Derived view state computed from the loaded lines.
//!
//! Pure values: nothing here touches the terminal.

pub mod cache;

pub use cache::{FilterCache, FilteredEntry, FilteredView};
