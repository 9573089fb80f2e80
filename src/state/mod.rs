//! Picker state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod selection;
pub mod session;

// Re-export for convenience
pub use selection::Selection;
pub use session::{Outcome, Session, Transition};
