//! Domain model types (pure).

pub mod error;
pub mod input_event;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use input_event::InputEvent;
