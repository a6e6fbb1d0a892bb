//! Session module holding the engine lifecycle and reference directory
//!
//! There is no process-wide state: callers own a [`Session`] and pass it to
//! the engine. Share it between threads behind a `Mutex`.

mod reference;
mod state;

// Re-export public types
pub use reference::{PathValidation, ReferenceDirectory};
pub use state::Session;
