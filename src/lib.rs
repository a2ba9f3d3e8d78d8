//! todo-forms - Form state and validation engine for a todo web application
//!
//! Tracks per-field value/touched/changed state, runs an ordered set of
//! validators per field (including cross-field matching), and derives
//! form-level validity and dirtiness. Pure and synchronous: the engine
//! never talks to a network, and backend submission failures are the
//! caller's concern.

mod error;
mod forms;

pub mod definitions;

pub use error::{FormError, Result};
pub use forms::*;
