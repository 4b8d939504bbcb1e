//! Resolve the connected monitors, apply an action and hand the result to a backend.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::ToggleError;
pub use types::{ToggleOutcome, ToggleRequest};
