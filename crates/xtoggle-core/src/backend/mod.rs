//! Display backends
//!
//! A backend turns the desired monitor state into one external command.

pub mod backends;
pub mod errors;
pub mod registry;
pub mod traits;
pub mod types;

pub use errors::BackendError;
pub use registry::{get_backend, get_backend_by_name};
pub use traits::DisplayBackend;
pub use types::BackendType;
