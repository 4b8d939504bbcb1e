pub mod errors;
pub mod operations;
pub mod resolve;
pub mod types;

// Re-export commonly used types and functions
pub use errors::MonitorError;
pub use operations::{apply_action, repack_positions, select_primary};
pub use resolve::resolve_monitors;
pub use types::{Action, Monitor, MonitorSet};
