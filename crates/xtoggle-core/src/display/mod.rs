pub mod errors;
pub mod escape;
pub mod server;
pub mod types;
pub mod xrandr;

// Re-export commonly used types and functions
pub use errors::DisplayError;
pub use server::{DisplayServer, X11DisplayServer};
pub use types::{ConnectedOutput, DisplayCommand, Geometry};
pub use xrandr::parse_query_output;
