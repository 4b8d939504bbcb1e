//! xtoggle-core: Core library for toggling monitors on X11
//!
//! This library reads the current monitor layout (xrandr query, the desktop's
//! `monitors.xml` and, for NVIDIA setups, the `xorg.conf` metamodes), applies
//! an on/off action to monitors addressed by their left-to-right position and
//! hands the result to a display backend.
//!
//! # Main Entry Points
//!
//! - [`toggle`] - Resolve monitors, apply an action, issue the backend command
//! - [`backend`] - xrandr and nvidia-settings backends
//! - [`monitors`] - Monitor model and action semantics
//! - [`config`] - Configuration management

pub mod backend;
pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod layout;
pub mod logging;
pub mod monitors;
pub mod toggle;

// Re-export commonly used types at crate root for convenience
pub use backend::{BackendType, DisplayBackend, get_backend};
pub use config::XToggleConfig;
pub use display::{DisplayCommand, DisplayServer, X11DisplayServer};
pub use monitors::{Action, Monitor, MonitorSet};
pub use toggle::{ToggleError, ToggleOutcome, ToggleRequest};

// Re-export handler module as the primary API
pub use toggle::handler as toggle_ops;

// Re-export logging initialization
pub use logging::init_logging;
