//! Saved display configuration: the desktop's `monitors.xml` and the
//! NVIDIA metamodes from `xorg.conf`.

pub mod errors;
pub mod metamodes;
pub mod monitors_xml;

pub use errors::LayoutError;
pub use metamodes::Metamodes;
pub use monitors_xml::{DisplayLayout, LayoutEntry};
