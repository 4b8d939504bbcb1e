mod nvidia;
mod xrandr;

pub use nvidia::NvidiaBackend;
pub use xrandr::XrandrBackend;
