use std::fmt;

use super::errors::MonitorError;

/// One connected monitor, addressed by its left-to-right `index` (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct Monitor {
    pub index: usize,
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Footprint on the screen, used for packing.
    pub width: u32,
    pub height: u32,
    /// Mode to request when it differs from `width`x`height` (rotated outputs).
    pub mode: Option<(u32, u32)>,
    /// Refresh rate to request; None leaves the rate to the backend.
    pub rate: Option<f64>,
    pub enabled: bool,
    /// NVIDIA metamode for this output, when one was loaded.
    pub metamodes: Option<String>,
}

impl Monitor {
    pub fn status_label(&self) -> &'static str {
        if self.enabled { "ON" } else { "OFF" }
    }

    /// `WxH` of the mode to request.
    pub fn mode_size(&self) -> (u32, u32) {
        self.mode.unwrap_or((self.width, self.height))
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, connection: {}, position: {}",
            self.name,
            self.status_label(),
            self.index
        )
    }
}

/// All connected monitors of one invocation, ordered by ascending x.
///
/// Built fresh from the live query every run; indices are never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSet {
    monitors: Vec<Monitor>,
    original_primary: Option<String>,
}

impl MonitorSet {
    /// Sort `monitors` by x (stable, so ties keep query order) and assign indices.
    pub fn new(mut monitors: Vec<Monitor>, original_primary: Option<String>) -> Self {
        monitors.sort_by_key(|m| m.x);
        for (i, monitor) in monitors.iter_mut().enumerate() {
            monitor.index = i + 1;
        }
        Self {
            monitors,
            original_primary,
        }
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Monitor> {
        self.monitors.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.iter().filter(|m| m.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    /// Name of the primary monitor according to the saved layout or xrandr.
    pub fn original_primary(&self) -> Option<&str> {
        self.original_primary.as_deref()
    }

    /// Monitor at 1-based `index`.
    pub fn get(&self, index: usize) -> Result<&Monitor, MonitorError> {
        self.check_index(index)?;
        Ok(&self.monitors[index - 1])
    }

    pub fn by_name(&self, name: &str) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.name == name)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), MonitorError> {
        if index == 0 || index > self.monitors.len() {
            return Err(MonitorError::IndexOutOfRange {
                index,
                count: self.monitors.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn monitors_mut(&mut self) -> &mut [Monitor] {
        &mut self.monitors
    }
}

impl<'a> IntoIterator for &'a MonitorSet {
    type Item = &'a Monitor;
    type IntoIter = std::slice::Iter<'a, Monitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.monitors.iter()
    }
}

/// What to do with the monitors. Targets are 1-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(usize),
    Enable(usize),
    Disable(usize),
    EnableOnly(usize),
    ToggleOnly(usize),
    EnableAll,
}

impl Action {
    /// Build an action from its CLI verb.
    ///
    /// Returns None for unknown verbs or when a targeted verb has no target.
    pub fn from_verb(verb: &str, target: Option<usize>) -> Option<Self> {
        match (verb, target) {
            ("toggle", Some(i)) => Some(Action::Toggle(i)),
            ("enable", Some(i)) => Some(Action::Enable(i)),
            ("disable", Some(i)) => Some(Action::Disable(i)),
            ("enable-only", Some(i)) => Some(Action::EnableOnly(i)),
            ("toggle-only", Some(i)) => Some(Action::ToggleOnly(i)),
            ("enable-all", _) => Some(Action::EnableAll),
            _ => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::Toggle(_) => "toggle",
            Action::Enable(_) => "enable",
            Action::Disable(_) => "disable",
            Action::EnableOnly(_) => "enable-only",
            Action::ToggleOnly(_) => "toggle-only",
            Action::EnableAll => "enable-all",
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            Action::Toggle(i)
            | Action::Enable(i)
            | Action::Disable(i)
            | Action::EnableOnly(i)
            | Action::ToggleOnly(i) => Some(*i),
            Action::EnableAll => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(f, "{} {}", self.verb(), target),
            None => write!(f, "{}", self.verb()),
        }
    }
}
