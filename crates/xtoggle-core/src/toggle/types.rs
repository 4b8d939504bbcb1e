use std::path::PathBuf;

use crate::display::DisplayCommand;
use crate::monitors::{Action, MonitorSet};

/// Input for a single toggle run.
#[derive(Debug, Clone)]
pub struct ToggleRequest {
    /// `None` only reports the current monitors.
    pub action: Option<Action>,
    /// Build the command but do not execute it.
    pub dry_run: bool,
    /// Path to `monitors.xml`; `None` when no home directory is known.
    pub layout_file: Option<PathBuf>,
    /// Path to `xorg.conf`, read by backends that use metamodes.
    pub xorg_conf: PathBuf,
}

impl ToggleRequest {
    pub fn new(action: Option<Action>, layout_file: Option<PathBuf>, xorg_conf: PathBuf) -> Self {
        Self {
            action,
            dry_run: false,
            layout_file,
            xorg_conf,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a toggle run.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// Monitor state after the action, or as found when there was no action.
    pub monitors: MonitorSet,
    /// The command built for the backend, if an action was requested.
    pub command: Option<DisplayCommand>,
    /// Whether the command was executed.
    pub applied: bool,
    /// Non-fatal problems to show the user.
    pub warnings: Vec<String>,
}

impl ToggleOutcome {
    /// Whether a primary monitor was known before the action.
    pub fn primary_known(&self) -> bool {
        self.monitors.original_primary().is_some()
    }
}
