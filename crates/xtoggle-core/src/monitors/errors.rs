use crate::errors::XToggleError;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("No connected monitors found")]
    NoMonitors,

    #[error(
        "Could not find info for monitor '{name}': it is disabled and has no entry in the layout file"
    )]
    MissingInfo { name: String },

    #[error("Target must be a number between 1 and the number of monitors connected ({count}), got {index}")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("At least one enabled monitor is required")]
    NoEnabledMonitors,

    #[error("Layout error: {source}")]
    LayoutError {
        #[from]
        source: crate::layout::errors::LayoutError,
    },
}

impl XToggleError for MonitorError {
    fn error_code(&self) -> &'static str {
        match self {
            MonitorError::NoMonitors => "NO_MONITORS",
            MonitorError::MissingInfo { .. } => "MONITOR_MISSING_INFO",
            MonitorError::IndexOutOfRange { .. } => "MONITOR_INDEX_OUT_OF_RANGE",
            MonitorError::NoEnabledMonitors => "NO_ENABLED_MONITORS",
            MonitorError::LayoutError { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            MonitorError::LayoutError { source } => source.is_user_error(),
            _ => true,
        }
    }
}
