use crate::backend::BackendError;
use crate::display::errors::DisplayError;
use crate::errors::XToggleError;
use crate::layout::LayoutError;
use crate::monitors::MonitorError;

/// Everything that can stop a toggle run.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error(transparent)]
    Display {
        #[from]
        source: DisplayError,
    },

    #[error(transparent)]
    Layout {
        #[from]
        source: LayoutError,
    },

    #[error(transparent)]
    Monitor {
        #[from]
        source: MonitorError,
    },

    #[error(transparent)]
    Backend {
        #[from]
        source: BackendError,
    },
}

impl XToggleError for ToggleError {
    fn error_code(&self) -> &'static str {
        match self {
            ToggleError::Display { source } => source.error_code(),
            ToggleError::Layout { source } => source.error_code(),
            ToggleError::Monitor { source } => source.error_code(),
            ToggleError::Backend { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ToggleError::Display { source } => source.is_user_error(),
            ToggleError::Layout { source } => source.is_user_error(),
            ToggleError::Monitor { source } => source.is_user_error(),
            ToggleError::Backend { source } => source.is_user_error(),
        }
    }
}
