use crate::errors::XToggleError;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("At least one enabled monitor is required")]
    NoEnabledMonitors,

    #[error("Monitor '{name}' has no metamodes entry; nvidia-settings needs one for every enabled monitor")]
    MissingMetamodes { name: String },
}

impl XToggleError for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            BackendError::NoEnabledMonitors => "NO_ENABLED_MONITORS",
            BackendError::MissingMetamodes { .. } => "MISSING_METAMODES",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
