use crate::errors::XToggleError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("'{path}' does not exist or could not be read: {message}")]
    Unreadable { path: String, message: String },

    #[error("Failed to parse '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Monitor '{connector}' has no {field} tag in '{path}'")]
    MissingField {
        connector: String,
        field: &'static str,
        path: String,
    },

    #[error("The {field} tag for monitor '{connector}' in '{path}' is not a valid number: '{value}'")]
    InvalidValue {
        connector: String,
        field: &'static str,
        value: String,
        path: String,
    },

    #[error("No monitors found in '{path}' metamodes")]
    NoMetamodes { path: String },

    #[error("Missing monitor name in '{path}' metamodes: '{metamode}'")]
    MissingMetamodeName { path: String, metamode: String },

    #[error("'{path}' metamodes contains a disconnected monitor: '{name}'")]
    DisconnectedMetamode { path: String, name: String },

    #[error("'{path}' metamodes contains multiple entries for monitor '{name}'")]
    DuplicateMetamode { path: String, name: String },
}

impl XToggleError for LayoutError {
    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::Unreadable { .. } => "LAYOUT_UNREADABLE",
            LayoutError::ParseFailed { .. } => "LAYOUT_PARSE_FAILED",
            LayoutError::MissingField { .. } => "LAYOUT_MISSING_FIELD",
            LayoutError::InvalidValue { .. } => "LAYOUT_INVALID_VALUE",
            LayoutError::NoMetamodes { .. } => "NO_METAMODES",
            LayoutError::MissingMetamodeName { .. } => "METAMODE_MISSING_NAME",
            LayoutError::DisconnectedMetamode { .. } => "METAMODE_DISCONNECTED",
            LayoutError::DuplicateMetamode { .. } => "METAMODE_DUPLICATE",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, LayoutError::Unreadable { .. })
    }
}
