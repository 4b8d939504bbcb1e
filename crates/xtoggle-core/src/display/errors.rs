use crate::errors::XToggleError;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Xorg is not being used (session type: {session})")]
    NotX11Session { session: String },

    #[error("{program} is not installed or could not be run")]
    ToolNotFound { program: String },

    #[error("Failed to query connected outputs: {message}")]
    QueryFailed { message: String },

    #[error("Failed to run '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    #[error("The following command returned non-zero exit status:\n{command}{}", format_stderr(.stderr))]
    CommandFailed { command: String, stderr: String },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

impl XToggleError for DisplayError {
    fn error_code(&self) -> &'static str {
        match self {
            DisplayError::NotX11Session { .. } => "DISPLAY_NOT_X11",
            DisplayError::ToolNotFound { .. } => "DISPLAY_TOOL_NOT_FOUND",
            DisplayError::QueryFailed { .. } => "DISPLAY_QUERY_FAILED",
            DisplayError::SpawnFailed { .. } => "DISPLAY_SPAWN_FAILED",
            DisplayError::CommandFailed { .. } => "DISPLAY_COMMAND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            DisplayError::NotX11Session { .. } | DisplayError::ToolNotFound { .. }
        )
    }
}
