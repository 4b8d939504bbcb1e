//! Access to the running X display through external tools.

use std::process::Command;

use tracing::{debug, error, info};

use super::errors::DisplayError;
use super::types::{ConnectedOutput, DisplayCommand};
use super::xrandr::parse_query_output;

/// The system boundary the toggle handler talks to.
///
/// The real implementation shells out to `xrandr` and the selected backend
/// program; tests substitute a recording implementation.
pub trait DisplayServer {
    /// Fail with `DisplayError::NotX11Session` when the desktop session is not Xorg.
    fn ensure_x11_session(&self) -> Result<(), DisplayError>;

    /// Fail with `DisplayError::ToolNotFound` unless `program` can be run.
    fn ensure_available(&self, program: &str) -> Result<(), DisplayError>;

    /// Query the currently connected outputs.
    fn query_outputs(&self) -> Result<Vec<ConnectedOutput>, DisplayError>;

    /// Run a command that applies a monitor configuration.
    fn execute(&self, command: &DisplayCommand) -> Result<(), DisplayError>;
}

const X11_SESSION: &str = "x11";

/// Accept an unset session type; reject any other value than `x11`.
fn check_session_type(session: Option<&str>) -> Result<(), DisplayError> {
    match session {
        Some(session) if session != X11_SESSION => {
            Err(DisplayError::NotX11Session {
                session: session.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// [`DisplayServer`] backed by the local X session.
#[derive(Debug, Default, Clone, Copy)]
pub struct X11DisplayServer;

impl DisplayServer for X11DisplayServer {
    fn ensure_x11_session(&self) -> Result<(), DisplayError> {
        let session = std::env::var("XDG_SESSION_TYPE").ok();
        debug!(event = "core.display.session_checked", session = ?session);
        check_session_type(session.as_deref()).inspect_err(|e| {
            error!(event = "core.display.session_rejected", error = %e);
        })
    }

    fn ensure_available(&self, program: &str) -> Result<(), DisplayError> {
        match which::which(program) {
            Ok(path) => {
                debug!(
                    event = "core.display.tool_found",
                    program = program,
                    path = %path.display()
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    event = "core.display.tool_not_found",
                    program = program,
                    error = %e
                );
                Err(DisplayError::ToolNotFound {
                    program: program.to_string(),
                })
            }
        }
    }

    fn query_outputs(&self) -> Result<Vec<ConnectedOutput>, DisplayError> {
        info!(event = "core.display.query_started");

        let output = Command::new("xrandr")
            .arg("-q")
            .output()
            .map_err(|e| DisplayError::QueryFailed {
                message: format!("Failed to execute xrandr: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(
                event = "core.display.query_failed",
                stderr = %stderr.trim()
            );
            return Err(DisplayError::QueryFailed {
                message: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let outputs = parse_query_output(&stdout);

        info!(
            event = "core.display.query_completed",
            connected_count = outputs.len()
        );

        Ok(outputs)
    }

    fn execute(&self, command: &DisplayCommand) -> Result<(), DisplayError> {
        let rendered = command.to_string();
        info!(event = "core.display.execute_started", command = %rendered);

        let output = Command::new(command.program())
            .args(command.get_args())
            .output()
            .map_err(|e| DisplayError::SpawnFailed {
                command: rendered.clone(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            info!(event = "core.display.execute_completed", command = %rendered);
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(
                event = "core.display.execute_failed",
                command = %rendered,
                exit_code = ?output.status.code(),
                stderr = %stderr
            );
            Err(DisplayError::CommandFailed {
                command: rendered,
                stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_check() {
        assert!(check_session_type(Some("x11")).is_ok());
        assert!(check_session_type(None).is_ok());
        assert!(matches!(
            check_session_type(Some("wayland")),
            Err(DisplayError::NotX11Session { ref session }) if session == "wayland"
        ));
        assert!(check_session_type(Some("tty")).is_err());
    }

    #[test]
    fn test_missing_tool_is_reported() {
        let server = X11DisplayServer;
        let result = server.ensure_available("xtoggle-definitely-not-a-real-program");
        assert!(matches!(
            result.unwrap_err(),
            DisplayError::ToolNotFound { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_non_zero_exit() {
        let server = X11DisplayServer;
        let command = DisplayCommand::new("sh").args(["-c", "echo boom >&2; exit 3"]);

        match server.execute(&command) {
            Err(DisplayError::CommandFailed { stderr, .. }) => assert_eq!(stderr, "boom"),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_success() {
        let server = X11DisplayServer;
        let command = DisplayCommand::new("true");
        assert!(server.execute(&command).is_ok());
    }

    #[test]
    fn test_execute_spawn_failure() {
        let server = X11DisplayServer;
        let command = DisplayCommand::new("xtoggle-definitely-not-a-real-program");
        assert!(matches!(
            server.execute(&command).unwrap_err(),
            DisplayError::SpawnFailed { .. }
        ));
    }
}
