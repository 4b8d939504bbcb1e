use std::fmt;

use super::escape::shell_quote;

/// Active geometry of an enabled output, as `WxH+X+Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

/// A connected output as reported by `xrandr -q`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedOutput {
    pub name: String,
    pub primary: bool,
    /// Present only when the output is currently enabled.
    pub geometry: Option<Geometry>,
    /// Refresh rate of the current mode (the one marked `*`).
    pub current_rate: Option<f64>,
    /// `WxH` of the current mode. Differs from the geometry when rotated.
    pub current_mode: Option<(u32, u32)>,
}

impl ConnectedOutput {
    pub fn is_enabled(&self) -> bool {
        self.geometry.is_some()
    }
}

/// An external command that applies a monitor configuration.
///
/// Arguments are kept separate so the command can be spawned without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCommand {
    program: String,
    args: Vec<String>,
}

impl DisplayCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for DisplayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_output_enabled() {
        let output = ConnectedOutput {
            name: "DP-0".to_string(),
            primary: false,
            geometry: Some(Geometry {
                width: 1920,
                height: 1080,
                x: 0,
                y: 0,
            }),
            current_rate: Some(60.0),
            current_mode: Some((1920, 1080)),
        };
        assert!(output.is_enabled());

        let disabled = ConnectedOutput {
            geometry: None,
            current_rate: None,
            current_mode: None,
            ..output
        };
        assert!(!disabled.is_enabled());
    }

    #[test]
    fn test_display_command_builder() {
        let command = DisplayCommand::new("xrandr")
            .arg("--output")
            .arg("DP-0")
            .args(["--mode", "1920x1080"]);
        assert_eq!(command.program(), "xrandr");
        assert_eq!(command.get_args(), ["--output", "DP-0", "--mode", "1920x1080"]);
    }

    #[test]
    fn test_display_command_rendering_quotes_when_needed() {
        let command = DisplayCommand::new("nvidia-settings")
            .arg("--assign")
            .arg("CurrentMetaMode=DP-0: nvidia-auto-select +0+0");
        assert_eq!(
            command.to_string(),
            "nvidia-settings --assign 'CurrentMetaMode=DP-0: nvidia-auto-select +0+0'"
        );
    }
}
