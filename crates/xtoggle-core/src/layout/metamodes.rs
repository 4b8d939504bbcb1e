//! Reader for the NVIDIA `metamodes` option in `xorg.conf`.
//!
//! ```text
//! Option "metamodes" "DP-0: 1920x1080_144 +0+0, HDMI-0: nvidia-auto-select +1920+0 {ForceCompositionPipeline=On}"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use super::errors::LayoutError;

static METAMODES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Option\s+"metamodes"\s*"(.+?)""#).expect("metamodes pattern is valid")
});

/// Per-output metamode strings, in the order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metamodes {
    entries: Vec<(String, String)>,
}

impl Metamodes {
    /// Parse xorg.conf contents, validating names against the connected outputs.
    pub fn parse(content: &str, path: &str, connected: &[&str]) -> Result<Self, LayoutError> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for line in content.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            let Some(caps) = METAMODES_RE.captures(line) else {
                continue;
            };

            for metamode in split_metamodes(&caps[1]) {
                let metamode = metamode.trim();
                let name = match metamode.split_once(':') {
                    Some((name, _)) if !name.trim().is_empty() => name.trim(),
                    _ => {
                        return Err(LayoutError::MissingMetamodeName {
                            path: path.to_string(),
                            metamode: metamode.to_string(),
                        });
                    }
                };

                if !connected.contains(&name) {
                    return Err(LayoutError::DisconnectedMetamode {
                        path: path.to_string(),
                        name: name.to_string(),
                    });
                }
                if !seen.insert(name.to_string()) {
                    return Err(LayoutError::DuplicateMetamode {
                        path: path.to_string(),
                        name: name.to_string(),
                    });
                }

                entries.push((name.to_string(), metamode.to_string()));
            }
        }

        if entries.is_empty() {
            return Err(LayoutError::NoMetamodes {
                path: path.to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Read and parse the metamodes of an xorg.conf file.
    pub fn load(path: &Path, connected: &[&str]) -> Result<Self, LayoutError> {
        let display_path = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| LayoutError::Unreadable {
            path: display_path.clone(),
            message: e.to_string(),
        })?;

        let metamodes = Self::parse(&content, &display_path, connected)?;
        info!(
            event = "core.layout.metamodes_loaded",
            path = %display_path,
            entry_count = metamodes.entries.len()
        );
        Ok(metamodes)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, metamode)| metamode.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a metamodes value on commas that are not inside `{...}` option blocks.
fn split_metamodes(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);

    parts.into_iter().filter(|p| !p.trim().is_empty()).collect()
}
