//! Building a [`MonitorSet`] from the live query and the saved layout.

use tracing::{debug, warn};

use crate::display::ConnectedOutput;
use crate::layout::{DisplayLayout, Metamodes};

use super::errors::MonitorError;
use super::types::{Monitor, MonitorSet};

/// Combine connected outputs with their saved layout.
///
/// Geometry and rate come from the layout entry when there is one, otherwise
/// from the active xrandr geometry. A disabled output without a layout entry
/// cannot be placed and is an error. The primary monitor is the one whose
/// winning layout entry is marked primary, falling back to xrandr's
/// `primary` keyword.
pub fn resolve_monitors(
    outputs: &[ConnectedOutput],
    layout: Option<&DisplayLayout>,
    metamodes: Option<&Metamodes>,
) -> Result<MonitorSet, MonitorError> {
    if outputs.is_empty() {
        return Err(MonitorError::NoMonitors);
    }

    let mut monitors = Vec::with_capacity(outputs.len());

    for output in outputs {
        let entry = match layout {
            Some(layout) => layout.entry(&output.name)?,
            None => None,
        };

        let monitor = match (entry, output.geometry) {
            (Some(entry), _) => Monitor {
                index: 0,
                name: output.name.clone(),
                x: entry.x,
                y: entry.y,
                width: entry.width,
                height: entry.height,
                mode: None,
                rate: Some(entry.rate),
                enabled: output.is_enabled(),
                metamodes: None,
            },
            (None, Some(geometry)) => {
                debug!(
                    event = "core.monitors.geometry_from_query",
                    name = %output.name
                );
                Monitor {
                    index: 0,
                    name: output.name.clone(),
                    x: geometry.x,
                    y: geometry.y,
                    width: geometry.width,
                    height: geometry.height,
                    mode: output.current_mode,
                    rate: output.current_rate,
                    enabled: true,
                    metamodes: None,
                }
            }
            (None, None) => {
                warn!(
                    event = "core.monitors.missing_info",
                    name = %output.name
                );
                return Err(MonitorError::MissingInfo {
                    name: output.name.clone(),
                });
            }
        };

        monitors.push(Monitor {
            metamodes: metamodes
                .and_then(|m| m.get(&output.name))
                .map(str::to_string),
            ..monitor
        });
    }

    let connected: Vec<&str> = outputs.iter().map(|o| o.name.as_str()).collect();
    let layout_primary = layout
        .and_then(|l| l.primary_connector(&connected))
        .map(str::to_string);
    let original_primary = layout_primary.or_else(|| {
        outputs
            .iter()
            .find(|o| o.primary)
            .map(|o| o.name.clone())
    });

    Ok(MonitorSet::new(monitors, original_primary))
}
