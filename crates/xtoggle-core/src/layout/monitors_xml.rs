//! Reader for the desktop's `monitors.xml` display layout.
//!
//! Every `<logicalmonitor>` of every `<configuration>` is considered; when a
//! connector appears more than once the last entry wins. Fields are only
//! validated when a connected output asks for its entry, so stale entries for
//! unplugged monitors never cause errors. The primary monitor is taken from
//! the winning entries only, so a stale `<primary>` is ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::errors::LayoutError;

#[derive(Debug, Default, Deserialize)]
struct MonitorsFile {
    #[serde(rename = "configuration", default)]
    configurations: Vec<ConfigurationTag>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigurationTag {
    #[serde(rename = "logicalmonitor", default)]
    logical_monitors: Vec<LogicalMonitorTag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LogicalMonitorTag {
    x: Option<String>,
    y: Option<String>,
    primary: Option<String>,
    #[serde(default)]
    monitor: Vec<MonitorTag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MonitorTag {
    monitorspec: Option<MonitorSpecTag>,
    mode: Option<ModeTag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MonitorSpecTag {
    connector: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ModeTag {
    width: Option<String>,
    height: Option<String>,
    rate: Option<String>,
}

/// Validated layout of one connector.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    pub connector: String,
    pub width: u32,
    pub height: u32,
    pub rate: f64,
    pub x: i32,
    pub y: i32,
    pub primary: bool,
}

/// The winning `<logicalmonitor>` of one connector.
#[derive(Debug, Clone)]
struct Slot {
    connector: String,
    /// Position of the logical monitor in file order.
    order: usize,
    logical: LogicalMonitorTag,
}

impl Slot {
    fn is_primary(&self) -> bool {
        self.logical
            .primary
            .as_deref()
            .is_some_and(|p| p.trim() == "yes")
    }
}

/// Parsed `monitors.xml`.
#[derive(Debug, Clone)]
pub struct DisplayLayout {
    path: String,
    entries: Vec<Slot>,
}

impl DisplayLayout {
    /// Parse layout file contents. `path` is used in error messages.
    pub fn parse(content: &str, path: &str) -> Result<Self, LayoutError> {
        let file: MonitorsFile =
            quick_xml::de::from_str(content).map_err(|e| LayoutError::ParseFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let mut entries: Vec<Slot> = Vec::new();
        for (order, logical) in file
            .configurations
            .into_iter()
            .flat_map(|c| c.logical_monitors)
            .enumerate()
        {
            let Some(connector) = logical
                .monitor
                .first()
                .and_then(|m| m.monitorspec.as_ref())
                .and_then(|spec| spec.connector.as_deref())
                .map(|c| c.trim().to_string())
            else {
                debug!(event = "core.layout.logical_monitor_without_connector", path = path);
                continue;
            };

            let slot = Slot {
                connector,
                order,
                logical,
            };
            match entries.iter_mut().find(|e| e.connector == slot.connector) {
                Some(existing) => *existing = slot,
                None => entries.push(slot),
            }
        }

        Ok(Self {
            path: path.to_string(),
            entries,
        })
    }

    /// Read and parse a layout file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, LayoutError> {
        let display_path = path.display().to_string();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(event = "core.layout.file_missing", path = %display_path);
                return Ok(None);
            }
            Err(e) => {
                return Err(LayoutError::Unreadable {
                    path: display_path,
                    message: e.to_string(),
                });
            }
        };

        let layout = Self::parse(&content, &display_path)?;
        info!(
            event = "core.layout.loaded",
            path = %display_path,
            entry_count = layout.entries.len()
        );
        Ok(Some(layout))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn connectors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.connector.as_str())
    }

    /// The connector among `connected` whose winning entry is marked primary.
    ///
    /// When several are, the one written last in the file is chosen.
    pub fn primary_connector(&self, connected: &[&str]) -> Option<&str> {
        self.entries
            .iter()
            .filter(|e| connected.contains(&e.connector.as_str()) && e.is_primary())
            .max_by_key(|e| e.order)
            .map(|e| e.connector.as_str())
    }

    /// Validated entry for `connector`, or None if the layout does not mention it.
    pub fn entry(&self, connector: &str) -> Result<Option<LayoutEntry>, LayoutError> {
        let Some(slot) = self.entries.iter().find(|e| e.connector == connector) else {
            return Ok(None);
        };
        let logical = &slot.logical;

        let mode = logical.monitor.first().and_then(|m| m.mode.as_ref());
        let width = self.number(connector, "width", mode.and_then(|m| m.width.as_deref()))?;
        let height = self.number(connector, "height", mode.and_then(|m| m.height.as_deref()))?;
        let rate = self.number(connector, "rate", mode.and_then(|m| m.rate.as_deref()))?;
        let x = self.number(connector, "x", logical.x.as_deref())?;
        let y = self.number(connector, "y", logical.y.as_deref())?;
        let primary = slot.is_primary();

        Ok(Some(LayoutEntry {
            connector: connector.to_string(),
            width,
            height,
            rate,
            x,
            y,
            primary,
        }))
    }

    fn number<T: std::str::FromStr>(
        &self,
        connector: &str,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<T, LayoutError> {
        let value = value.ok_or_else(|| LayoutError::MissingField {
            connector: connector.to_string(),
            field,
            path: self.path.clone(),
        })?;
        value.trim().parse().map_err(|_| LayoutError::InvalidValue {
            connector: connector.to_string(),
            field,
            value: value.to_string(),
            path: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/home/me/.config/monitors.xml";

    const TWO_MONITORS: &str = r#"<monitors version="2">
  <configuration>
    <logicalmonitor>
      <x>0</x>
      <y>0</y>
      <scale>1</scale>
      <primary>yes</primary>
      <monitor>
        <monitorspec>
          <connector>DP-0</connector>
          <vendor>DEL</vendor>
          <product>DELL U2415</product>
          <serial>ABC123</serial>
        </monitorspec>
        <mode>
          <width>1920</width>
          <height>1200</height>
          <rate>59.950172424316406</rate>
        </mode>
      </monitor>
    </logicalmonitor>
    <logicalmonitor>
      <x>1920</x>
      <y>0</y>
      <scale>1</scale>
      <monitor>
        <monitorspec>
          <connector>HDMI-0</connector>
          <vendor>GSM</vendor>
          <product>LG</product>
          <serial>0x0001</serial>
        </monitorspec>
        <mode>
          <width>2560</width>
          <height>1440</height>
          <rate>143.99</rate>
        </mode>
      </monitor>
    </logicalmonitor>
  </configuration>
</monitors>
"#;

    #[test]
    fn test_parse_entries() {
        let layout = DisplayLayout::parse(TWO_MONITORS, PATH).unwrap();
        let connectors: Vec<&str> = layout.connectors().collect();
        assert_eq!(connectors, ["DP-0", "HDMI-0"]);

        let dp = layout.entry("DP-0").unwrap().unwrap();
        assert_eq!(dp.width, 1920);
        assert_eq!(dp.height, 1200);
        assert!((dp.rate - 59.950172424316406).abs() < f64::EPSILON);
        assert_eq!((dp.x, dp.y), (0, 0));
        assert!(dp.primary);

        let hdmi = layout.entry("HDMI-0").unwrap().unwrap();
        assert_eq!(hdmi.x, 1920);
        assert!(!hdmi.primary);
    }

    #[test]
    fn test_unknown_connector_is_none() {
        let layout = DisplayLayout::parse(TWO_MONITORS, PATH).unwrap();
        assert!(layout.entry("DVI-D-0").unwrap().is_none());
    }

    #[test]
    fn test_later_configuration_wins() {
        let content = r#"<monitors version="2">
  <configuration>
    <logicalmonitor>
      <x>0</x><y>0</y>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
  <configuration>
    <logicalmonitor>
      <x>2560</x><y>0</y>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
</monitors>"#;
        let layout = DisplayLayout::parse(content, PATH).unwrap();
        assert_eq!(layout.connectors().count(), 1);
        assert_eq!(layout.entry("DP-0").unwrap().unwrap().x, 2560);
    }

    #[test]
    fn test_primary_follows_winning_entries() {
        let content = r#"<monitors version="2">
  <configuration>
    <logicalmonitor>
      <x>0</x><y>0</y><primary>yes</primary>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
  <configuration>
    <logicalmonitor>
      <x>0</x><y>0</y><primary>yes</primary>
      <monitor>
        <monitorspec><connector>DP-2</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
  <configuration>
    <logicalmonitor>
      <x>1920</x><y>0</y>
      <monitor>
        <monitorspec><connector>HDMI-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
</monitors>"#;
        let layout = DisplayLayout::parse(content, PATH).unwrap();
        assert_eq!(
            layout.primary_connector(&["DP-0", "HDMI-0", "DP-2"]),
            Some("DP-2")
        );
        assert_eq!(layout.primary_connector(&["DP-0", "HDMI-0"]), Some("DP-0"));
        assert_eq!(layout.primary_connector(&["HDMI-0"]), None);
    }

    #[test]
    fn test_stale_primary_is_overridden() {
        let content = r#"<monitors version="2">
  <configuration>
    <logicalmonitor>
      <x>0</x><y>0</y><primary>yes</primary>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
  <configuration>
    <logicalmonitor>
      <x>1920</x><y>0</y>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor>
  </configuration>
</monitors>"#;
        let layout = DisplayLayout::parse(content, PATH).unwrap();
        assert!(!layout.entry("DP-0").unwrap().unwrap().primary);
        assert_eq!(layout.primary_connector(&["DP-0"]), None);
    }

    #[test]
    fn test_missing_rate_is_reported() {
        let content = r#"<monitors version="2"><configuration><logicalmonitor>
      <x>0</x><y>0</y>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height></mode>
      </monitor>
    </logicalmonitor></configuration></monitors>"#;
        let layout = DisplayLayout::parse(content, PATH).unwrap();
        let err = layout.entry("DP-0").unwrap_err();
        assert!(matches!(err, LayoutError::MissingField { field: "rate", .. }));
    }

    #[test]
    fn test_non_numeric_position_is_reported() {
        let content = r#"<monitors version="2"><configuration><logicalmonitor>
      <x>left</x><y>0</y>
      <monitor>
        <monitorspec><connector>DP-0</connector></monitorspec>
        <mode><width>1920</width><height>1080</height><rate>60</rate></mode>
      </monitor>
    </logicalmonitor></configuration></monitors>"#;
        let layout = DisplayLayout::parse(content, PATH).unwrap();
        let err = layout.entry("DP-0").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidValue { field: "x", .. }));
        assert!(err.to_string().contains("'left'"));
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let result = DisplayLayout::parse("<monitors><configuration>", PATH);
        assert!(matches!(
            result.unwrap_err(),
            LayoutError::ParseFailed { .. }
        ));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = DisplayLayout::load(&temp_dir.path().join("monitors.xml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("monitors.xml");
        fs::write(&path, TWO_MONITORS).unwrap();

        let layout = DisplayLayout::load(&path).unwrap().unwrap();
        assert_eq!(layout.path(), path.display().to_string());
        assert_eq!(layout.connectors().count(), 2);
    }
}
