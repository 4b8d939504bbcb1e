//! Parsing of `xrandr -q` output.
//!
//! Only connected outputs are reported. An output is enabled when its
//! `connected` line carries a `WxH+X+Y` geometry; the indented mode lines
//! that follow it mark the current mode's rate with `*`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{ConnectedOutput, Geometry};

static CONNECTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>\S+) connected(?P<primary> primary)?(?: (?P<w>\d+)x(?P<h>\d+)\+(?P<x>-?\d+)\+(?P<y>-?\d+))?",
    )
    .expect("connected-output pattern is valid")
});

static MODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(?P<w>\d+)x(?P<h>\d+)\S*\s+(?P<rates>.+)$").expect("mode-line pattern is valid")
});

/// Parse the output of `xrandr -q` into the list of connected outputs, in
/// the order xrandr reports them.
pub fn parse_query_output(stdout: &str) -> Vec<ConnectedOutput> {
    let mut outputs: Vec<ConnectedOutput> = Vec::new();
    // Whether mode lines currently belong to an enabled output we are tracking
    let mut in_enabled_block = false;

    for line in stdout.lines() {
        if !line.starts_with(char::is_whitespace) {
            in_enabled_block = false;

            let Some(caps) = CONNECTED_RE.captures(line) else {
                continue;
            };

            let geometry = match (caps.name("w"), caps.name("h"), caps.name("x"), caps.name("y")) {
                (Some(w), Some(h), Some(x), Some(y)) => {
                    match (
                        w.as_str().parse(),
                        h.as_str().parse(),
                        x.as_str().parse(),
                        y.as_str().parse(),
                    ) {
                        (Ok(width), Ok(height), Ok(x), Ok(y)) => Some(Geometry {
                            width,
                            height,
                            x,
                            y,
                        }),
                        _ => None,
                    }
                }
                _ => None,
            };

            in_enabled_block = geometry.is_some();
            outputs.push(ConnectedOutput {
                name: caps["name"].to_string(),
                primary: caps.name("primary").is_some(),
                geometry,
                current_rate: None,
                current_mode: None,
            });
            continue;
        }

        if !in_enabled_block {
            continue;
        }

        if let Some(caps) = MODE_RE.captures(line)
            && let Some(rate) = current_rate(&caps["rates"])
            && let Some(output) = outputs.last_mut()
            && output.current_rate.is_none()
        {
            output.current_rate = Some(rate);
            output.current_mode = match (caps["w"].parse(), caps["h"].parse()) {
                (Ok(width), Ok(height)) => Some((width, height)),
                _ => None,
            };
        }
    }

    debug!(
        event = "core.display.query_parsed",
        connected_count = outputs.len(),
        enabled_count = outputs.iter().filter(|o| o.is_enabled()).count()
    );

    outputs
}

/// Extract the rate marked `*` from the rate column of a mode line.
fn current_rate(rates: &str) -> Option<f64> {
    rates
        .split_whitespace()
        .find(|token| token.contains('*'))
        .and_then(|token| token.trim_end_matches(['*', '+']).parse().ok())
}
