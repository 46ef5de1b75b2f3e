//! The network record produced by a scan and the colour palette used to
//! tell networks apart in the grid and on the graph.

use serde::{Deserialize, Serialize};

/// Colours assigned to networks in discovery order (ARGB hex).
///
/// The k-th network found by a scan gets `PALETTE[k % PALETTE.len()]`.
pub const PALETTE: [&str; 12] = [
    "#FF3EF359",
    "#FFFF80AA",
    "#FFC6F33E",
    "#FF8A80FF",
    "#FFFFBF80",
    "#FF80FFF6",
    "#FF808080",
    "#FFDC73FF",
    "#FFCC546E",
    "#FFA0CC54",
    "#FFCC54CC",
    "#FFFF0000",
];

/// Colour for the network discovered at position `index` (0-based).
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Size of the canvas the presentation layer draws the graph on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

/// One wireless network as reported by a single scan.
///
/// Records are rebuilt from scratch on every scan; only `visible` is ever
/// changed afterwards, and only by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkRecord {
    /// Whether the network is drawn on the graph.
    pub visible: bool,
    /// Authentication scheme (`WPA2-Personal`, `Open`, ...), or `WEP`.
    pub security: String,
    /// Access point MAC address, verbatim.
    pub bssid: String,
    /// Radio type (`802.11n`, `802.11ax`, ...), verbatim.
    pub mode: String,
    /// SSID.
    pub name: String,
    /// Channel number of the first BSSID.
    pub channel: u32,
    /// Signal quality in percent.
    pub signal: u8,
    /// Palette colour assigned by discovery order.
    pub color: String,
    /// Canvas width at the time of the scan.
    pub canvas_width: f64,
    /// Canvas height at the time of the scan.
    pub canvas_height: f64,
}
