//! Terminal rendering of a network list: an aligned text grid or JSON.

use crate::network::NetworkRecord;
use serde::{Deserialize, Serialize};

/// How the binary prints scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

const HEADER: [&str; 8] = [
    "SHOW", "NAME", "BSSID", "SECURITY", "MODE", "CH", "SIGNAL", "COLOR",
];

fn row(net: &NetworkRecord) -> [String; 8] {
    [
        if net.visible { "yes" } else { "no" }.to_string(),
        net.name.clone(),
        net.bssid.clone(),
        net.security.clone(),
        net.mode.clone(),
        net.channel.to_string(),
        format!("{}%", net.signal),
        net.color.clone(),
    ]
}

/// Render `networks` as a table, one line per network, columns padded to
/// their widest cell.
pub fn render_table(networks: &[NetworkRecord]) -> String {
    let rows: Vec<[String; 8]> = networks.iter().map(row).collect();

    let mut widths = HEADER.map(str::len);
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADER.map(str::to_string);
    for cells in std::iter::once(&header).chain(&rows) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Render `networks` as a pretty-printed JSON array.
pub fn render_json(networks: &[NetworkRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(networks)
}

/// Render in the given format.
pub fn render(networks: &[NetworkRecord], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(networks)),
        OutputFormat::Json => render_json(networks),
    }
}
