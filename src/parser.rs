//! Parser for the text printed by `netsh wlan show networks mode=bssid`.
//!
//! The output is a sequence of blocks, one per SSID, each with a fixed
//! layout:
//!
//! ```text
//! SSID 1 : HomeNet
//!     Network type            : Infrastructure
//!     Authentication          : WPA2-Personal
//!     Encryption              : CCMP
//!     BSSID 1                 : aa:bb:cc:dd:ee:ff
//!          Signal             : 85%
//!          Radio type         : 802.11n
//!          Channel            : 6
//!          Basic rates (Mbps) : 1 2 5.5 11
//!          Other rates (Mbps) : 6 9 12 18 24 36 48 54
//!
//! ```
//!
//! Fields are located by their line offset from the `SSID` line, not by
//! their labels, so only the English layout with a single BSSID per SSID
//! block is read correctly.  Additional BSSIDs of the same SSID fall inside
//! the skipped stride and are ignored.

use crate::network::{palette_color, NetworkRecord, Viewport};
use log::debug;

/// Prefix of the first line of every network block.
const MARKER: &str = "SSID";

/// Lines after the marker that belong to one block.  Scanning resumes on
/// the line after them.
const ENTRY_STRIDE: usize = 10;

const NAME: usize = 0;
const AUTHENTICATION: usize = 2;
const ENCRYPTION: usize = 3;
const BSSID: usize = 4;
const SIGNAL: usize = 5;
const RADIO_TYPE: usize = 6;
const CHANNEL: usize = 7;

/// Errors produced while parsing scan output.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The block starting at `line` ends before field `offset`.
    #[error("network block at line {line} is truncated: no line at offset +{offset}")]
    MissingLine { line: usize, offset: usize },

    /// A field line has no `label : value` separator.
    #[error("line {line} has no ':' separator")]
    MissingSeparator { line: usize },

    /// A numeric field could not be parsed.
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parse raw netsh output into network records, in order of appearance.
///
/// The `k`-th network gets `palette_color(k)` and every record carries
/// `viewport` as its canvas size.  Any malformed block aborts the whole
/// parse.
pub fn parse_netsh_output(
    output: &str,
    viewport: Viewport,
) -> Result<Vec<NetworkRecord>, ParseError> {
    let lines: Vec<&str> = output.lines().collect();
    let mut networks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with(MARKER) {
            i += 1;
            continue;
        }

        let block = Block { lines: &lines, marker: i };
        let record = block.to_record(networks.len(), viewport)?;
        debug!(
            "found {:?} ({}) on channel {} at {}%",
            record.name, record.bssid, record.channel, record.signal
        );
        networks.push(record);

        i += ENTRY_STRIDE + 1;
    }

    debug!("parsed {} network(s)", networks.len());
    Ok(networks)
}

/// One network block, addressed relative to its marker line.
struct Block<'a> {
    lines: &'a [&'a str],
    marker: usize,
}

impl<'a> Block<'a> {
    /// Trimmed value of the `label : value` line at `offset`.
    fn field(&self, offset: usize) -> Result<&'a str, ParseError> {
        let index = self.marker + offset;
        let line = self.lines.get(index).ok_or(ParseError::MissingLine {
            line: self.marker + 1,
            offset,
        })?;
        let (_, value) = line
            .split_once(':')
            .ok_or(ParseError::MissingSeparator { line: index + 1 })?;
        Ok(value.trim())
    }

    fn to_record(&self, index: usize, viewport: Viewport) -> Result<NetworkRecord, ParseError> {
        let name = self.field(NAME)?;
        let authentication = self.field(AUTHENTICATION)?;
        let encryption = self.field(ENCRYPTION)?;
        let bssid = self.field(BSSID)?;
        let signal = parse_signal(self.field(SIGNAL)?)?;
        let mode = self.field(RADIO_TYPE)?;
        let channel = parse_channel(self.field(CHANNEL)?)?;

        // WEP networks report their authentication as "Open".
        let security = if encryption == "WEP" { "WEP" } else { authentication };

        Ok(NetworkRecord {
            visible: true,
            security: security.to_string(),
            bssid: bssid.to_string(),
            mode: mode.to_string(),
            name: name.to_string(),
            channel,
            signal,
            color: palette_color(index).to_string(),
            canvas_width: viewport.width,
            canvas_height: viewport.height,
        })
    }
}

/// `"85%"` → `85`.
fn parse_signal(value: &str) -> Result<u8, ParseError> {
    value
        .strip_suffix('%')
        .unwrap_or(value)
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            field: "signal",
            value: value.to_string(),
        })
}

fn parse_channel(value: &str) -> Result<u32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field: "channel",
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::PALETTE;

    struct Sample<'a> {
        name: &'a str,
        authentication: &'a str,
        encryption: &'a str,
        bssid: &'a str,
        signal: &'a str,
        radio: &'a str,
        channel: &'a str,
    }

    impl Default for Sample<'_> {
        fn default() -> Self {
            Self {
                name: "HomeNet",
                authentication: "WPA2-Personal",
                encryption: "CCMP",
                bssid: "AA:BB:CC:DD:EE:FF",
                signal: "85%",
                radio: "802.11n",
                channel: "6",
            }
        }
    }

    /// Render one SSID block the way netsh prints it (CRLF line endings).
    fn block(n: usize, s: &Sample) -> String {
        [
            format!("SSID {} : {}", n, s.name),
            "    Network type            : Infrastructure".to_string(),
            format!("    Authentication          : {}", s.authentication),
            format!("    Encryption              : {}", s.encryption),
            format!("    BSSID 1                 : {}", s.bssid),
            format!("         Signal             : {}", s.signal),
            format!("         Radio type         : {}", s.radio),
            format!("         Channel            : {}", s.channel),
            "         Basic rates (Mbps) : 1 2 5.5 11".to_string(),
            "         Other rates (Mbps) : 6 9 12 18 24 36 48 54".to_string(),
            String::new(),
        ]
        .iter()
        .map(|l| format!("{}\r\n", l))
        .collect()
    }

    fn output(samples: &[Sample]) -> String {
        let mut out = format!(
            "\r\nInterface name : Wi-Fi\r\nThere are {} networks currently visible.\r\n\r\n",
            samples.len()
        );
        for (i, s) in samples.iter().enumerate() {
            out.push_str(&block(i + 1, s));
        }
        out
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 640.0,
            height: 320.0,
        }
    }

    #[test]
    fn parses_single_network() {
        let text = output(&[Sample::default()]);
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(
            nets,
            vec![NetworkRecord {
                visible: true,
                security: "WPA2-Personal".into(),
                bssid: "AA:BB:CC:DD:EE:FF".into(),
                mode: "802.11n".into(),
                name: "HomeNet".into(),
                channel: 6,
                signal: 85,
                color: PALETTE[0].into(),
                canvas_width: 640.0,
                canvas_height: 320.0,
            }]
        );
    }

    #[test]
    fn keeps_discovery_order() {
        let names = ["alpha", "bravo", "charlie"];
        let samples: Vec<Sample> = names
            .iter()
            .map(|name| Sample {
                name: *name,
                ..Default::default()
            })
            .collect();
        let nets = parse_netsh_output(&output(&samples), viewport()).unwrap();
        let got: Vec<&str> = nets.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn colors_cycle_past_palette_length() {
        let samples: Vec<Sample> = (0..PALETTE.len() + 2).map(|_| Sample::default()).collect();
        let nets = parse_netsh_output(&output(&samples), viewport()).unwrap();
        assert_eq!(nets.len(), PALETTE.len() + 2);
        for (k, net) in nets.iter().enumerate() {
            assert_eq!(net.color, PALETTE[k % PALETTE.len()]);
        }
        assert_eq!(nets[12].color, PALETTE[0]);
        assert_eq!(nets[13].color, PALETTE[1]);
    }

    #[test]
    fn wep_encryption_overrides_security() {
        let text = output(&[Sample {
            authentication: "Open",
            encryption: "WEP",
            ..Default::default()
        }]);
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(nets[0].security, "WEP");
    }

    #[test]
    fn other_encryption_keeps_authentication() {
        let text = output(&[Sample {
            authentication: "Open",
            encryption: "None",
            ..Default::default()
        }]);
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(nets[0].security, "Open");
    }

    #[test]
    fn numeric_fields() {
        let text = output(&[Sample {
            signal: "73%",
            channel: "11",
            ..Default::default()
        }]);
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(nets[0].signal, 73);
        assert_eq!(nets[0].channel, 11);
    }

    #[test]
    fn accepts_lf_line_endings() {
        let text = output(&[Sample::default(), Sample::default()]).replace("\r\n", "\n");
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(nets.len(), 2);
        assert_eq!(nets[1].bssid, "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn hidden_network_has_empty_name() {
        let text = output(&[Sample {
            name: "",
            ..Default::default()
        }]);
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(nets[0].name, "");
    }

    #[test]
    fn name_may_contain_colons() {
        let text = output(&[Sample {
            name: "cafe: guest",
            ..Default::default()
        }]);
        let nets = parse_netsh_output(&text, viewport()).unwrap();
        assert_eq!(nets[0].name, "cafe: guest");
    }

    #[test]
    fn no_networks_yields_empty_list() {
        let text = "\r\nInterface name : Wi-Fi\r\nThere are 0 networks currently visible.\r\n";
        assert!(parse_netsh_output(text, viewport()).unwrap().is_empty());
        assert!(parse_netsh_output("", viewport()).unwrap().is_empty());
    }

    #[test]
    fn truncated_block_fails() {
        let full = block(1, &Sample::default());
        let truncated: String = full.split_inclusive("\r\n").take(5).collect();
        let err = parse_netsh_output(&truncated, viewport()).unwrap_err();
        assert_eq!(err, ParseError::MissingLine { line: 1, offset: SIGNAL });
    }

    #[test]
    fn truncated_last_block_discards_earlier_records() {
        let mut text = output(&[Sample::default()]);
        text.push_str("SSID 2 : cut\r\n");
        let err = parse_netsh_output(&text, viewport()).unwrap_err();
        assert!(matches!(err, ParseError::MissingLine { offset: AUTHENTICATION, .. }));
    }

    #[test]
    fn bad_signal_fails() {
        let text = output(&[Sample {
            signal: "strong",
            ..Default::default()
        }]);
        let err = parse_netsh_output(&text, viewport()).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                field: "signal",
                value: "strong".into()
            }
        );
    }

    #[test]
    fn bad_channel_fails() {
        let text = output(&[Sample {
            channel: "six",
            ..Default::default()
        }]);
        let err = parse_netsh_output(&text, viewport()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { field: "channel", .. }));
    }

    #[test]
    fn field_without_separator_fails() {
        let text = output(&[Sample::default()]).replace("Encryption              :", "Encryption");
        let err = parse_netsh_output(&text, viewport()).unwrap_err();
        // Four header lines precede the block; encryption is at offset +3.
        assert_eq!(err, ParseError::MissingSeparator { line: 8 });
    }

    #[test]
    fn marker_inside_stride_is_skipped() {
        // Offsets +8..=+10 still belong to the first block.
        for offset in 8..=10 {
            let mut lines: Vec<String> = block(1, &Sample::default())
                .lines()
                .map(str::to_string)
                .collect();
            lines[offset] = "SSID 2 : inside".to_string();
            let text = lines.join("\r\n");
            let nets = parse_netsh_output(&text, viewport()).unwrap();
            assert_eq!(nets.len(), 1, "marker at +{}", offset);
            assert_eq!(nets[0].name, "HomeNet");
        }
    }

    #[test]
    fn next_marker_right_after_stride_is_found() {
        let first = Sample::default();
        let second = Sample {
            name: "Neighbour",
            ..Default::default()
        };
        let text = format!("{}{}", block(1, &first), block(2, &second));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[ENTRY_STRIDE + 1].starts_with(MARKER));

        let nets = parse_netsh_output(&text, viewport()).unwrap();
        let got: Vec<&str> = nets.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(got, ["HomeNet", "Neighbour"]);
        assert_eq!(nets[1].color, PALETTE[1]);
    }
}
