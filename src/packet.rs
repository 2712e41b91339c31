//! Wire format of button reports and sender addressing.
//!
//! A report is five bytes: a two-byte preamble, the raw button state and a
//! little-endian battery reading. Anything that is not exactly that shape
//! is dropped by the parser.

use crate::events::ButtonState;

/// Two-byte preamble every report starts with.
pub const REPORT_PREAMBLE: [u8; 2] = *b"G2";

/// Exact length of a button report on the wire.
pub const REPORT_LEN: usize = 5;

/// The transmitter samples its battery through a 1:2 resistive divider.
const BATTERY_DIVIDER: u16 = 2;

/// Opaque radio address of one transmitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SenderAddr([u8; 6]);

impl SenderAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parse a colon-separated hex address like `"3C:84:27:AD:E3:68"`.
    ///
    /// Usable in const context so the known-sender table can be built at
    /// compile time. Panics on malformed input.
    pub const fn parse(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() == 17, "address must be 17 characters");
        let mut octets = [0u8; 6];
        let mut i = 0;
        while i < 6 {
            octets[i] = (hex_val(bytes[i * 3]) << 4) | hex_val(bytes[i * 3 + 1]);
            i += 1;
        }
        Self(octets)
    }
}

const fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => panic!("invalid hex digit in address"),
    }
}

/// A decoded button report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub state: ButtonState,
    /// Battery reading as transmitted, already divided down.
    pub battery_raw: u16,
}

impl Report {
    /// Decode a raw packet.
    ///
    /// Undersized, oversized or mispreambled data yields `None`; so does an
    /// unknown state byte.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() != REPORT_LEN || data[..2] != REPORT_PREAMBLE {
            return None;
        }
        let state = ButtonState::from_raw(data[2])?;
        let battery_raw = u16::from_le_bytes([data[3], data[4]]);
        Some(Self { state, battery_raw })
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        let battery = self.battery_raw.to_le_bytes();
        [
            REPORT_PREAMBLE[0],
            REPORT_PREAMBLE[1],
            self.state.as_raw(),
            battery[0],
            battery[1],
        ]
    }

    /// Battery voltage in millivolts, undoing the transmitter's divider.
    pub const fn battery_millivolts(&self) -> u16 {
        self.battery_raw.saturating_mul(BATTERY_DIVIDER)
    }
}
