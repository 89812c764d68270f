//! RGB color value type
//!
//! The CDN option grammar carries colors as six lowercase hex digits with no
//! leading `#` (e.g. `ff8800`). Signatures and cache keys downstream depend
//! on the exact case, so rendering is fixed here and used everywhere.

use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color.
///
/// Platform color objects (UIColor, NSColor, egui::Color32, ...) are expected
/// to be reduced to this type by the surrounding application; the core stays
/// free of GUI-toolkit dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Renders the fixed wire form: six lowercase hex digits, no `#`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    value: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.value)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for RgbColor {
    type Err = ParseColorError;

    /// Accepts `rrggbb` or `#rrggbb`, any hex digit case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError {
                value: s.to_string(),
            });
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError {
                value: s.to_string(),
            })
        };

        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}
