//! Hex color validation and canonicalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::RgbColor;
use crate::error::{ColorError, ColorResult};

/// A canonical `#rrggbb` color string.
///
/// Only produced by [`normalize`] or from an [`RgbColor`], so every value
/// is lowercase, `#`-prefixed and exactly six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Pure black.
    pub fn black() -> Self {
        Self::from(RgbColor::new(0, 0, 0))
    }

    /// Pure white.
    pub fn white() -> Self {
        Self::from(RgbColor::new(255, 255, 255))
    }

    /// The canonical string, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the channels. Total, since the value is already canonical.
    pub fn to_rgb(&self) -> RgbColor {
        let channel = |i: usize| {
            // Canonical values always hold valid hex pairs at 1..7.
            u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0)
        };
        RgbColor::new(channel(1), channel(3), channel(5))
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        normalize(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> ColorResult<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate and canonicalize a hex color string.
///
/// Accepts `rgb` shorthand and `rrggbb`, each with or without a leading `#`
/// and surrounding whitespace. Returns `None` for anything else.
pub fn normalize(input: &str) -> Option<HexColor> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };

    Some(HexColor(format!("#{}", expanded.to_ascii_lowercase())))
}
