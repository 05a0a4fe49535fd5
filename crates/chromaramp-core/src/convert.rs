//! Conversions between hex, RGB and HSL.
//!
//! HSL components are integers (degrees and percentages), so a trip through
//! HSL quantizes: converting back can move a channel by a few units. Colors
//! whose HSL lands exactly on integer values survive unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};
use crate::hex::{normalize, HexColor};

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as fractions in `0.0..=1.0`.
    fn unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// CSS text form, e.g. `rgb(255, 71, 87)`.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSL color with integer components.
///
/// Hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`. The constructor rejects anything outside those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawHsl")]
pub struct HslColor {
    h: u16,
    s: u8,
    l: u8,
}

#[derive(Deserialize)]
struct RawHsl {
    h: u32,
    s: u32,
    l: u32,
}

impl TryFrom<RawHsl> for HslColor {
    type Error = ColorError;

    fn try_from(raw: RawHsl) -> ColorResult<Self> {
        let h = check_range("hue", raw.h, 359)?;
        let s = check_range("saturation", raw.s, 100)?;
        let l = check_range("lightness", raw.l, 100)?;
        // Ranges checked above fit the narrower types
        Ok(Self {
            h: h as u16,
            s: s as u8,
            l: l as u8,
        })
    }
}

fn check_range(component: &'static str, value: u32, max: u32) -> ColorResult<u32> {
    if value > max {
        Err(ColorError::OutOfRange {
            component,
            value,
            max,
        })
    } else {
        Ok(value)
    }
}

impl HslColor {
    pub fn new(h: u16, s: u8, l: u8) -> ColorResult<Self> {
        Self::try_from(RawHsl {
            h: u32::from(h),
            s: u32::from(s),
            l: u32::from(l),
        })
    }

    /// Hue in degrees.
    pub fn h(&self) -> u16 {
        self.h
    }

    /// Saturation percentage.
    pub fn s(&self) -> u8 {
        self.s
    }

    /// Lightness percentage.
    pub fn l(&self) -> u8 {
        self.l
    }

    /// Same hue and saturation at a different lightness, clamped to 100.
    pub fn with_lightness(self, l: u8) -> Self {
        Self { l: l.min(100), ..self }
    }
}

/// CSS text form, e.g. `hsl(355, 100%, 64%)`.
impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Parse any accepted hex form into RGB.
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    normalize(hex).map(|h| h.to_rgb())
}

pub fn rgb_to_hex(rgb: RgbColor) -> HexColor {
    HexColor::from(rgb)
}

pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let (r, g, b) = rgb.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sextant = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (sextant / 6.0, s)
    };

    // Every factor is non-negative, so rounding and narrowing are exact.
    HslColor {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if hsl.s == 0 {
        let v = to_channel(l);
        return RgbColor::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    RgbColor::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<RgbColor> for HslColor {
    fn from(rgb: RgbColor) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<HslColor> for RgbColor {
    fn from(hsl: HslColor) -> Self {
        hsl_to_rgb(hsl)
    }
}
