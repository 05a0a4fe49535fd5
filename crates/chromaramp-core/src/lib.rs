//! Chromaramp Core Library
//!
//! Hex/RGB/HSL conversion and palette derivation: shade ramps,
//! complementary colors and legible foreground colors.

pub mod config;
pub mod convert;
pub mod error;
pub mod facts;
pub mod hex;
pub mod report;
pub mod shades;

pub use config::{ConfigError, ConfigResult, PaletteConfig};
pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, HslColor, RgbColor};
pub use error::{ColorError, ColorResult};
pub use facts::{complementary, contrast_color, luminance, CONTRAST_THRESHOLD};
pub use hex::{normalize, HexColor};
pub use report::ColorReport;
pub use shades::{generate_shades, generate_shades_with, ShadeEntry, ShadeOptions, ShadeRamp};
