//! Everything a swatch view needs to know about one color.

use serde::Serialize;

use crate::config::PaletteConfig;
use crate::convert::{rgb_to_hsl, HslColor, RgbColor};
use crate::facts::{complementary, contrast_color};
use crate::hex::{normalize, HexColor};
use crate::shades::{generate_shades_with, ShadeOptions, ShadeRamp};

/// Derived facts about a single base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorReport {
    pub hex: HexColor,
    pub rgb: RgbColor,
    pub hsl: HslColor,
    /// `rgb(r, g, b)` text for copying.
    pub rgb_css: String,
    /// `hsl(h, s%, l%)` text for copying.
    pub hsl_css: String,
    pub complementary: HexColor,
    /// Foreground color for text drawn on `hex`.
    pub contrast: HexColor,
    pub shades: ShadeRamp,
}

impl ColorReport {
    pub fn new(hex: &HexColor, options: &ShadeOptions) -> Self {
        let rgb = hex.to_rgb();
        let hsl = rgb_to_hsl(rgb);

        Self {
            hex: hex.clone(),
            rgb,
            hsl,
            rgb_css: rgb.to_string(),
            hsl_css: hsl.to_string(),
            complementary: complementary(hex),
            contrast: contrast_color(hex),
            shades: generate_shades_with(hex, options),
        }
    }

    /// Build a report from free-text input, or `None` if it is not a color.
    pub fn from_input(input: &str, options: &ShadeOptions) -> Option<Self> {
        normalize(input).map(|hex| Self::new(&hex, options))
    }

    /// Build a report from free-text input, substituting the configured
    /// fallback color when the input is not a color.
    ///
    /// The flag is `true` when the fallback was used.
    pub fn from_input_or_fallback(input: &str, config: &PaletteConfig) -> (Self, bool) {
        match Self::from_input(input, &config.shades) {
            Some(report) => (report, false),
            None => {
                log::warn!(
                    "Invalid color {:?}, falling back to {}",
                    input,
                    config.fallback
                );
                (Self::new(&config.fallback, &config.shades), true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_scenario() {
        let report = ColorReport::from_input("#ff4757", &ShadeOptions::default()).unwrap();
        assert_eq!(report.rgb, RgbColor::new(255, 71, 87));
        assert_eq!(report.hsl_css, "hsl(355, 100%, 64%)");
        assert_eq!(report.rgb_css, "rgb(255, 71, 87)");
        assert_eq!(report.complementary.as_str(), "#00b8a8");
        assert_eq!(report.contrast.as_str(), "#ffffff");
        assert_eq!(report.shades.len(), 7);
    }

    #[test]
    fn test_report_rejects_invalid() {
        assert!(ColorReport::from_input("purple", &ShadeOptions::default()).is_none());
    }

    #[test]
    fn test_fallback() {
        let config = PaletteConfig::default();
        let (report, fell_back) = ColorReport::from_input_or_fallback("#12", &config);
        assert!(fell_back);
        assert_eq!(report.hex, config.fallback);

        let (report, fell_back) = ColorReport::from_input_or_fallback(" abc ", &config);
        assert!(!fell_back);
        assert_eq!(report.hex.as_str(), "#aabbcc");
    }

    #[test]
    fn test_report_json_shape() {
        let report = ColorReport::from_input("000", &ShadeOptions::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["hex"], "#000000");
        assert_eq!(json["rgb"]["g"], 0);
        assert_eq!(json["hsl"]["l"], 0);
        assert_eq!(json["contrast"], "#ffffff");
        assert_eq!(json["shades"]["base"], "#000000");
        assert_eq!(json["shades"]["entries"][1]["hex"], "#1f1f1f");
    }
}
