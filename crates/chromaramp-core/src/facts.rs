//! Colors derived from a base color: complement and legible foreground.

use crate::convert::RgbColor;
use crate::hex::HexColor;

/// Luminance above which dark text is chosen.
pub const CONTRAST_THRESHOLD: f64 = 0.55;

/// Weighted channel luminance in `0.0..=1.0`.
///
/// Uses the 0.299/0.587/0.114 luma weights on gamma-encoded channels. This
/// is a quick legibility heuristic and not WCAG relative luminance.
pub fn luminance(rgb: RgbColor) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

/// The RGB inversion of a color.
///
/// Each channel becomes `255 - c`. This is not a 180 degree hue rotation;
/// grays map to grays and the operation is its own inverse.
pub fn complementary(hex: &HexColor) -> HexColor {
    let RgbColor { r, g, b } = hex.to_rgb();
    HexColor::from(RgbColor::new(255 - r, 255 - g, 255 - b))
}

/// Black or white, whichever reads better on top of `hex`.
pub fn contrast_color(hex: &HexColor) -> HexColor {
    if luminance(hex.to_rgb()) > CONTRAST_THRESHOLD {
        HexColor::black()
    } else {
        HexColor::white()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::normalize;

    fn hex(s: &str) -> HexColor {
        normalize(s).unwrap()
    }

    #[test]
    fn test_complementary() {
        assert_eq!(complementary(&hex("#ff4757")), hex("#00b8a8"));
        assert_eq!(complementary(&HexColor::black()), HexColor::white());
        assert_eq!(complementary(&hex("#808080")), hex("#7f7f7f"));
    }

    #[test]
    fn test_complementary_involution() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let original = HexColor::from(RgbColor::new(r, g, b));
                    assert_eq!(complementary(&complementary(&original)), original);
                }
            }
        }
    }

    #[test]
    fn test_contrast_extremes() {
        assert_eq!(contrast_color(&hex("#ffffff")).as_str(), "#000000");
        assert_eq!(contrast_color(&hex("#000000")).as_str(), "#ffffff");
    }

    #[test]
    fn test_contrast_mid_gray() {
        // 128/255 is about 0.502, below the cutoff
        assert!(luminance(RgbColor::new(128, 128, 128)) < CONTRAST_THRESHOLD);
        assert_eq!(contrast_color(&hex("#808080")).as_str(), "#ffffff");
    }

    #[test]
    fn test_contrast_scenario() {
        let lum = luminance(RgbColor::new(255, 71, 87));
        assert!((lum - 0.5013).abs() < 0.001);
        assert_eq!(contrast_color(&hex("#ff4757")).as_str(), "#ffffff");
    }

    #[test]
    fn test_contrast_threshold_is_exclusive() {
        // Yellow is well above, pure green (0.587) just above, red below
        assert_eq!(contrast_color(&hex("#ffff00")), HexColor::black());
        assert_eq!(contrast_color(&hex("#00ff00")), HexColor::black());
        assert_eq!(contrast_color(&hex("#ff0000")), HexColor::white());
        assert_eq!(contrast_color(&hex("#8c8c8c")), HexColor::white());
        assert_eq!(contrast_color(&hex("#8d8d8d")), HexColor::black());
    }
}
