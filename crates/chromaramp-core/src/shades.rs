//! Tonal shade ramps derived from a base color.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::convert::{hsl_to_rgb, rgb_to_hsl, HslColor};
use crate::hex::HexColor;

/// Default number of darker (and lighter) steps around the base color.
pub const DEFAULT_STEPS_PER_SIDE: u8 = 3;

/// Default lightness distance between neighbouring steps, in percent.
pub const DEFAULT_STEP_PERCENT: u8 = 12;

/// How a ramp is laid out around its base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadeOptions {
    /// Steps generated on each side of the base color.
    pub steps_per_side: u8,
    /// Lightness percentage points between steps.
    pub step_percent: u8,
}

impl Default for ShadeOptions {
    fn default() -> Self {
        Self {
            steps_per_side: DEFAULT_STEPS_PER_SIDE,
            step_percent: DEFAULT_STEP_PERCENT,
        }
    }
}

impl ShadeOptions {
    /// Lightness targets from darkest to lightest, `None` marking the base.
    fn targets(&self, base_l: u8) -> Vec<Option<u8>> {
        let n = u16::from(self.steps_per_side);
        let offset = |i: u16| i * u16::from(self.step_percent);
        let base = u16::from(base_l);

        let darker = (1..=n).rev().map(|i| Some(base.saturating_sub(offset(i)) as u8));
        let lighter = (1..=n).map(|i| Some((base + offset(i)).min(100) as u8));

        darker.chain(std::iter::once(None)).chain(lighter).collect()
    }
}

/// One tonal variant of a base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeEntry {
    pub hex: HexColor,
    /// HSL recomputed from `hex`, not the requested target.
    pub hsl: HslColor,
}

impl ShadeEntry {
    fn from_hex(hex: HexColor) -> Self {
        let hsl = rgb_to_hsl(hex.to_rgb());
        Self { hex, hsl }
    }
}

/// Shades of one base color, unique by hex and sorted darkest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeRamp {
    base: HexColor,
    entries: Vec<ShadeEntry>,
}

impl ShadeRamp {
    /// The color this ramp was generated from.
    pub fn base(&self) -> &HexColor {
        &self.base
    }

    pub fn entries(&self) -> &[ShadeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShadeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the base color within the ramp.
    pub fn base_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.hex == self.base)
    }

    pub fn darkest(&self) -> Option<&ShadeEntry> {
        self.entries.first()
    }

    pub fn lightest(&self) -> Option<&ShadeEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a ShadeRamp {
    type Item = &'a ShadeEntry;
    type IntoIter = std::slice::Iter<'a, ShadeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Generate the default ramp: three darker and three lighter steps, 12% apart.
pub fn generate_shades(hex: &HexColor) -> ShadeRamp {
    generate_shades_with(hex, &ShadeOptions::default())
}

/// Generate a ramp with custom step count and spacing.
///
/// Steps that clamp at black or white can collapse onto the same hex, so
/// the ramp may hold fewer than `2 * steps_per_side + 1` entries.
pub fn generate_shades_with(hex: &HexColor, options: &ShadeOptions) -> ShadeRamp {
    let base_hsl = rgb_to_hsl(hex.to_rgb());

    let mut unique: BTreeMap<String, ShadeEntry> = BTreeMap::new();
    for target in options.targets(base_hsl.l()) {
        let shade = match target {
            Some(l) => HexColor::from(hsl_to_rgb(base_hsl.with_lightness(l))),
            None => hex.clone(),
        };
        unique
            .entry(shade.as_str().to_string())
            .or_insert_with(|| ShadeEntry::from_hex(shade));
    }

    let mut entries: Vec<ShadeEntry> = unique.into_values().collect();
    // Map iteration is already hex-ordered, so a stable sort keeps ties deterministic
    entries.sort_by_key(|e| e.hsl.l());

    log::debug!(
        "Generated {} shades for {} ({} steps per side, {}% apart)",
        entries.len(),
        hex,
        options.steps_per_side,
        options.step_percent
    );

    ShadeRamp {
        base: hex.clone(),
        entries,
    }
}
