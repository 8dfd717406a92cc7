//! Harmony palette generation.
//!
//! A harmony expands one base color into a small palette by rotating its
//! hue (or, for monochromatic, scaling its lightness and saturation).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_utils::{Hsl, hex_to_hsl, hsl_to_rgb, normalize_hex, rgb_to_hex};
use crate::error::ColorError;


/// Lightness factor applied to the darker monochromatic variant.
const MONOCHROMATIC_LIGHTNESS_FACTOR: f64 = 0.8;
/// Saturation factor applied to the muted monochromatic variant.
const MONOCHROMATIC_SATURATION_FACTOR: f64 = 0.8;

/// A rule for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyType {
    /// Base plus its opposite hue
    #[default]
    Complementary,
    /// Base plus its neighbours 30 degrees either side
    Analogous,
    /// Base plus a darker and a less saturated variant of the same hue
    Monochromatic,
    /// Three hues spaced 120 degrees apart
    Triadic,
    /// Four hues spaced 90 degrees apart
    Tetradic,
}

impl HarmonyType {
    /// Get the display name for this harmony type.
    pub fn name(&self) -> &'static str {
        match self {
            HarmonyType::Complementary => "Complementary",
            HarmonyType::Analogous => "Analogous",
            HarmonyType::Monochromatic => "Monochromatic",
            HarmonyType::Triadic => "Triadic",
            HarmonyType::Tetradic => "Tetradic",
        }
    }

    /// Get all harmony types in selector order.
    pub fn all() -> &'static [HarmonyType] {
        &[
            HarmonyType::Complementary,
            HarmonyType::Analogous,
            HarmonyType::Monochromatic,
            HarmonyType::Triadic,
            HarmonyType::Tetradic,
        ]
    }

    /// Number of colors in a palette of this type, base included.
    pub fn arity(&self) -> usize {
        match self {
            HarmonyType::Complementary => 2,
            HarmonyType::Analogous | HarmonyType::Monochromatic | HarmonyType::Triadic => 3,
            HarmonyType::Tetradic => 4,
        }
    }

    /// Derive the palette members in HSL form, base first.
    fn variants(&self, base: Hsl) -> Vec<Hsl> {
        match self {
            HarmonyType::Complementary => vec![base, base.rotate(180.0)],
            HarmonyType::Analogous => vec![base, base.rotate(30.0), base.rotate(-30.0)],
            HarmonyType::Triadic => vec![base, base.rotate(120.0), base.rotate(240.0)],
            HarmonyType::Tetradic => vec![
                base,
                base.rotate(90.0),
                base.rotate(180.0),
                base.rotate(270.0),
            ],
            HarmonyType::Monochromatic => vec![
                base,
                Hsl::new(base.h, base.s, base.l * MONOCHROMATIC_LIGHTNESS_FACTOR),
                Hsl::new(base.h, base.s * MONOCHROMATIC_SATURATION_FACTOR, base.l),
            ],
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown harmony name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown harmony type '{0}'")]
pub struct UnknownHarmony(pub String);

impl FromStr for HarmonyType {
    type Err = UnknownHarmony;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyType::all()
            .iter()
            .copied()
            .find(|harmony| harmony.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownHarmony(s.to_string()))
    }
}

/// An ordered harmony palette. The first color is always the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyPalette {
    harmony: HarmonyType,
    colors: Vec<String>,
}

impl HarmonyPalette {
    /// The rule this palette was built with.
    pub fn harmony(&self) -> HarmonyType {
        self.harmony
    }

    /// The base color.
    pub fn base(&self) -> &str {
        &self.colors[0]
    }

    /// All colors, base first, as lowercase hex strings.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The derived colors, excluding the base.
    pub fn related(&self) -> &[String] {
        &self.colors[1..]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: a palette holds at least its base color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a HarmonyPalette {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Compute the harmony palette for a base color.
///
/// The base is re-serialized in canonical lowercase form and placed first;
/// the derived colors follow in the rule's fixed order. An invalid base
/// fails with [`ColorError::InvalidFormat`].
pub fn compute_harmony(base_hex: &str, harmony: HarmonyType) -> Result<HarmonyPalette, ColorError> {
    let base = normalize_hex(base_hex)?;
    let hsl = hex_to_hsl(&base)?;

    let mut colors = Vec::with_capacity(harmony.arity());
    colors.push(base);
    colors.extend(
        harmony
            .variants(hsl)
            .into_iter()
            .skip(1)
            .map(|variant| rgb_to_hex(hsl_to_rgb(variant))),
    );

    log::trace!("{} harmony of {}: {:?}", harmony, colors[0], &colors[1..]);

    Ok(HarmonyPalette { harmony, colors })
}
