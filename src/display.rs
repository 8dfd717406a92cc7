//! Text rendering of palettes for swatch captions and terminal output.

use crate::color_utils::{hex_to_rgb, rgb_to_hex};
use crate::error::ColorError;
use crate::harmony::{HarmonyPalette, HarmonyType};

/// Caption for the swatch at `index` of a palette built with `harmony`.
///
/// Index 0 is always the selected color.
pub fn swatch_label(harmony: HarmonyType, index: usize) -> String {
    match (harmony, index) {
        (_, 0) => "Selected Color".to_string(),
        (HarmonyType::Complementary, _) => "Complementary Color".to_string(),
        (harmony, i) => format!("{} Color {}", harmony.name(), i),
    }
}

/// Format one swatch as label, hex and RGB lines.
pub fn format_swatch(label: &str, hex: &str) -> Result<String, ColorError> {
    let rgb = hex_to_rgb(hex)?;
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    Ok(format!(
        "{}\nHEX: #{}\nRGB: {}",
        label,
        digits.to_uppercase(),
        rgb
    ))
}

/// Describe every color of a palette, one swatch per paragraph.
///
/// Complementary palettes also list the RGB inversion of the base color.
pub fn describe_palette(palette: &HarmonyPalette) -> Result<String, ColorError> {
    let mut swatches = palette
        .iter()
        .enumerate()
        .map(|(i, hex)| format_swatch(&swatch_label(palette.harmony(), i), hex))
        .collect::<Result<Vec<_>, _>>()?;

    if palette.harmony() == HarmonyType::Complementary {
        let inverted = rgb_to_hex(hex_to_rgb(palette.base())?.inverted());
        swatches.push(format_swatch("Inverted Color", &inverted)?);
    }

    Ok(format!(
        "{} harmony\n\n{}",
        palette.harmony(),
        swatches.join("\n\n")
    ))
}
